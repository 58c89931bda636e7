//! Request/response DTOs for `/login`, `/signup` and `/ai/generate`.
//!
//! DESIGN
//! ======
//! Response bodies are parsed leniently: an unparsable or empty body becomes
//! the type's `Default` so a misbehaving backend degrades into a fallback
//! message instead of an error path of its own.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const NETWORK_ERROR_MESSAGE: &str = "Network error.";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by backend requests.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success HTTP status.
    #[error("request rejected: status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// No browser runtime is available to perform the request.
    #[error("network unavailable outside the browser")]
    Unavailable,
}

impl ApiError {
    /// The text shown to the user for this failure.
    ///
    /// Server-provided messages win; otherwise `fallback` for rejections and
    /// the generic network message for transport failures.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            Self::Rejected { .. } => fallback.to_owned(),
            Self::Network(_) | Self::Unavailable => NETWORK_ERROR_MESSAGE.to_owned(),
        }
    }
}

/// Parse a JSON body, yielding `T::default()` when it is missing or malformed.
pub fn parse_lenient<T: DeserializeOwned + Default>(body: &str) -> T {
    serde_json::from_str(body).unwrap_or_default()
}

// =============================================================================
// AUTH
// =============================================================================

/// JSON login payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// How the signup form names the account holder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SignupName {
    Username { username: String },
    FullName { first_name: String, last_name: String },
}

/// JSON signup payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    #[serde(flatten)]
    pub name: SignupName,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
    pub confirm_password: String,
}

/// Error body shared by the auth endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// IMAGE GENERATION
// =============================================================================

/// `POST /ai/generate` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibe: Option<String>,
}

/// Product the backend created alongside a generated image.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GeneratedProduct {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price_sar: Option<f64>,
    #[serde(default)]
    pub size: Option<String>,
}

/// `POST /ai/generate` response body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub product: Option<GeneratedProduct>,
}

/// A completed HTTP exchange with the generation endpoint.
///
/// Non-2xx statuses are not errors here: the body still carries the
/// explanation the UI shows.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerateReply {
    pub http_ok: bool,
    pub body: GenerateResponse,
}

/// What a generation attempt produced, as far as the UI is concerned.
#[derive(Clone, Debug, PartialEq)]
pub enum GenerateOutcome {
    Image { url: String, product: Option<GeneratedProduct> },
    Failed { message: Option<String> },
    NetworkError,
}

impl GenerateOutcome {
    /// Classify a request result into image / well-formed failure / transport failure.
    pub fn from_result(result: Result<GenerateReply, ApiError>) -> Self {
        let reply = match result {
            Ok(reply) => reply,
            Err(ApiError::Rejected { message, .. }) => return Self::Failed { message },
            Err(ApiError::Network(_) | ApiError::Unavailable) => return Self::NetworkError,
        };

        let GenerateResponse { ok, image_url, message, error, product } = reply.body;
        match image_url.filter(|url| !url.is_empty()) {
            Some(url) if reply.http_ok && ok => Self::Image { url, product },
            _ => Self::Failed { message: message.or(error).filter(|m| !m.trim().is_empty()) },
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }
}
