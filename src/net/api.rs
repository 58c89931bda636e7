//! HTTP helpers for the storefront backend.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only reachable from the page.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures map to [`ApiError::Network`]; non-2xx statuses map to
//! [`ApiError::Rejected`] carrying the body's `message` when one parses.
//! Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, GenerateReply, GenerateRequest, LoginRequest, SignupRequest};
#[cfg(any(test, feature = "csr"))]
use super::types::{GenerateResponse, MessageBody, parse_lenient};

#[cfg(any(test, feature = "csr"))]
fn rejection(status: u16, body: &str) -> ApiError {
    let body: MessageBody = parse_lenient(body);
    ApiError::Rejected { status, message: body.message }
}

#[cfg(any(test, feature = "csr"))]
fn generate_reply(http_ok: bool, body: &str) -> GenerateReply {
    let body: GenerateResponse = parse_lenient(body);
    GenerateReply { http_ok, body }
}

#[cfg(feature = "csr")]
async fn post_json<T: serde::Serialize>(endpoint: &str, payload: &T) -> Result<gloo_net::http::Response, ApiError> {
    gloo_net::http::Request::post(endpoint)
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "csr")]
async fn expect_success(endpoint: &str, resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() {
        return Ok(());
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    log::warn!("{endpoint} rejected with status {status}");
    Err(rejection(status, &body))
}

/// Submit credentials via `POST /login` as JSON.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] for non-2xx answers and
/// [`ApiError::Network`] when the request fails in transit.
pub async fn login(endpoint: &str, request: &LoginRequest) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = post_json(endpoint, request).await?;
        expect_success(endpoint, resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, request);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /signup`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] for non-2xx answers and
/// [`ApiError::Network`] when the request fails in transit.
pub async fn signup(endpoint: &str, request: &SignupRequest) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = post_json(endpoint, request).await?;
        expect_success(endpoint, resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, request);
        Err(ApiError::Unavailable)
    }
}

/// Request an image via `POST /ai/generate`.
///
/// Any HTTP status yields a [`GenerateReply`]; only transport failures are
/// errors.
///
/// # Errors
///
/// Returns [`ApiError::Network`] when the request fails in transit.
pub async fn generate(endpoint: &str, request: &GenerateRequest) -> Result<GenerateReply, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = post_json(endpoint, request).await?;
        let http_ok = resp.ok();
        if !http_ok {
            log::warn!("{endpoint} answered status {}", resp.status());
        }
        let body = resp.text().await.unwrap_or_default();
        Ok(generate_reply(http_ok, &body))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, request);
        Err(ApiError::Unavailable)
    }
}
