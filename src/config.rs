//! Client configuration parsed from the page's `beautyflow-config` meta tag.
//!
//! The tag carries a JSON object; every field is optional and falls back to
//! the defaults below, which match the storefront backend's routes.

use serde::Deserialize;

pub const CONFIG_META_NAME: &str = "beautyflow-config";

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const GENERATE_PATH: &str = "/ai/generate";

pub const DEFAULT_LOGIN_SUCCESS_URL: &str = "index.html";
pub const DEFAULT_SIGNUP_SUCCESS_URL: &str = "/login";
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 6;
pub const DEFAULT_SMART_PICK_CARDS: usize = 3;

/// Errors produced while reading client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The meta tag content is not a JSON object of the expected shape.
    #[error("config parse failed: {0}")]
    Parse(String),

    /// A field parsed but holds a value the client cannot work with.
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// How a validated login form reaches the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginMode {
    /// Let the browser post the form; the server answers with a redirect.
    #[default]
    Native,
    /// Post `{email, password}` as JSON and navigate on success.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every backend endpoint. Empty means same origin.
    pub api_base: String,
    pub login_mode: LoginMode,
    pub login_success_url: String,
    pub signup_success_url: String,
    /// Ask for first and last name instead of a username on signup.
    pub signup_full_name: bool,
    pub min_password_len: usize,
    pub smart_pick_cards: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            login_mode: LoginMode::Native,
            login_success_url: DEFAULT_LOGIN_SUCCESS_URL.to_owned(),
            signup_success_url: DEFAULT_SIGNUP_SUCCESS_URL.to_owned(),
            signup_full_name: false,
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
            smart_pick_cards: DEFAULT_SMART_PICK_CARDS,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_base: Option<String>,
    login_mode: Option<LoginMode>,
    login_success_url: Option<String>,
    signup_success_url: Option<String>,
    signup_full_name: Option<bool>,
    min_password_len: Option<usize>,
    smart_pick_cards: Option<usize>,
}

impl ClientConfig {
    /// Build typed config from the JSON carried by the meta tag.
    ///
    /// Unknown fields are ignored and missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a numeric limit is zero.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let defaults = Self::default();

        let min_password_len = non_zero("min_password_len", raw.min_password_len, defaults.min_password_len)?;
        let smart_pick_cards = non_zero("smart_pick_cards", raw.smart_pick_cards, defaults.smart_pick_cards)?;

        Ok(Self {
            api_base: raw
                .api_base
                .map(|base| base.trim().trim_end_matches('/').to_owned())
                .unwrap_or(defaults.api_base),
            login_mode: raw.login_mode.unwrap_or(defaults.login_mode),
            login_success_url: raw.login_success_url.unwrap_or(defaults.login_success_url),
            signup_success_url: raw.signup_success_url.unwrap_or(defaults.signup_success_url),
            signup_full_name: raw.signup_full_name.unwrap_or(defaults.signup_full_name),
            min_password_len,
            smart_pick_cards,
        })
    }

    /// Read config from the document, falling back to defaults when the tag
    /// is absent or unusable.
    pub fn from_document() -> Self {
        let Some(raw) = meta_config_content() else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring {CONFIG_META_NAME}: {e}");
                Self::default()
            }
        }
    }

    pub fn login_endpoint(&self) -> String {
        self.endpoint(LOGIN_PATH)
    }

    pub fn signup_endpoint(&self) -> String {
        self.endpoint(SIGNUP_PATH)
    }

    pub fn generate_endpoint(&self) -> String {
        self.endpoint(GENERATE_PATH)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

fn non_zero(field: &'static str, value: Option<usize>, default: usize) -> Result<usize, ConfigError> {
    match value {
        None => Ok(default),
        Some(0) => Err(ConfigError::Invalid { field, reason: "must be at least 1".to_owned() }),
        Some(n) => Ok(n),
    }
}

fn meta_config_content() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{CONFIG_META_NAME}\"]");
        let meta = document.query_selector(&selector).ok()??;
        meta.get_attribute("content")
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
