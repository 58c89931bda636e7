//! Login and signup form validation.
//!
//! Validation is synchronous and runs before any request is built; a form
//! that fails never reaches the network. Entered values are only read, never
//! cleared, so the user can fix them in place.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::{LoginRequest, SignupName, SignupRequest};

pub const LOGIN_FAILED_FALLBACK: &str = "Login failed.";
pub const SIGNUP_FAILED_FALLBACK: &str = "Signup failed.";

/// A client-side validation failure, one variant per failure class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter both email and password.")]
    LoginFieldsMissing,

    #[error("Please fill all required fields.")]
    MissingRequired,

    #[error("Password must be at least {0} characters.")]
    PasswordTooShort(usize),

    #[error("Passwords do not match!")]
    PasswordMismatch,
}

/// Current values of the login inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

/// Validate the login form.
///
/// # Errors
///
/// Returns [`ValidationError::LoginFieldsMissing`] when either trimmed field is empty.
pub fn validate_login(fields: &LoginFields) -> Result<LoginRequest, ValidationError> {
    let email = fields.email.trim();
    let password = fields.password.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::LoginFieldsMissing);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// How the signup page asks for the account holder's name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameFields {
    Username(String),
    FullName { first_name: String, last_name: String },
}

impl Default for NameFields {
    fn default() -> Self {
        Self::Username(String::new())
    }
}

impl NameFields {
    fn trimmed(&self) -> Option<SignupName> {
        match self {
            Self::Username(username) => {
                let username = username.trim();
                (!username.is_empty()).then(|| SignupName::Username { username: username.to_owned() })
            }
            Self::FullName { first_name, last_name } => {
                let (first_name, last_name) = (first_name.trim(), last_name.trim());
                (!first_name.is_empty() && !last_name.is_empty()).then(|| SignupName::FullName {
                    first_name: first_name.to_owned(),
                    last_name: last_name.to_owned(),
                })
            }
        }
    }
}

/// Current values of the signup inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupFields {
    pub name: NameFields,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validate the signup form and build the request body.
///
/// Every failing class is reported exactly once, in display order.
/// Passwords are compared as typed; only names, email and phone are trimmed.
///
/// # Errors
///
/// Returns the list of failing classes when any check fails.
pub fn validate_signup(fields: &SignupFields, min_password_len: usize) -> Result<SignupRequest, Vec<ValidationError>> {
    let name = fields.name.trimmed();
    let email = fields.email.trim().to_lowercase();
    let phone = fields.phone.trim();
    let password = fields.password.as_str();

    let mut errors = Vec::new();
    if name.is_none() || email.is_empty() || password.is_empty() {
        errors.push(ValidationError::MissingRequired);
    }
    if password_too_short(password, min_password_len) {
        errors.push(ValidationError::PasswordTooShort(min_password_len));
    }
    if password != fields.confirm_password {
        errors.push(ValidationError::PasswordMismatch);
    }

    match name {
        Some(name) if errors.is_empty() => Ok(SignupRequest {
            name,
            email,
            phone: (!phone.is_empty()).then(|| phone.to_owned()),
            password: password.to_owned(),
            confirm_password: fields.confirm_password.clone(),
        }),
        _ => Err(errors),
    }
}

/// Whether the live hint under the password field should show.
///
/// Hidden while the field is empty so the hint does not nag before typing.
pub fn password_hint_visible(password: &str, min_password_len: usize) -> bool {
    !password.is_empty() && password_too_short(password, min_password_len)
}

fn password_too_short(password: &str, min_password_len: usize) -> bool {
    password.chars().count() < min_password_len
}

/// Messages for the error list under the signup form.
///
/// The length class is left out; it only ever shows under the password field.
pub fn listed_signup_errors(errors: &[ValidationError]) -> Vec<String> {
    errors
        .iter()
        .filter(|e| !matches!(e, ValidationError::PasswordTooShort(_)))
        .map(ToString::to_string)
        .collect()
}

/// Whether the length message under the password field shows.
///
/// It shows while a non-empty password is too short, and after a submit that
/// failed the length check (empty password included) until the password is
/// long enough.
pub fn length_message_visible(password: &str, min_password_len: usize, failed_on_submit: bool) -> bool {
    password_hint_visible(password, min_password_len)
        || (failed_on_submit && password_too_short(password, min_password_len))
}
