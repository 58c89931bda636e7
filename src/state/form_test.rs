use super::*;

// =============================================================
// Helpers
// =============================================================

fn signup(password: &str, confirm: &str) -> SignupFields {
    SignupFields {
        name: NameFields::Username("mona".to_owned()),
        email: "Mona@Example.com".to_owned(),
        phone: String::new(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_with_empty_password_is_rejected() {
    let fields = LoginFields { email: "a@b.com".to_owned(), password: String::new() };
    let err = validate_login(&fields).unwrap_err();
    assert_eq!(err, ValidationError::LoginFieldsMissing);
    assert_eq!(err.to_string(), "Please enter both email and password.");
}

#[test]
fn login_with_whitespace_only_email_is_rejected() {
    let fields = LoginFields { email: "   ".to_owned(), password: "secret".to_owned() };
    assert_eq!(validate_login(&fields), Err(ValidationError::LoginFieldsMissing));
}

#[test]
fn login_trims_both_fields() {
    let fields = LoginFields { email: "  a@b.com ".to_owned(), password: " secret ".to_owned() };
    assert_eq!(
        validate_login(&fields),
        Ok(LoginRequest { email: "a@b.com".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn login_validation_leaves_fields_untouched() {
    let fields = LoginFields { email: " a@b.com".to_owned(), password: String::new() };
    let before = fields.clone();
    let _ = validate_login(&fields);
    assert_eq!(fields, before);
}

// =============================================================
// Signup
// =============================================================

#[test]
fn signup_short_password_is_rejected() {
    let errors = validate_signup(&signup("abc12", "abc12"), 6).unwrap_err();
    assert_eq!(errors, vec![ValidationError::PasswordTooShort(6)]);
    assert_eq!(errors[0].to_string(), "Password must be at least 6 characters.");
}

#[test]
fn signup_mismatched_passwords_are_rejected() {
    let errors = validate_signup(&signup("abcdef", "xyz987"), 6).unwrap_err();
    assert_eq!(errors, vec![ValidationError::PasswordMismatch]);
    assert_eq!(errors[0].to_string(), "Passwords do not match!");
}

#[test]
fn signup_reports_each_failure_class_once() {
    let fields = SignupFields {
        name: NameFields::Username("  ".to_owned()),
        email: String::new(),
        phone: String::new(),
        password: "abc".to_owned(),
        confirm_password: "xyz".to_owned(),
    };
    let errors = validate_signup(&fields, 6).unwrap_err();
    assert_eq!(
        errors,
        vec![
            ValidationError::MissingRequired,
            ValidationError::PasswordTooShort(6),
            ValidationError::PasswordMismatch,
        ]
    );
}

#[test]
fn signup_empty_password_counts_as_missing_and_short() {
    let errors = validate_signup(&signup("", ""), 6).unwrap_err();
    assert_eq!(errors, vec![ValidationError::MissingRequired, ValidationError::PasswordTooShort(6)]);
}

#[test]
fn signup_passwords_are_not_trimmed() {
    let errors = validate_signup(&signup("abcdef ", "abcdef"), 6).unwrap_err();
    assert_eq!(errors, vec![ValidationError::PasswordMismatch]);
}

#[test]
fn signup_success_normalizes_email_and_drops_empty_phone() {
    let req = validate_signup(&signup("abcdef", "abcdef"), 6).unwrap();
    assert_eq!(req.name, SignupName::Username { username: "mona".to_owned() });
    assert_eq!(req.email, "mona@example.com");
    assert_eq!(req.phone, None);
    assert_eq!(req.password, "abcdef");
    assert_eq!(req.confirm_password, "abcdef");
}

#[test]
fn signup_keeps_trimmed_phone() {
    let mut fields = signup("abcdef", "abcdef");
    fields.phone = " 0551234567 ".to_owned();
    let req = validate_signup(&fields, 6).unwrap();
    assert_eq!(req.phone.as_deref(), Some("0551234567"));
}

#[test]
fn signup_full_name_requires_both_parts() {
    let mut fields = signup("abcdef", "abcdef");
    fields.name = NameFields::FullName { first_name: "Mona".to_owned(), last_name: " ".to_owned() };
    assert_eq!(validate_signup(&fields, 6), Err(vec![ValidationError::MissingRequired]));

    fields.name = NameFields::FullName { first_name: " Mona ".to_owned(), last_name: "Ali".to_owned() };
    let req = validate_signup(&fields, 6).unwrap();
    assert_eq!(
        req.name,
        SignupName::FullName { first_name: "Mona".to_owned(), last_name: "Ali".to_owned() }
    );
}

#[test]
fn signup_respects_configured_minimum() {
    assert!(validate_signup(&signup("abcdef", "abcdef"), 8).is_err());
    assert!(validate_signup(&signup("abcdefgh", "abcdefgh"), 8).is_ok());
}

// =============================================================
// Password hint
// =============================================================

#[test]
fn password_hint_hidden_while_empty() {
    assert!(!password_hint_visible("", 6));
}

#[test]
fn password_hint_tracks_length() {
    assert!(password_hint_visible("abc", 6));
    assert!(!password_hint_visible("abcdef", 6));
}

#[test]
fn password_hint_counts_characters_not_bytes() {
    assert!(!password_hint_visible("ورد123", 6));
}

// =============================================================
// Signup message routing
// =============================================================

#[test]
fn short_password_message_shows_once_after_submit() {
    let failures = validate_signup(&signup("abc12", "abc12"), 6).unwrap_err();
    let failed_length = failures.contains(&ValidationError::PasswordTooShort(6));

    let listed = listed_signup_errors(&failures);
    assert!(listed.is_empty());
    assert!(failed_length);
    assert!(length_message_visible("abc12", 6, failed_length));
}

#[test]
fn listed_errors_keep_other_classes_in_order() {
    let failures = validate_signup(&signup("", "x"), 6).unwrap_err();
    assert_eq!(listed_signup_errors(&failures), vec!["Please fill all required fields.", "Passwords do not match!"]);
    assert!(length_message_visible("", 6, true));
}

#[test]
fn length_message_hidden_for_untouched_empty_password() {
    assert!(!length_message_visible("", 6, false));
}

#[test]
fn length_message_clears_once_password_is_long_enough() {
    assert!(!length_message_visible("abcdef", 6, true));
}
