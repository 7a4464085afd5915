use super::*;
use serde_json::json;

const LOGIN_FAILED: MessageKey = MessageKey::new("root.login.loginFailed", "Login failed");

fn translations() -> Translations {
    Translations::new(json!({
        "root": { "login": { "networkError": "Réseau indisponible", "emailRequired": "Email requis" } }
    }))
}

#[test]
fn validation_messages_are_distinct() {
    let all = [
        ValidationError::EmailRequired,
        ValidationError::EmailInvalid,
        ValidationError::PasswordRequired,
        ValidationError::PasswordLength,
        ValidationError::VerificationCodeRequired,
    ];
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a.message().key, b.message().key);
            assert_ne!(a.message().fallback, b.message().fallback);
        }
    }
}

#[test]
fn invalid_uses_translated_validation_text() {
    let err = AuthError::from(ValidationError::EmailRequired);
    assert_eq!(err.user_message(&translations(), LOGIN_FAILED), "Email requis");
}

#[test]
fn rejected_surfaces_server_message_verbatim() {
    let err = AuthError::rejected(Some("Account locked".to_owned()));
    assert_eq!(err.user_message(&translations(), LOGIN_FAILED), "Account locked");
}

#[test]
fn rejected_without_message_uses_mode_fallback() {
    let err = AuthError::rejected(None);
    assert_eq!(err.user_message(&translations(), LOGIN_FAILED), "Login failed");
}

#[test]
fn rejected_blank_message_counts_as_missing() {
    assert_eq!(AuthError::rejected(Some("  ".to_owned())), AuthError::Rejected { message: None });
}

#[test]
fn transport_uses_network_error_text() {
    let err = AuthError::Transport("connection reset".to_owned());
    assert_eq!(err.user_message(&translations(), LOGIN_FAILED), "Réseau indisponible");
    assert_eq!(
        err.user_message(&Translations::default(), LOGIN_FAILED),
        NETWORK_ERROR.fallback
    );
}

#[test]
fn display_includes_detail() {
    assert_eq!(
        AuthError::Transport("timeout".to_owned()).to_string(),
        "transport failure: timeout"
    );
    assert_eq!(
        AuthError::rejected(Some("nope".to_owned())).to_string(),
        "request rejected: nope"
    );
}
