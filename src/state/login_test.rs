use super::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn filled(mode: AuthMode) -> MailLoginForm {
    MailLoginForm {
        mode,
        email: "user@example.com".to_owned(),
        password: "hunter22".to_owned(),
        verification_code: String::new(),
        ..MailLoginForm::default()
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn email_pattern() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last+tag@sub.example.org"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a b@c.de"));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a@@b.co"));
}

#[test]
fn validation_order_first_failure_wins() {
    use ValidationError::*;
    assert_eq!(validate_credentials(AuthMode::Register, "", "", ""), Err(EmailRequired));
    assert_eq!(validate_credentials(AuthMode::Register, "nope", "", ""), Err(EmailInvalid));
    assert_eq!(validate_credentials(AuthMode::Register, "a@b.co", "", ""), Err(PasswordRequired));
    assert_eq!(validate_credentials(AuthMode::Register, "a@b.co", "short", ""), Err(PasswordLength));
    assert_eq!(
        validate_credentials(AuthMode::Register, "a@b.co", "longenough", ""),
        Err(VerificationCodeRequired)
    );
}

#[test]
fn password_length_bounds() {
    for (len, ok) in [(7, false), (8, true), (16, true), (17, false)] {
        let password = "x".repeat(len);
        let result = validate_credentials(AuthMode::Login, "a@b.co", &password, "");
        assert_eq!(result.is_ok(), ok, "len={len}");
        if !ok {
            assert_eq!(result, Err(ValidationError::PasswordLength));
        }
    }
}

#[test]
fn password_length_counts_characters() {
    let password = "密码密码密码密码";
    assert!(password.len() > 16);
    assert!(validate_credentials(AuthMode::Login, "a@b.co", password, "").is_ok());
}

#[test]
fn login_mode_ignores_verification_code() {
    assert_eq!(
        validate_credentials(AuthMode::Login, "a@b.co", "12345678", ""),
        Ok(MailLoginRequest::Login {
            email: "a@b.co".to_owned(),
            password: "12345678".to_owned()
        })
    );
}

// =============================================================
// Submission
// =============================================================

#[test]
fn invalid_submit_sends_nothing_and_shows_message() {
    let mut form = filled(AuthMode::Login);
    form.password = "1234567".to_owned();
    assert_eq!(form.begin_submit(), SubmitStep::Invalid(ValidationError::PasswordLength));
    assert!(!form.is_busy());
    assert_eq!(
        form.error_text(&Translations::default()).as_deref(),
        Some("Password must be 8-16 characters")
    );
}

#[test]
fn second_submit_while_busy_is_ignored() {
    let mut form = filled(AuthMode::Login);
    assert!(matches!(form.begin_submit(), SubmitStep::Send(_)));
    assert!(form.is_busy());
    assert_eq!(form.begin_submit(), SubmitStep::Busy);
}

#[test]
fn successful_submit_returns_record() {
    let mut form = filled(AuthMode::Login);
    let _ = form.begin_submit();
    let user = User {
        user_name: "u".to_owned(),
        ..User::default()
    };
    assert_eq!(form.finish_submit(Ok(user.clone())), Some(user));
    assert!(!form.is_busy());
    assert!(form.error().is_none());
}

#[test]
fn rejection_uses_server_message_or_mode_fallback() {
    let t = Translations::default();
    let mut form = filled(AuthMode::Register);
    form.verification_code = "1234".to_owned();
    let _ = form.begin_submit();
    form.finish_submit(Err(AuthError::rejected(Some("email taken".to_owned()))));
    assert_eq!(form.error_text(&t).as_deref(), Some("email taken"));

    let _ = form.begin_submit();
    form.finish_submit(Err(AuthError::rejected(None)));
    assert_eq!(form.error_text(&t).as_deref(), Some("Registration failed"));

    form.toggle_mode();
    assert_eq!(form.error_text(&t).as_deref(), Some("Login failed"));
}

#[test]
fn transport_failure_shows_network_message() {
    let mut form = filled(AuthMode::Login);
    let _ = form.begin_submit();
    form.finish_submit(Err(AuthError::Transport("offline".to_owned())));
    assert_eq!(
        form.error_text(&Translations::default()).as_deref(),
        Some("Network error, please try again later")
    );
}

#[test]
fn toggling_mode_keeps_inputs() {
    let mut form = filled(AuthMode::Login);
    form.verification_code = "9999".to_owned();
    form.toggle_mode();
    assert_eq!(form.mode, AuthMode::Register);
    assert_eq!(form.email, "user@example.com");
    assert_eq!(form.verification_code, "9999");
}

// =============================================================
// Verification code
// =============================================================

#[test]
fn code_request_requires_valid_email() {
    let mut form = MailLoginForm::default();
    assert_eq!(form.begin_code_request(), CodeRequestStep::Invalid(ValidationError::EmailRequired));
    form.email = "bad".to_owned();
    assert_eq!(form.begin_code_request(), CodeRequestStep::Invalid(ValidationError::EmailInvalid));
    assert!(!form.is_sending_code());
}

#[test]
fn code_request_in_flight_blocks_second() {
    let mut form = filled(AuthMode::Register);
    assert_eq!(form.begin_code_request(), CodeRequestStep::Send("user@example.com".to_owned()));
    assert!(form.is_sending_code());
    assert_eq!(form.begin_code_request(), CodeRequestStep::Blocked);
}

#[test]
fn countdown_gates_resend_until_zero() {
    let mut form = filled(AuthMode::Register);
    let _ = form.begin_code_request();
    assert!(form.finish_code_request(Ok(())));
    assert_eq!(form.countdown().remaining(), RESEND_COOLDOWN_SECS);
    assert_eq!(form.begin_code_request(), CodeRequestStep::Blocked);

    for _ in 0..RESEND_COOLDOWN_SECS - 1 {
        assert!(form.tick());
        assert_eq!(form.begin_code_request(), CodeRequestStep::Blocked);
    }
    assert!(!form.tick());
    assert!(form.countdown().is_ready());
    assert!(matches!(form.begin_code_request(), CodeRequestStep::Send(_)));
}

#[test]
fn failed_code_request_does_not_start_countdown() {
    let t = Translations::default();
    let mut form = filled(AuthMode::Register);
    let _ = form.begin_code_request();
    assert!(!form.finish_code_request(Err(AuthError::rejected(None))));
    assert!(form.countdown().is_ready());
    assert_eq!(form.code_error_text(&t).as_deref(), Some("Failed to send verification code"));

    let _ = form.begin_code_request();
    form.finish_code_request(Err(AuthError::Transport("timeout".to_owned())));
    assert_eq!(
        form.code_error_text(&t).as_deref(),
        Some("Network error, please try again later")
    );
    assert!(form.can_request_code());
}

#[test]
fn tick_at_zero_stays_zero() {
    let mut countdown = ResendCountdown::default();
    assert!(!countdown.tick());
    assert_eq!(countdown.remaining(), 0);
}

// =============================================================
// Modal
// =============================================================

#[test]
fn modal_open_change() {
    let state = LoginModalState::default();
    assert!(!state.is_open());
    let state = state.on_open_change(true);
    assert!(state.is_open());
    assert_eq!(state.on_open_change(false), LoginModalState::Closed);
}

#[test]
fn show_before_registration_is_harmless() {
    let handle = LoginModalHandle::default();
    assert!(!handle.show());
    assert!(!show_login_modal());
}

#[test]
fn registered_container_opens() {
    let handle = LoginModalHandle::default();
    let opened = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&opened);
    let registration = handle.register(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert!(handle.is_registered());
    assert!(handle.show());
    assert_eq!(opened.load(Ordering::SeqCst), 1);

    drop(registration);
    assert!(!handle.show());
    assert_eq!(opened.load(Ordering::SeqCst), 1);
}

#[test]
fn latest_container_wins() {
    let handle = LoginModalHandle::default();
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let (a, b) = (Arc::clone(&first), Arc::clone(&second));
    let old = handle.register(move || {
        a.fetch_add(1, Ordering::SeqCst);
    });
    let new = handle.register(move || {
        b.fetch_add(1, Ordering::SeqCst);
    });
    drop(old);
    assert!(handle.show());
    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(second.load(Ordering::SeqCst), 1);
    assert!(new.is_active());
}

#[test]
fn free_function_opens_container_from_context() {
    let owner = leptos::prelude::Owner::new();
    owner.with(|| {
        let handle = LoginModalHandle::default();
        leptos::prelude::provide_context(handle.clone());
        assert!(!show_login_modal());

        let opened = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&opened);
        let _registration = handle.register(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(show_login_modal());
        assert_eq!(opened.load(Ordering::SeqCst), 1);
    });
}
