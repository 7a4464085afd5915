//! Login modal visibility and the mail login/register form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header, the drawer and the data table's page gate all need to open
//! the login modal without owning it. The mounted modal container registers
//! with [`LoginModalHandle`] (provided through context) and any caller
//! reaches it through [`LoginModalHandle::show`] or [`show_login_modal`].
//!
//! DESIGN
//! ======
//! The form is a plain state machine driven by the component. `begin_*`
//! methods decide locally (validation, busy and countdown gates) and hand
//! back the request to send; `finish_*` methods fold the response in. No
//! network request is produced when a local check fails.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AuthError, ValidationError};
use crate::net::types::{MailLoginRequest, User};
use crate::util::i18n::{MessageKey, Translations};
use crate::util::registry::{HandlerSlot, Registration};

/// Seconds the "get code" control stays disabled after a code was sent.
pub const RESEND_COOLDOWN_SECS: u32 = 60;

/// Accepted password length, in characters.
pub const PASSWORD_CHARS: RangeInclusive<usize> = 8..=16;

pub const LOGIN_FAILED: MessageKey = MessageKey::new("root.login.loginFailed", "Login failed");
pub const REGISTER_FAILED: MessageKey = MessageKey::new("root.login.registerFailed", "Registration failed");
pub const SEND_CODE_FAILED: MessageKey =
    MessageKey::new("root.login.sendVerificationFailed", "Failed to send verification code");

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(email))
}

/// Email rules shared by submission and code requests.
///
/// # Errors
///
/// [`ValidationError::EmailRequired`] or [`ValidationError::EmailInvalid`].
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(())
}

/// Check the form fields in order and build the request body.
///
/// # Errors
///
/// The first [`ValidationError`] hit, in field order.
pub fn validate_credentials(
    mode: AuthMode,
    email: &str,
    password: &str,
    verification_code: &str,
) -> Result<MailLoginRequest, ValidationError> {
    validate_email(email)?;
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if !PASSWORD_CHARS.contains(&password.chars().count()) {
        return Err(ValidationError::PasswordLength);
    }
    match mode {
        AuthMode::Login => Ok(MailLoginRequest::Login {
            email: email.to_owned(),
            password: password.to_owned(),
        }),
        AuthMode::Register if verification_code.is_empty() => Err(ValidationError::VerificationCodeRequired),
        AuthMode::Register => Ok(MailLoginRequest::Register {
            email: email.to_owned(),
            password: password.to_owned(),
            verification_code: verification_code.to_owned(),
        }),
    }
}

// =============================================================================
// FORM
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    /// Text shown when the server rejects a submission without a message.
    pub const fn failure_message(self) -> MessageKey {
        match self {
            Self::Login => LOGIN_FAILED,
            Self::Register => REGISTER_FAILED,
        }
    }
}

/// Cooldown between verification-code requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResendCountdown {
    remaining: u32,
}

impl ResendCountdown {
    pub fn start(&mut self) {
        self.remaining = RESEND_COOLDOWN_SECS;
    }

    pub fn remaining(self) -> u32 {
        self.remaining
    }

    pub fn is_ready(self) -> bool {
        self.remaining == 0
    }

    /// Advance one second. Returns whether the countdown is still running.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining > 0
    }
}

/// Outcome of pressing submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStep {
    /// A submission is already in flight.
    Busy,
    Invalid(ValidationError),
    Send(MailLoginRequest),
}

/// Outcome of pressing "get verification code".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodeRequestStep {
    /// Countdown running or a request already in flight.
    Blocked,
    Invalid(ValidationError),
    Send(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MailLoginForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub verification_code: String,
    busy: bool,
    sending_code: bool,
    countdown: ResendCountdown,
    error: Option<AuthError>,
    code_error: Option<AuthError>,
}

impl MailLoginForm {
    /// Switch login/register. Field values are kept.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_sending_code(&self) -> bool {
        self.sending_code
    }

    pub fn countdown(&self) -> ResendCountdown {
        self.countdown
    }

    pub fn can_request_code(&self) -> bool {
        self.countdown.is_ready() && !self.sending_code
    }

    pub fn begin_submit(&mut self) -> SubmitStep {
        self.error = None;
        let request = match validate_credentials(self.mode, &self.email, &self.password, &self.verification_code) {
            Ok(request) => request,
            Err(e) => {
                self.error = Some(e.into());
                return SubmitStep::Invalid(e);
            }
        };
        if self.busy {
            return SubmitStep::Busy;
        }
        self.busy = true;
        SubmitStep::Send(request)
    }

    /// Fold in the server's answer. Returns the session record on success;
    /// the caller persists it and reloads.
    pub fn finish_submit(&mut self, result: Result<User, AuthError>) -> Option<User> {
        self.busy = false;
        match result {
            Ok(user) => Some(user),
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }

    pub fn begin_code_request(&mut self) -> CodeRequestStep {
        if !self.can_request_code() {
            return CodeRequestStep::Blocked;
        }
        self.code_error = None;
        if let Err(e) = validate_email(&self.email) {
            self.code_error = Some(e.into());
            return CodeRequestStep::Invalid(e);
        }
        self.sending_code = true;
        CodeRequestStep::Send(self.email.clone())
    }

    /// Fold in the code request result. Returns whether the countdown started.
    pub fn finish_code_request(&mut self, result: Result<(), AuthError>) -> bool {
        self.sending_code = false;
        match result {
            Ok(()) => {
                self.countdown.start();
                true
            }
            Err(e) => {
                self.code_error = Some(e);
                false
            }
        }
    }

    /// One countdown second elapsed. Returns whether it is still running.
    pub fn tick(&mut self) -> bool {
        self.countdown.tick()
    }

    pub fn error(&self) -> Option<&AuthError> {
        self.error.as_ref()
    }

    pub fn error_text(&self, translations: &Translations) -> Option<String> {
        self.error
            .as_ref()
            .map(|e| e.user_message(translations, self.mode.failure_message()))
    }

    pub fn code_error_text(&self, translations: &Translations) -> Option<String> {
        self.code_error
            .as_ref()
            .map(|e| e.user_message(translations, SEND_CODE_FAILED))
    }
}

// =============================================================================
// MODAL
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginModalState {
    #[default]
    Closed,
    Open,
}

impl LoginModalState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Backdrop, close button, Escape and successful sign-in report `false`.
    #[must_use]
    pub fn on_open_change(self, open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }
}

/// App-scoped route to whichever login modal container is mounted.
#[derive(Clone, Debug, Default)]
pub struct LoginModalHandle {
    slot: HandlerSlot<()>,
}

impl LoginModalHandle {
    /// Make `open` the target of [`LoginModalHandle::show`] while the
    /// returned registration is held. A later registration supersedes it.
    #[must_use = "dropping the registration unregisters the container"]
    pub fn register<F>(&self, open: F) -> Registration<()>
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.slot.install(move |()| open())
    }

    pub fn is_registered(&self) -> bool {
        self.slot.is_installed()
    }

    /// Open the registered modal. Returns `false` (and warns) when no
    /// container is mounted.
    pub fn show(&self) -> bool {
        let opened = self.slot.dispatch(());
        if !opened {
            log::warn!("show_login_modal called before a login modal was mounted");
        }
        opened
    }
}

/// Open the login modal from code running under the app's reactive owner
/// (component bodies, effects) that does not hold a [`LoginModalHandle`].
/// Event handlers run without an owner, so components capture the handle
/// with `expect_context` at setup instead.
pub fn show_login_modal() -> bool {
    match leptos::prelude::use_context::<LoginModalHandle>() {
        Some(handle) => handle.show(),
        None => {
            log::warn!("show_login_modal called outside the app: no LoginModalHandle in context");
            false
        }
    }
}
