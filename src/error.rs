//! Error taxonomy for the interactive layer.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here propagates to a page-level boundary. Every error ends the
//! current user action and is rendered inline next to the control that
//! triggered it, using [`AuthError::user_message`] to pick the text:
//! - validation errors carry their own translated message,
//! - request rejections surface the server's message verbatim, falling back
//!   to a mode-specific text,
//! - transport failures always show the generic network-error text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::util::i18n::{MessageKey, Translations};

pub const NETWORK_ERROR: MessageKey = MessageKey::new("root.login.networkError", "Network error, please try again later");

/// Client-side form rule violations, checked before any network call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("email is required")]
    EmailRequired,
    #[error("email is not a valid address")]
    EmailInvalid,
    #[error("password is required")]
    PasswordRequired,
    #[error("password length out of range")]
    PasswordLength,
    #[error("verification code is required")]
    VerificationCodeRequired,
}

impl ValidationError {
    pub const fn message(self) -> MessageKey {
        match self {
            Self::EmailRequired => MessageKey::new("root.login.emailRequired", "Please enter your email address"),
            Self::EmailInvalid => MessageKey::new("root.login.emailInvalid", "Please enter a valid email address"),
            Self::PasswordRequired => MessageKey::new("root.login.passwordRequired", "Please enter your password"),
            Self::PasswordLength => {
                MessageKey::new("root.login.passwordLengthInvalid", "Password must be 8-16 characters")
            }
            Self::VerificationCodeRequired => {
                MessageKey::new("root.login.verificationCodeRequired", "Please enter the verification code")
            }
        }
    }
}

/// Failure of a credential or verification-code exchange.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The server answered with a non-success status or payload.
    #[error("request rejected: {}", .message.as_deref().unwrap_or("<no message>"))]
    Rejected { message: Option<String> },

    /// The request never produced a readable response.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl AuthError {
    pub fn rejected(message: Option<String>) -> Self {
        Self::Rejected {
            message: message.filter(|m| !m.trim().is_empty()),
        }
    }

    /// Inline text for this error. `rejected_fallback` is used when the
    /// server rejected the request without a message.
    pub fn user_message(&self, translations: &Translations, rejected_fallback: MessageKey) -> String {
        match self {
            Self::Invalid(v) => v.message().resolve(translations),
            Self::Rejected { message: Some(m) } => m.clone(),
            Self::Rejected { message: None } => rejected_fallback.resolve(translations),
            Self::Transport(_) => NETWORK_ERROR.resolve(translations),
        }
    }
}

/// Failure to read the server-injected page globals.
#[derive(Debug, thiserror::Error)]
pub enum GlobalsError {
    #[error("globals element #{0} not found")]
    Missing(&'static str),
    #[error("malformed globals document: {0}")]
    Malformed(#[from] serde_json::Error),
}
