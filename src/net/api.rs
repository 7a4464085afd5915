//! REST calls made by the login modal.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`AuthError::Transport`] since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Each call reads the status and raw body, then hands them to a pure
//! `interpret_*` function. Those functions own every decision about what
//! counts as success, so the rules are unit tested without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{MailLoginRequest, ServerMessage, User};
#[cfg(feature = "hydrate")]
use super::types::VerificationCodeRequest;
use crate::error::AuthError;

pub const MAIL_LOGIN_ENDPOINT: &str = "/login/mail";
pub const VERIFICATION_CODE_ENDPOINT: &str = "/login/send-verification-code";
pub const GOOGLE_LOGIN_ENDPOINT: &str = "/login/google";

/// `message` value the verification-code endpoint returns on success.
const CODE_SENT: &str = "success";

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> AuthError {
    AuthError::Transport("not available on server".to_owned())
}

/// Result of posting a Google credential.
#[derive(Clone, Debug, PartialEq)]
pub enum GoogleLoginOutcome {
    /// The server redirected; follow it with a full navigation.
    Redirect(String),
    /// The server answered with a session record.
    Session(User),
}

// =============================================================================
// RESPONSE INTERPRETATION
// =============================================================================

/// Map a `/login/mail` response to a session record or an error.
///
/// Only HTTP 200 is success. Any other status is a rejection carrying the
/// body's `message`, if the body has one.
///
/// # Errors
///
/// [`AuthError::Rejected`] for non-200 statuses, [`AuthError::Transport`]
/// when a 200 body is not a session record.
pub fn interpret_login_response(status: u16, body: &str) -> Result<User, AuthError> {
    if status == 200 {
        return serde_json::from_str(body).map_err(|e| AuthError::Transport(e.to_string()));
    }
    let message = serde_json::from_str::<ServerMessage>(body)
        .ok()
        .and_then(|m| m.message);
    Err(AuthError::rejected(message))
}

/// Map a `/login/send-verification-code` body to success or an error.
///
/// # Errors
///
/// [`AuthError::Rejected`] unless `message` is exactly `"success"`,
/// [`AuthError::Transport`] when the body is not JSON.
pub fn interpret_code_response(body: &str) -> Result<(), AuthError> {
    let reply: ServerMessage = serde_json::from_str(body).map_err(|e| AuthError::Transport(e.to_string()))?;
    match reply.message {
        Some(m) if m == CODE_SENT => Ok(()),
        other => Err(AuthError::rejected(other)),
    }
}

/// Map a `/login/google` response.
///
/// # Errors
///
/// [`AuthError::Rejected`] when the server neither redirected nor returned a
/// session record.
pub fn interpret_google_response(redirected_to: Option<&str>, body: &str) -> Result<GoogleLoginOutcome, AuthError> {
    if let Some(url) = redirected_to.filter(|u| !u.is_empty()) {
        return Ok(GoogleLoginOutcome::Redirect(url.to_owned()));
    }
    match serde_json::from_str::<Option<User>>(body) {
        Ok(Some(user)) => Ok(GoogleLoginOutcome::Session(user)),
        Ok(None) => Err(AuthError::rejected(None)),
        Err(_) => {
            let message = serde_json::from_str::<ServerMessage>(body)
                .ok()
                .and_then(|m| m.message);
            Err(AuthError::rejected(message))
        }
    }
}

// =============================================================================
// CALLS
// =============================================================================

/// Sign in or register with email and password via `POST /login/mail`.
///
/// # Errors
///
/// See [`interpret_login_response`]; network failures map to
/// [`AuthError::Transport`].
pub async fn login_with_mail(request: &MailLoginRequest) -> Result<User, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(MAIL_LOGIN_ENDPOINT)
            .json(request)
            .map_err(|e| AuthError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| AuthError::Transport(e.to_string()))?;
        interpret_login_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// Ask the server to email a registration code via
/// `POST /login/send-verification-code`.
///
/// # Errors
///
/// See [`interpret_code_response`]; network failures map to
/// [`AuthError::Transport`].
pub async fn send_verification_code(email: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = VerificationCodeRequest { email: email.to_owned() };
        let resp = gloo_net::http::Request::post(VERIFICATION_CODE_ENDPOINT)
            .json(&payload)
            .map_err(|e| AuthError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        let body = resp.text().await.map_err(|e| AuthError::Transport(e.to_string()))?;
        interpret_code_response(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(unavailable())
    }
}

/// Exchange a Google identity-services credential via `POST /login/google`.
/// `credential` is the JSON text of the credential response, posted as is.
///
/// # Errors
///
/// See [`interpret_google_response`]; network failures map to
/// [`AuthError::Transport`].
pub async fn login_with_google(credential: String) -> Result<GoogleLoginOutcome, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(GOOGLE_LOGIN_ENDPOINT)
            .body(credential)
            .map_err(|e| AuthError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        let redirected = resp.redirected().then(|| resp.url());
        let body = resp.text().await.map_err(|e| AuthError::Transport(e.to_string()))?;
        interpret_google_response(redirected.as_deref(), &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credential;
        Err(unavailable())
    }
}
