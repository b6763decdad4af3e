// ── Session operations ──
//
// Each operation catches every failure at this boundary and returns a
// typed outcome; nothing network-shaped escapes. None of these retry:
// credentials are submitted exactly once per user action.

use secrecy::SecretString;
use studyhall_api::PlatformClient;
use studyhall_api::types::RegisterRequest;
use tracing::{debug, warn};

use crate::model::User;

/// Fixed demonstration credentials submitted by the signup shortcut.
pub const DEMO_USERNAME: &str = "student";
pub const DEMO_PASSWORD: &str = "student123";
const DEMO_EMAIL: &str = "student@school.com";
const DEMO_FULL_NAME: &str = "Demo Student";

/// Result of probing the session endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCheck {
    Authenticated(User),
    /// Any failure -- network or non-2xx -- counts as unauthenticated.
    Unauthenticated,
}

impl AuthCheck {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success(User),
    /// The server said no; carries its message or a generic fallback.
    Rejected(String),
    NetworkError,
}

/// Result of the demo signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    Created,
    Rejected(String),
    NetworkError,
}

/// Probe the session endpoint. Never fails past this boundary: any
/// error means the user is treated as unauthenticated.
pub async fn check_auth(client: &PlatformClient) -> AuthCheck {
    match client.me().await {
        Ok(user) => AuthCheck::Authenticated(user.into()),
        Err(e) => {
            debug!(error = %e, "auth check failed, treating as unauthenticated");
            AuthCheck::Unauthenticated
        }
    }
}

/// Submit credentials once.
pub async fn login(client: &PlatformClient, username: &str, password: &SecretString) -> LoginOutcome {
    match client.login(username, password).await {
        Ok(resp) if resp.success => match resp.user {
            Some(user) => LoginOutcome::Success(user.into()),
            // A success flag without a user record is a server bug;
            // treat it as a rejection rather than inventing a session.
            None => LoginOutcome::Rejected("Login failed".into()),
        },
        Ok(resp) => LoginOutcome::Rejected(resp.error.unwrap_or_else(|| "Login failed".into())),
        Err(e) if e.is_network() => {
            warn!(error = %e, "login request failed");
            LoginOutcome::NetworkError
        }
        Err(e) => {
            warn!(error = %e, "login rejected");
            LoginOutcome::Rejected("Login failed".into())
        }
    }
}

/// Best-effort server notification; the session is cleared regardless,
/// so logout is never blocked by network failure.
pub async fn logout(client: &PlatformClient) {
    if let Err(e) = client.logout().await {
        warn!(error = %e, "logout notification failed (ignored)");
    }
}

/// Register the fixed demonstration account. No session is established
/// here -- the user logs in with the demo credentials afterwards.
pub async fn signup(client: &PlatformClient) -> SignupOutcome {
    let request = RegisterRequest {
        username: DEMO_USERNAME.into(),
        password: DEMO_PASSWORD.into(),
        email: DEMO_EMAIL.into(),
        full_name: DEMO_FULL_NAME.into(),
    };

    match client.register(&request).await {
        Ok(resp) if resp.success => SignupOutcome::Created,
        Ok(resp) => SignupOutcome::Rejected(resp.error.unwrap_or_else(|| "Signup failed".into())),
        Err(e) if e.is_network() => {
            warn!(error = %e, "signup request failed");
            SignupOutcome::NetworkError
        }
        Err(e) => {
            warn!(error = %e, "signup rejected");
            SignupOutcome::Rejected("Signup failed".into())
        }
    }
}
