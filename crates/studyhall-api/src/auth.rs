// Session authentication endpoints
//
// Cookie-based login/logout and session probing. The login endpoint sets
// a session cookie in the client's jar; subsequent requests use that
// cookie automatically.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::client::PlatformClient;
use crate::error::Error;
use crate::types::{AuthResponse, MeResponse, RegisterRequest, UserPayload};

impl PlatformClient {
    /// Probe the current session: `GET /auth/me`.
    ///
    /// Answers the user record when a valid session cookie is present;
    /// a missing or stale session maps to [`Error::Authentication`].
    pub async fn me(&self) -> Result<UserPayload, Error> {
        let resp: MeResponse = self.get_json("auth/me").await?;
        Ok(resp.user)
    }

    /// Authenticate with username/password: `POST /auth/login`.
    ///
    /// On success the session cookie lands in the jar. The returned flag
    /// body distinguishes acceptance from rejection -- a rejection is NOT
    /// an `Err`, the caller inspects `success`/`error`.
    pub async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<AuthResponse, Error> {
        let body = json!({
            "username": username,
            "password": password.expose_secret(),
        });

        self.post_flagged("auth/login", &body).await
    }

    /// End the current session: `POST /auth/logout`.
    pub async fn logout(&self) -> Result<(), Error> {
        let url = self.api_url("auth/logout")?;
        debug!("POST {}", url);

        let _resp = self
            .http()
            .post(url)
            .send()
            .await
            .map_err(Error::Transport)?;

        debug!("logout complete");
        Ok(())
    }

    /// Create an account: `POST /auth/register`.
    ///
    /// Same flag-body convention as [`login`](Self::login).
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, Error> {
        self.post_flagged("auth/register", request).await
    }
}
