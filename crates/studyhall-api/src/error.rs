use thiserror::Error;

/// Top-level error type for the `studyhall-api` crate.
///
/// Covers every failure mode: authentication, transport, server-side
/// rejection, and payload decoding. `studyhall-core` maps these into
/// user-facing notices.
#[derive(Debug, Error)]
pub enum Error {
    /// Not authenticated, or the session has expired.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The server answered with a non-success status.
    #[error("API error (HTTP {status}): {message}")]
    Api { message: String, status: u16 },

    /// JSON deserialization failed, with a body preview for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` for failures of the network itself rather than the
    /// server's answer -- the cases callers surface as "Network error".
    pub fn is_network(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }

    /// Returns `true` if this error means the session is missing or stale.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }
}
