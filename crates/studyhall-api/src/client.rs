// Platform API HTTP client
//
// Wraps `reqwest::Client` with base-URL joining and response decoding.
// Endpoint modules (auth, subjects, resources, tests) are implemented as
// inherent methods via separate files so this module stays focused on
// transport mechanics.
//
// Two decode shapes exist on the wire:
//  - strict endpoints (`/subjects`, `/auth/me`) answer data on 2xx and an
//    error status otherwise -- `get_json` enforces that;
//  - flag endpoints (`/auth/login`, `/auth/register`, `/tests/generate`)
//    answer `{success, error?}` bodies even on 4xx -- `post_flagged`
//    hands the parsed body to the caller regardless of status.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Raw HTTP client for the Studyhall platform API.
///
/// `base_url` is the API root including the `/api` segment, e.g.
/// `http://localhost:5000/api`. A cookie jar carries the session cookie
/// set by a successful login.
pub struct PlatformClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PlatformClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// If the config doesn't already include a cookie jar, one is created
    /// automatically -- session auth requires cookies.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let config = if transport.cookie_jar.is_some() {
            transport.clone()
        } else {
            transport.clone().with_cookie_jar()
        };
        let http = config.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// Use this when you already have a client with a session cookie in
    /// its jar (or in tests, where the jar doesn't matter).
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a full URL for an API path: `{base}/{path}`.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the body, requiring a 2xx status.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.api_url(path)?;
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        Self::decode_strict(resp).await
    }

    /// Send a POST request with a JSON body and decode the body,
    /// requiring a 2xx status.
    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        let url = self.api_url(path)?;
        debug!("POST {}", url);

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        Self::decode_strict(resp).await
    }

    /// Send a POST request and decode a `{success, ...}` flag body.
    ///
    /// Flag endpoints answer a parseable body even on 4xx (e.g. a login
    /// rejection is `{"success": false, "error": "..."}` with HTTP 401),
    /// so the status code is ignored whenever the body parses.
    pub(crate) async fn post_flagged<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        let url = self.api_url(path)?;
        debug!("POST {}", url);

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        let text = resp.text().await.map_err(Error::Transport)?;

        match serde_json::from_str(&text) {
            Ok(parsed) => Ok(parsed),
            Err(_) if !status.is_success() => Err(Error::Api {
                message: preview(&text).to_owned(),
                status: status.as_u16(),
            }),
            Err(e) => Err(Error::Deserialization {
                message: e.to_string(),
                body: text,
            }),
        }
    }

    /// Decode a response that must be 2xx. 401 maps to `Authentication`.
    async fn decode_strict<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: "session expired or not logged in".into(),
            });
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                message: preview(&body).to_owned(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", preview(&body)),
            body,
        })
    }
}

/// First 200 bytes of a body, for error messages.
fn preview(body: &str) -> &str {
    &body[..body.len().min(200)]
}
