//! Async HTTP client for the Studyhall learning-platform API.
//!
//! Wraps `reqwest::Client` with platform-specific URL construction and
//! response decoding. Session state lives in a shared cookie jar: a
//! successful login sets a session cookie that every subsequent request
//! carries automatically (see [`transport::TransportConfig`]).
//!
//! Endpoint groups are implemented as inherent methods on
//! [`PlatformClient`], one file per group (`auth`, `subjects`,
//! `resources`, `testgen`), keeping `client.rs` focused on transport
//! mechanics.

pub mod auth;
pub mod client;
pub mod error;
pub mod resources;
pub mod subjects;
pub mod testgen;
pub mod transport;
pub mod types;

pub use client::PlatformClient;
pub use error::Error;
pub use transport::TransportConfig;
