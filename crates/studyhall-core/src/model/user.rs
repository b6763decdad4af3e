// ── User domain type ──

use serde::{Deserialize, Serialize};

/// The authenticated user, as held by the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// Name to greet the user with: full name when present, otherwise
    /// the username.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}
