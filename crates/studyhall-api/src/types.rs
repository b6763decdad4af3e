//! Wire types for the platform API.
//!
//! These mirror the JSON the server actually sends; `studyhall-core`
//! converts them into canonical domain types. Optional fields stay
//! optional here -- defaulting and fallback text is a core concern.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A user record as returned by `/auth/me`, `/auth/login`, and
/// `/auth/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub grade_level: Option<String>,
    #[serde(default)]
    pub school: Option<String>,
}

/// Response body of `GET /auth/me`.
#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    pub user: UserPayload,
}

/// Flag body of `POST /auth/login` and `POST /auth/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<UserPayload>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Request body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
}

/// A subject as returned by `GET /subjects` and inside a detail payload.
#[derive(Debug, Clone, Deserialize)]
pub struct SubjectPayload {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    /// Aggregate count the list endpoint joins in; absent on detail.
    #[serde(default)]
    pub resource_count: Option<i64>,
}

/// Response body of `GET /subjects`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubjectsResponse {
    pub subjects: Vec<SubjectPayload>,
}

/// A learning resource inside a subject detail payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourcePayload {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// File size in bytes.
    #[serde(default)]
    pub file_size: Option<u64>,
    /// Playback length in minutes (videos only).
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub year: Option<i64>,
}

/// Response body of `GET /subjects/{code}`.
///
/// `resources` is keyed by the server's category spelling; core maps the
/// keys onto its canonical category enum.
#[derive(Debug, Clone, Deserialize)]
pub struct SubjectDetailResponse {
    pub subject: SubjectPayload,
    #[serde(default)]
    pub resources: HashMap<String, Vec<ResourcePayload>>,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Request body of `POST /tests/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateTestRequest {
    pub subject_id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_number: Option<u8>,
    pub difficulty: String,
    pub total_marks: u32,
    pub question_types: Vec<String>,
}

/// Flag body of `POST /tests/generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateTestResponse {
    pub success: bool,
    #[serde(default)]
    pub test_id: Option<i64>,
    #[serde(default)]
    pub total_questions: Option<u32>,
    #[serde(default)]
    pub total_marks: Option<u32>,
    #[serde(default)]
    pub error: Option<String>,
}
