// Subject catalog endpoints

use crate::client::PlatformClient;
use crate::error::Error;
use crate::types::{SubjectDetailResponse, SubjectPayload, SubjectsResponse};

impl PlatformClient {
    /// List all subjects: `GET /subjects`.
    pub async fn list_subjects(&self) -> Result<Vec<SubjectPayload>, Error> {
        let resp: SubjectsResponse = self.get_json("subjects").await?;
        Ok(resp.subjects)
    }

    /// Fetch one subject's detail payload: `GET /subjects/{code}`.
    ///
    /// The payload carries the subject metadata plus its resources
    /// grouped by category.
    pub async fn subject_detail(&self, code: &str) -> Result<SubjectDetailResponse, Error> {
        self.get_json(&format!("subjects/{code}")).await
    }
}
