// Test generation endpoint

use crate::client::PlatformClient;
use crate::error::Error;
use crate::types::{GenerateTestRequest, GenerateTestResponse};

impl PlatformClient {
    /// Submit a test-generation request: `POST /tests/generate`.
    ///
    /// Flag-body convention: a server-side rejection comes back as
    /// `{success: false, error}` rather than an `Err`.
    pub async fn generate_test(
        &self,
        request: &GenerateTestRequest,
    ) -> Result<GenerateTestResponse, Error> {
        self.post_flagged("tests/generate", request).await
    }
}
