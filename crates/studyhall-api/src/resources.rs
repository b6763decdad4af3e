// Resource download endpoint

use tracing::debug;

use crate::client::PlatformClient;
use crate::error::Error;

impl PlatformClient {
    /// Fetch a resource's file content: `GET /resources/{id}/download`.
    ///
    /// The response is raw bytes, not JSON.
    pub async fn download_resource(&self, id: i64) -> Result<Vec<u8>, Error> {
        let url = self.api_url(&format!("resources/{id}/download"))?;
        debug!("GET {}", url);

        let resp = self
            .http()
            .get(url)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                message: body[..body.len().min(200)].to_owned(),
                status: status.as_u16(),
            });
        }

        let bytes = resp.bytes().await.map_err(Error::Transport)?;
        Ok(bytes.to_vec())
    }
}
