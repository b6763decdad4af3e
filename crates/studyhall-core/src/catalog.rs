// ── Subject catalog operations ──

use studyhall_api::PlatformClient;
use tracing::{debug, warn};

use crate::convert::collection_from_wire;
use crate::model::{ResourceCollection, Subject};

/// Result of a subjects-list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectsOutcome {
    Loaded(Vec<Subject>),
    /// Any failure. The state layer substitutes the built-in catalog so
    /// the UI is never empty.
    Unavailable,
}

/// Result of a subject-detail fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    Loaded {
        subject: Subject,
        resources: ResourceCollection,
    },
    Failed,
}

/// Result of a resource download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The file content arrived; the front end decides where it lands.
    Fetched(Vec<u8>),
    Failed,
    NetworkError,
}

/// Fetch the subject list. Failures are not errors here -- the caller
/// substitutes the fallback catalog.
pub async fn load_subjects(client: &PlatformClient) -> SubjectsOutcome {
    match client.list_subjects().await {
        Ok(subjects) => {
            debug!(count = subjects.len(), "subjects loaded");
            SubjectsOutcome::Loaded(subjects.into_iter().map(Subject::from).collect())
        }
        Err(e) => {
            warn!(error = %e, "subjects fetch failed, fallback catalog will be used");
            SubjectsOutcome::Unavailable
        }
    }
}

/// Fetch one subject's detail payload and map it into domain types.
pub async fn load_detail(client: &PlatformClient, code: &str) -> DetailOutcome {
    match client.subject_detail(code).await {
        Ok(detail) => DetailOutcome::Loaded {
            subject: detail.subject.into(),
            resources: collection_from_wire(detail.resources),
        },
        Err(e) => {
            warn!(code, error = %e, "subject detail fetch failed");
            DetailOutcome::Failed
        }
    }
}

/// Fetch a resource's file content.
pub async fn download(client: &PlatformClient, id: i64) -> DownloadOutcome {
    match client.download_resource(id).await {
        Ok(bytes) => DownloadOutcome::Fetched(bytes),
        Err(e) if e.is_network() => {
            warn!(id, error = %e, "download failed");
            DownloadOutcome::NetworkError
        }
        Err(e) => {
            warn!(id, error = %e, "download rejected");
            DownloadOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::model::ResourceKind;

    fn unreachable_client() -> PlatformClient {
        let base = Url::parse("http://127.0.0.1:1/api").expect("static url");
        PlatformClient::with_client(reqwest::Client::new(), base)
    }

    #[tokio::test]
    async fn network_failure_yields_unavailable() {
        let outcome = load_subjects(&unreachable_client()).await;
        assert_eq!(outcome, SubjectsOutcome::Unavailable);
    }

    #[tokio::test]
    async fn detail_maps_categories() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/subjects/physics"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "subject": {"id": 4, "code": "physics", "name": "Physics"},
                "resources": {
                    "notes": [{"id": 1, "title": "Kinematics"}],
                    "video": [{"id": 2, "title": "Waves", "duration": 14}]
                }
            })))
            .mount(&server)
            .await;

        let base = Url::parse(&format!("{}/api", server.uri())).expect("mock uri");
        let client = PlatformClient::with_client(reqwest::Client::new(), base);

        match load_detail(&client, "physics").await {
            DetailOutcome::Loaded { subject, resources } => {
                assert_eq!(subject.code, "physics");
                assert_eq!(resources[&ResourceKind::Notes].len(), 1);
                assert_eq!(resources[&ResourceKind::Videos][0].duration_mins, Some(14));
            }
            DetailOutcome::Failed => panic!("expected loaded detail"),
        }
    }
}
