#![allow(clippy::unwrap_used)]
// Integration tests for `PlatformClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use studyhall_api::types::{GenerateTestRequest, RegisterRequest};
use studyhall_api::{Error, PlatformClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, PlatformClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&format!("{}/api", server.uri())).unwrap();
    let client = PlatformClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

// ── Authentication tests ────────────────────────────────────────────

#[tokio::test]
async fn test_login_success_answers_user() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_partial_json(json!({"username": "student"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "user": {"id": 1, "username": "student", "full_name": "Demo Student"}
        })))
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "student123".to_string().into();
    let resp = client.login("student", &secret).await.unwrap();

    assert!(resp.success);
    assert_eq!(resp.user.unwrap().username, "student");
}

#[tokio::test]
async fn test_login_rejection_is_not_an_error() {
    let (server, client) = setup().await;

    // The server rejects with a 401 but still sends a flag body --
    // the client must hand that body back rather than erroring.
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "error": "Invalid username or password"
        })))
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "wrong".to_string().into();
    let resp = client.login("student", &secret).await.unwrap();

    assert!(!resp.success);
    assert_eq!(resp.error.as_deref(), Some("Invalid username or password"));
}

#[tokio::test]
async fn test_me_unauthenticated() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "error": "Not authenticated"
        })))
        .mount(&server)
        .await;

    let result = client.me().await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_me_authenticated() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "user": {"id": 7, "username": "aisha", "email": "aisha@school.com"}
        })))
        .mount(&server)
        .await;

    let user = client.me().await.unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.email.as_deref(), Some("aisha@school.com"));
}

#[tokio::test]
async fn test_register() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "user": {"id": 2, "username": "student"}
        })))
        .mount(&server)
        .await;

    let resp = client
        .register(&RegisterRequest {
            username: "student".into(),
            password: "student123".into(),
            email: "student@school.com".into(),
            full_name: "Demo Student".into(),
        })
        .await
        .unwrap();

    assert!(resp.success);
}

#[tokio::test]
async fn test_logout_ignores_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    client.logout().await.unwrap();
}

// ── Subject tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_list_subjects() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/subjects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "subjects": [
                {"id": 1, "code": "maths", "name": "Mathematics",
                 "description": "Comprehensive mathematics curriculum",
                 "icon": "calculator", "color": "#ff6b6b", "resource_count": 42},
                {"id": 4, "code": "physics", "name": "Physics"}
            ]
        })))
        .mount(&server)
        .await;

    let subjects = client.list_subjects().await.unwrap();

    assert_eq!(subjects.len(), 2);
    assert_eq!(subjects[0].code, "maths");
    assert_eq!(subjects[0].resource_count, Some(42));
    assert!(subjects[1].description.is_none());
}

#[tokio::test]
async fn test_subject_detail() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/subjects/chemistry"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "subject": {"id": 3, "code": "chemistry", "name": "Chemistry"},
            "resources": {
                "notes": [
                    {"id": 11, "title": "Periodic table summary",
                     "file_size": 524288}
                ],
                "videos": []
            },
            "topics": ["Acids and bases"]
        })))
        .mount(&server)
        .await;

    let detail = client.subject_detail("chemistry").await.unwrap();

    assert_eq!(detail.subject.code, "chemistry");
    assert_eq!(detail.resources["notes"].len(), 1);
    assert_eq!(detail.resources["notes"][0].file_size, Some(524_288));
    assert!(detail.resources["videos"].is_empty());
    assert_eq!(detail.topics, vec!["Acids and bases"]);
}

#[tokio::test]
async fn test_server_error_maps_to_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/subjects"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = client.list_subjects().await;

    match result {
        Err(Error::Api { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── Test generation ─────────────────────────────────────────────────

#[tokio::test]
async fn test_generate_test() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/tests/generate"))
        .and(body_partial_json(json!({
            "subject_id": 3,
            "difficulty": "medium",
            "question_types": ["mcq", "short_answer"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "test_id": 99,
            "total_questions": 12,
            "total_marks": 50
        })))
        .mount(&server)
        .await;

    let resp = client
        .generate_test(&GenerateTestRequest {
            subject_id: 3,
            title: "Chemistry practice test".into(),
            paper_number: Some(1),
            difficulty: "medium".into(),
            total_marks: 50,
            question_types: vec!["mcq".into(), "short_answer".into()],
        })
        .await
        .unwrap();

    assert!(resp.success);
    assert_eq!(resp.test_id, Some(99));
}

#[tokio::test]
async fn test_generate_test_rejection() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/tests/generate"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "error": "subject_id is required"
        })))
        .mount(&server)
        .await;

    let resp = client
        .generate_test(&GenerateTestRequest {
            subject_id: 0,
            title: "t".into(),
            paper_number: None,
            difficulty: "easy".into(),
            total_marks: 10,
            question_types: vec![],
        })
        .await
        .unwrap();

    assert!(!resp.success);
    assert_eq!(resp.error.as_deref(), Some("subject_id is required"));
}

// ── Downloads ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_download_resource_bytes() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/resources/7/download"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.4 fake".to_vec()))
        .mount(&server)
        .await;

    let bytes = client.download_resource(7).await.unwrap();

    assert_eq!(bytes, b"%PDF-1.4 fake");
}
