//! End-to-end tests for the ograph HTTP API

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use ograph_config::Config;
use ograph_server::{create_router, AppState};

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

fn test_app() -> axum::Router {
    create_router(AppState::new(Config::default()))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, body.to_vec())
}

#[tokio::test]
async fn test_status_endpoint() {
    let (status, content_type, body) = get(test_app(), "/status").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/json"));

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "Server is running");
}

#[tokio::test]
async fn test_generate_quadratic_graph() {
    let (status, content_type, body) =
        get(test_app(), "/generate-graph?complexity=n2&n_max=50").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/png"));
    assert!(body.starts_with(PNG_MAGIC));
}

#[tokio::test]
async fn test_generate_with_default_n_max() {
    let (status, content_type, body) = get(test_app(), "/generate-graph?complexity=nlogn").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/png"));
    assert!(body.starts_with(PNG_MAGIC));
}

#[tokio::test]
async fn test_generate_exponential_form_without_overflow() {
    // "2^h" percent-encoded; sample points past the cutoff are unbounded
    // and must not break rendering
    let (status, content_type, body) =
        get(test_app(), "/generate-graph?complexity=2%5Eh&n_max=100").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/png"));
    assert!(body.starts_with(PNG_MAGIC));
}

#[tokio::test]
async fn test_whitespace_insensitive_resolution() {
    let (status, _, body) =
        get(test_app(), "/generate-graph?complexity=n%20log%20n&n_max=30").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with(PNG_MAGIC));
}

#[tokio::test]
async fn test_unsupported_complexity_returns_400() {
    let (status, _, body) = get(test_app(), "/generate-graph?complexity=bogus").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let detail = json["detail"].as_str().unwrap();
    assert!(detail.contains("bogus"), "detail was: {detail}");
    assert!(detail.contains("Unsupported complexity"));
}

#[tokio::test]
async fn test_missing_complexity_returns_400() {
    let (status, _, body) = get(test_app(), "/generate-graph").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["detail"]
        .as_str()
        .unwrap()
        .contains("complexity query parameter is required"));
}

#[tokio::test]
async fn test_zero_n_max_returns_400() {
    let (status, _, body) = get(test_app(), "/generate-graph?complexity=n&n_max=0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["detail"].as_str().unwrap().contains("n_max"));
}

#[tokio::test]
async fn test_repeated_requests_are_idempotent() {
    let uri = "/generate-graph?complexity=n2&n_max=50";
    let (status_a, _, body_a) = get(test_app(), uri).await;
    let (status_b, _, body_b) = get(test_app(), uri).await;

    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);
    assert_eq!(body_a, body_b);
}

#[tokio::test]
async fn test_artifact_archive_writes_unique_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.artifact.enabled = true;
    config.artifact.dir = dir.path().join("archive").to_str().unwrap().to_string();

    let app = create_router(AppState::new(config));
    let (status, _, _) = get(app, "/generate-graph?complexity=linear&n_max=20").await;
    assert_eq!(status, StatusCode::OK);

    let entries: Vec<_> = std::fs::read_dir(dir.path().join("archive"))
        .unwrap()
        .map(|e| e.unwrap())
        .collect();
    assert_eq!(entries.len(), 1);

    let name = entries[0].file_name().into_string().unwrap();
    assert!(name.starts_with("time_complexity_"));
    assert!(name.ends_with(".png"));

    let bytes = std::fs::read(entries[0].path()).unwrap();
    assert!(bytes.starts_with(PNG_MAGIC));
}
