//! HTTP client integration tests
//!
//! Each test binds a small axum server to an ephemeral port and points
//! `HttpUserGateway` at it.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use userform_core::{
    validate, ClientConfig, FormInput, HttpUserGateway, SubmissionPayload, SubmitError,
    UserGateway,
};

// ============================================================================
// Test Utilities
// ============================================================================

/// What the server saw: content type and body of each request
type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

/// Serve `router` on 127.0.0.1:0 and return the users endpoint URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/users", addr)
}

fn gateway(endpoint: &str) -> HttpUserGateway {
    let config = ClientConfig::new(endpoint, 0).unwrap();
    HttpUserGateway::new(config.endpoint)
}

fn jane() -> SubmissionPayload {
    validate(&FormInput::new("Jane Doe", "30", "jane@example.com")).unwrap()
}

async fn create_user(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    seen.lock().unwrap().push((content_type, body.clone()));

    let mut record = body;
    record["id"] = json!(1);
    (StatusCode::CREATED, Json(record))
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_posts_json_and_decodes_record() {
    let seen: Seen = Arc::default();
    let router = Router::new()
        .route("/users", post(create_user))
        .with_state(seen.clone());
    let endpoint = serve(router).await;

    let result = gateway(&endpoint).create_user(&jane()).await.unwrap();

    assert_eq!(result.id, json!(1));
    assert_eq!(result.name, json!("Jane Doe"));
    assert_eq!(result.age, json!(30));
    assert_eq!(result.email, json!("jane@example.com"));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0.as_deref(), Some("application/json"));
    assert_eq!(
        seen[0].1,
        json!({"name": "Jane Doe", "age": 30, "email": "jane@example.com"})
    );
}

#[tokio::test]
async fn test_error_status_keeps_message() {
    let router = Router::new().route(
        "/users",
        post(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"message": "email already taken"})),
            )
        }),
    );
    let endpoint = serve(router).await;

    let err = gateway(&endpoint).create_user(&jane()).await.unwrap_err();
    match err {
        SubmitError::Status { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message.as_deref(), Some("email already taken"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_status_without_body() {
    let router = Router::new().route("/users", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let endpoint = serve(router).await;

    let err = gateway(&endpoint).create_user(&jane()).await.unwrap_err();
    assert!(matches!(
        err,
        SubmitError::Status {
            status: 500,
            message: None
        }
    ));
}

#[tokio::test]
async fn test_incomplete_record_is_decode_error() {
    let router = Router::new().route("/users", post(|| async { Json(json!({"id": 1})) }));
    let endpoint = serve(router).await;

    let err = gateway(&endpoint).create_user(&jane()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let router = Router::new().route("/users", post(|| async { "created" }));
    let endpoint = serve(router).await;

    let err = gateway(&endpoint).create_user(&jane()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let endpoint = format!("http://{}/users", addr);
    let err = gateway(&endpoint).create_user(&jane()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn test_error_status_with_full_record_is_still_failure() {
    let router = Router::new().route(
        "/users",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "id": 7,
                    "name": "Jane Doe",
                    "age": 30,
                    "email": "jane@example.com"
                })),
            )
        }),
    );
    let endpoint = serve(router).await;

    let err = gateway(&endpoint).create_user(&jane()).await.unwrap_err();
    assert!(
        matches!(err, SubmitError::Status { status: 400, .. }),
        "got {err:?}"
    );
}
