use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use blog_architect::app::GenerationStatus;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::Notify;
use tower::ServiceExt; // for `oneshot`

mod common;

use common::mocks::MockLlmClient;
use common::test_utils::{SAMPLE_OUTPUT, create_test_app, wait_until_settled};

const FAILURE_MESSAGE: &str = "Failed to generate blog content. Please check your API key and network.";

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn sample_json() -> Value {
    json!({
        "keyword": "Cloud Security Solutions",
        "source_link": "https://market-report.com/sample",
        "image_link": "https://picsum.photos/800/600"
    })
}

#[tokio::test]
async fn test_index_renders_empty_form() {
    let (app, _state) = create_test_app(Arc::new(MockLlmClient::new()));

    let response = send(&app, get("/")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Generation Parameters"));
    assert!(html.contains(r#"name="keyword" value="""#));
    assert!(html.contains(r#"name="image_link" value="https://picsum.photos/800/600""#));
    assert!(html.contains(" disabled>"));
}

#[tokio::test]
async fn test_health() {
    let (app, _state) = create_test_app(Arc::new(MockLlmClient::new()));
    let response = send(&app, get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_api_generate_with_blank_field_is_refused() {
    let client = Arc::new(MockLlmClient::new().with_text(SAMPLE_OUTPUT));
    let (app, _state) = create_test_app(client.clone());

    let mut body = sample_json();
    body["source_link"] = json!("");
    let response = send(&app, post_json("/api/generate", body)).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let snapshot: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(snapshot["status"]["state"], "idle");
    assert_eq!(snapshot["can_submit"], false);
    assert!(client.get_requests().is_empty());
}

#[tokio::test]
async fn test_api_generate_success_flow() {
    let client = Arc::new(MockLlmClient::new().with_text(SAMPLE_OUTPUT));
    let (app, state) = create_test_app(client.clone());

    let response = send(&app, post_json("/api/generate", sample_json())).await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let snapshot: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(snapshot["status"]["state"], "in_progress");
    assert_eq!(snapshot["is_generating"], true);

    let settled = wait_until_settled(&state).await;
    assert_eq!(
        settled.status,
        GenerationStatus::Completed(SAMPLE_OUTPUT.to_string())
    );
    assert_eq!(settled.error, None);
    assert_eq!(client.get_requests().len(), 1);

    let response = send(&app, get("/api/state")).await;
    let snapshot: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(snapshot["output"], SAMPLE_OUTPUT);
    assert_eq!(snapshot["view_mode"], "preview");
}

#[tokio::test]
async fn test_second_submit_while_generating_conflicts() {
    let gate = Arc::new(Notify::new());
    let client = Arc::new(
        MockLlmClient::new()
            .with_text(SAMPLE_OUTPUT)
            .with_gate(gate.clone()),
    );
    let (app, state) = create_test_app(client.clone());

    let first = send(&app, post_json("/api/generate", sample_json())).await;
    assert_eq!(first.status(), StatusCode::ACCEPTED);

    let second = send(&app, post_json("/api/generate", sample_json())).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let html = body_string(send(&app, get("/")).await).await;
    assert!(html.contains(r#"id="progress""#));
    assert!(html.contains("Architecting Content..."));

    gate.notify_one();
    let settled = wait_until_settled(&state).await;
    assert_eq!(settled.output, SAMPLE_OUTPUT);
    assert_eq!(client.get_requests().len(), 1);
}

#[tokio::test]
async fn test_failure_shows_generic_banner() {
    let client = Arc::new(MockLlmClient::new().with_error("network down"));
    let (app, state) = create_test_app(client);

    let response = send(
        &app,
        post_form(
            "/generate",
            "keyword=Cloud+Security+Solutions&source_link=https%3A%2F%2Fmarket-report.com%2Fsample&image_link=https%3A%2F%2Fpicsum.photos%2F800%2F600",
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/#result-area");

    let settled = wait_until_settled(&state).await;
    assert_eq!(settled.error.as_deref(), Some(FAILURE_MESSAGE));
    assert_eq!(settled.output, "");

    let html = body_string(send(&app, get("/")).await).await;
    assert!(html.contains(r#"id="error-banner""#));
    assert!(html.contains(FAILURE_MESSAGE));
    assert!(!html.contains("network down"));
    assert!(!html.contains(r#"id="output""#));
}

#[tokio::test]
async fn test_view_toggle_does_not_call_api() {
    let client = Arc::new(MockLlmClient::new().with_text(SAMPLE_OUTPUT));
    let (app, state) = create_test_app(client.clone());

    send(&app, post_json("/api/generate", sample_json())).await;
    wait_until_settled(&state).await;

    let html = body_string(send(&app, get("/")).await).await;
    assert!(html.contains(SAMPLE_OUTPUT));

    let response = send(&app, post_form("/view", "mode=code")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let html = body_string(send(&app, get("/")).await).await;
    assert!(html.contains(r#"id="output-code""#));
    assert!(html.contains("&lt;h2&gt;Market Overview&lt;/h2&gt;"));

    let snapshot = state.session.lock().await.snapshot();
    assert_eq!(snapshot.output, SAMPLE_OUTPUT);
    assert_eq!(client.get_requests().len(), 1);
}

#[tokio::test]
async fn test_invalid_view_mode_is_rejected() {
    let (app, _state) = create_test_app(Arc::new(MockLlmClient::new()));
    let response = send(&app, post_form("/view", "mode=diff")).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_incomplete_generate_redirects_to_top() {
    let client = Arc::new(MockLlmClient::new().with_text(SAMPLE_OUTPUT));
    let (app, _state) = create_test_app(client.clone());

    let response = send(
        &app,
        post_form(
            "/generate",
            "keyword=&source_link=https%3A%2F%2Fmarket-report.com%2Fsample&image_link=https%3A%2F%2Fpicsum.photos%2F800%2F600",
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert!(client.get_requests().is_empty());
}

#[tokio::test]
async fn test_view_toggle_with_output_lands_on_result() {
    let client = Arc::new(MockLlmClient::new().with_text(SAMPLE_OUTPUT));
    let (app, state) = create_test_app(client);

    send(&app, post_json("/api/generate", sample_json())).await;
    wait_until_settled(&state).await;

    let response = send(&app, post_form("/view", "mode=code")).await;
    assert_eq!(response.headers()[header::LOCATION], "/#result-area");
}

#[tokio::test]
async fn test_api_copy_acknowledges_browser_copy() {
    let client = Arc::new(MockLlmClient::new().with_text(SAMPLE_OUTPUT));
    let (app, state) = create_test_app(client);

    send(&app, post_json("/api/generate", sample_json())).await;
    wait_until_settled(&state).await;

    let html = body_string(send(&app, get("/")).await).await;
    assert!(html.contains("Copy HTML"));
    assert!(html.contains(r#"<textarea id="raw-output" hidden>"#));

    let response = send(&app, post_form("/api/copy", "")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["copied"], true);
    let ack_ms = body["ack_ms"].as_u64().unwrap();
    assert!(ack_ms > 0 && ack_ms <= 2000, "ack_ms = {ack_ms}");

    assert_eq!(state.clipboard.last_copied().as_deref(), Some(SAMPLE_OUTPUT));
    let html = body_string(send(&app, get("/")).await).await;
    assert!(html.contains("Copied!"));
}

#[tokio::test]
async fn test_html_copy_route_is_gone() {
    let (app, _state) = create_test_app(Arc::new(MockLlmClient::new()));
    let response = send(&app, post_form("/copy", "")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_copy_without_output() {
    let (app, state) = create_test_app(Arc::new(MockLlmClient::new()));
    let response = send(&app, post_form("/api/copy", "")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body, json!({"copied": false, "ack_ms": 0}));
    assert_eq!(state.clipboard.last_copied(), None);
}

#[tokio::test]
async fn test_field_edits_survive_generation_completion() {
    let gate = Arc::new(Notify::new());
    let client = Arc::new(
        MockLlmClient::new()
            .with_text(SAMPLE_OUTPUT)
            .with_gate(gate.clone()),
    );
    let (app, state) = create_test_app(client.clone());

    send(&app, post_json("/api/generate", sample_json())).await;

    let response = send(
        &app,
        post_form(
            "/api/fields",
            "keyword=Edge+AI+Chips&source_link=https%3A%2F%2Fexample.com%2Fedge&image_link=https%3A%2F%2Fpicsum.photos%2F800%2F600",
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let snapshot: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(snapshot["status"]["state"], "in_progress");
    assert_eq!(snapshot["is_generating"], true);

    gate.notify_one();
    let settled = wait_until_settled(&state).await;
    assert_eq!(settled.output, SAMPLE_OUTPUT);
    assert_eq!(settled.inputs.keyword, "Edge AI Chips");

    // The running call used the inputs it was submitted with.
    let requests = client.get_requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].prompt.contains("Keyword: Cloud Security Solutions"));

    let html = body_string(send(&app, get("/")).await).await;
    assert!(html.contains(r#"value="Edge AI Chips""#));
}

#[tokio::test]
async fn test_invalid_json() {
    let (app, _state) = create_test_app(Arc::new(MockLlmClient::new()));

    let request = Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("invalid json"))
        .unwrap();

    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_wrong_http_method() {
    let (app, _state) = create_test_app(Arc::new(MockLlmClient::new()));
    let response = send(&app, get("/generate")).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_wrong_path() {
    let (app, _state) = create_test_app(Arc::new(MockLlmClient::new()));
    let response = send(&app, get("/wrong-path")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
