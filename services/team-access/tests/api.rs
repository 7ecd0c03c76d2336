//! HTTP API 集成测试
//!
//! 路由层 + 领域层 + 内存仓储的端到端流程

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use team_access::api::{AppState, router};
use team_access::infrastructure::persistence::InMemoryPolicyRepository;

fn setup() -> (Arc<InMemoryPolicyRepository>, Router) {
    let repo = Arc::new(InMemoryPolicyRepository::new());
    let app = router(AppState::new(repo.clone()));
    (repo, app)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn policy_body(resource: &str, action: &str) -> Value {
    json!({
        "data": {
            "account_id": 100,
            "team_member_id": 200,
            "resource": resource,
            "action": action,
        }
    })
}

async fn create_policy(app: &Router, resource: &str, action: &str) -> (StatusCode, Value) {
    send(app, post_json("/api/v1/policies", policy_body(resource, action))).await
}

async fn check_permission(app: &Router, resource: &str, action: &str) -> StatusCode {
    let (status, _) = send(
        app,
        post_json(
            "/api/v1/policies/check-permission",
            policy_body(resource, action),
        ),
    )
    .await;
    status
}

#[tokio::test]
async fn test_subtree_grant_end_to_end() {
    let (_, app) = setup();

    let (status, body) = create_policy(&app, "projects/*", "read").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["resource"], "projects/*");

    assert_eq!(
        check_permission(&app, "projects/123/tasks/456", "read").await,
        StatusCode::OK
    );
    // 没有 write 策略
    assert_eq!(
        check_permission(&app, "projects/123/tasks/456", "write").await,
        StatusCode::FORBIDDEN
    );
}

#[tokio::test]
async fn test_root_grant_end_to_end() {
    let (_, app) = setup();

    create_policy(&app, "*", "read").await;
    assert_eq!(
        check_permission(&app, "anything/at/all", "read").await,
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_broader_policy_treated_as_created() {
    let (repo, app) = setup();

    create_policy(&app, "blogs/*", "read").await;
    // 更窄的策略按成功返回，但不落库
    let (status, body) = create_policy(&app, "blogs/123/*", "read").await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.get("data").is_none());

    let stored = repo.dump().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].resource, "blogs/*");
}

#[tokio::test]
async fn test_invalid_action_rejected() {
    let (_, app) = setup();
    let (status, body) = create_policy(&app, "blogs/*", "delete").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["title"], "Validation Error");
}

#[tokio::test]
async fn test_delete_policy_then_missing_is_404() {
    let (_, app) = setup();

    let (_, body) = create_policy(&app, "blogs/7", "write").await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let delete_req = || {
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/v1/policies/{}", id))
            .body(Body::empty())
            .unwrap()
    };

    let (status, _) = send(&app, delete_req()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, delete_req()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["title"], "Resource Not Found");
}

#[tokio::test]
async fn test_funnel_routes() {
    let (_, app) = setup();

    create_policy(&app, "funnels/*", "write").await;

    let (status, _) = send(
        &app,
        post_json(
            "/api/v1/funnels",
            json!({
                "data": {
                    "account_id": 100,
                    "team_member_id": 200,
                    "name": "Launch Funnel",
                }
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // funnels/* 是 write 策略，读取 funnel 仍被拒绝
    let get_req = Request::builder()
        .uri("/api/v1/funnels/abc?account_id=100&team_member_id=200")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, get_req).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    create_policy(&app, "funnels/*", "read").await;
    let get_req = Request::builder()
        .uri("/api/v1/funnels/abc?account_id=100&team_member_id=200")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, get_req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["funnel_id"], "abc");
}

#[tokio::test]
async fn test_blog_routes() {
    let (_, app) = setup();

    create_policy(&app, "blogs/*", "write").await;

    let (status, _) = send(
        &app,
        post_json(
            "/api/v1/blogs/settings",
            json!({
                "data": {
                    "account_id": 100,
                    "team_member_id": 200,
                    "blog_id": 42,
                    "title": "My Blog",
                    "content": "hello",
                }
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // 读权限未授予
    let read_req = Request::builder()
        .uri("/api/v1/blogs/pages?account_id=100&team_member_id=200&blog_id=42&page_id=7")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, read_req).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    create_policy(&app, "blogs/*", "read").await;
    let read_req = Request::builder()
        .uri("/api/v1/blogs/pages?account_id=100&team_member_id=200&blog_id=42&page_id=7")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, read_req).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health() {
    let (_, app) = setup();
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
