//! API 路由

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::domain::blog::BlogService;
use crate::domain::funnel::FunnelService;
use crate::domain::policy::{PolicyRepository, PolicyService};

use super::{blogs, funnels, policies};

#[derive(Clone)]
pub struct AppState {
    pub policies: Arc<PolicyService>,
    pub blogs: Arc<BlogService>,
    pub funnels: Arc<FunnelService>,
}

impl AppState {
    pub fn new(repo: Arc<dyn PolicyRepository>) -> Self {
        let policies = Arc::new(PolicyService::new(repo));
        Self {
            blogs: Arc::new(BlogService::new(policies.clone())),
            funnels: Arc::new(FunnelService::new(policies.clone())),
            policies,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/policies", post(policies::create_policy))
        .route("/api/v1/policies/{id}", delete(policies::delete_policy))
        .route(
            "/api/v1/policies/check-permission",
            post(policies::check_permission),
        )
        .route("/api/v1/funnels", post(funnels::create_funnel))
        .route(
            "/api/v1/funnels/{id}",
            get(funnels::get_funnel).put(funnels::edit_funnel),
        )
        .route(
            "/api/v1/blogs/pages",
            post(blogs::write_blog_page).get(blogs::read_blog_page),
        )
        .route("/api/v1/blogs/settings", post(blogs::write_blog_settings))
        .route("/api/v1/blogs/settings/{id}", get(blogs::read_blog_settings))
        .route("/health", get(health_check))
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
