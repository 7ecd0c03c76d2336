//! Team Access Service - 服务入口
//!
//! 负责策略管理、权限校验，以及 blog/funnel 资源的访问控制

use std::net::SocketAddr;
use std::sync::Arc;

use teamgate_config::AppConfig;
use teamgate_telemetry::{init_tracing, init_tracing_json};
use tower_http::trace::TraceLayer;
use tracing::info;

use team_access::api::{self, AppState};
use team_access::infrastructure::persistence::{PostgresPolicyRepository, create_pool};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load("config")?;

    if config.is_production() {
        init_tracing_json(&config.telemetry.log_level);
    } else {
        init_tracing(&config.telemetry.log_level);
    }

    let pool = create_pool(&config.database).await?;
    sqlx::migrate!().run(&pool).await?;
    info!("Database pool ready");

    let repo = Arc::new(PostgresPolicyRepository::new(pool));
    let state = AppState::new(repo);

    let app = api::router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "Starting team-access service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
