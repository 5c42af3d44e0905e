use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use service::entry::repo::SeaOrmEntryRepository;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{routes, state::ServerState};

/// Any origin, method and header; the API carries no credentials.
pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect to Postgres, make sure the `calories` table exists, and wrap the
/// pool in the handler state.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::test_connection(&db).await?;
    migration::Migrator::up(&db, None).await?;
    let repo = SeaOrmEntryRepository::new(db);
    Ok(ServerState::new(Arc::new(repo)))
}

pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: build the app from an already loaded config and serve until
/// Ctrl+C.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    info!(%addr, "starting calorie tracker server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
