// Composition root.
//
// Responsibilities
// - Wire the pool, view engine, and config into the shared state.
// - Run the schema synchronization in the configured order.
// - Bind the listener and serve until shutdown.

pub mod http;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context as _;

use crate::config::{Config, SchemaSyncMode};
use crate::db;
use crate::shared::views::ViewEngine;
use crate::shell::state::AppState;

pub async fn run(config: Config) -> anyhow::Result<()> {
    let pool = db::connect(&config.database_url)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;

    match config.schema_sync {
        SchemaSyncMode::BeforeListen => report_sync(db::sync(&pool).await),
        SchemaSyncMode::Background => {
            let pool = pool.clone();
            tokio::spawn(async move {
                report_sync(db::sync(&pool).await);
            });
        }
    }

    let views = ViewEngine::new(&config.views_dir, config.watch_templates).with_context(|| {
        format!(
            "failed to load templates from {}",
            config.views_dir.display()
        )
    })?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState {
        db: pool,
        views: Arc::new(views),
        config: Arc::new(config),
    };
    let app = http::router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// A failed sync is logged and startup continues: the listener still opens
/// and requests run against whatever schema is present.
fn report_sync(result: Result<(), sqlx::Error>) {
    match result {
        Ok(()) => tracing::info!("database schema in sync"),
        Err(err) => tracing::error!(error = %err, "schema synchronization failed"),
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutting down");
}
