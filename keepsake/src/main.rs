use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use keepsake::api::{create_router, AppState};
use keepsake::config::Config;
use keepsake::db::{Database, LibSqlBackend, StoreBackend};
use keepsake::services::FamilyTreeBuilder;

#[derive(Parser)]
#[command(name = "keepsake")]
#[command(about = "Open-source, self-hostable caregiving companion")]
struct Args {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keepsake=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    if config.server.api_keys.is_empty() {
        tracing::warn!(
            "KEEPSAKE_API_KEYS is not set — the API is locked. Set KEEPSAKE_API_KEYS to enable access."
        );
    }

    tracing::info!("Initializing database...");
    let raw_db = Database::new(&config.database).await?;
    let backend = Arc::new(LibSqlBackend::new(raw_db));
    let db: Arc<dyn StoreBackend> = backend.clone();
    let tree = FamilyTreeBuilder::new(backend);

    let state = AppState::new(config.clone(), db, tree);

    let cancel_token = CancellationToken::new();

    if let Some(interval_secs) = config.database.sync_interval_secs {
        tracing::info!("Starting replica sync loop... (interval={}s)", interval_secs);
        let sync_db = state.db.clone();
        let token = cancel_token.child_token();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        tracing::info!("Replica sync shutting down...");
                        break;
                    }
                    _ = tokio::time::sleep(tokio::time::Duration::from_secs(interval_secs)) => {
                        if let Err(e) = sync_db.sync().await {
                            tracing::error!("Replica sync error: {}", e);
                        }
                    }
                }
            }
        });
    }

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Keepsake starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel_token))
        .await?;

    Ok(())
}

async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, cancelling background tasks...");
    cancel_token.cancel();
}
