use libsql::{Builder, Connection};
use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::error::Result;

use super::schema;

/// Handle to the underlying libsql database.
///
/// Supports three URL shapes, matching what `DATABASE_URL` may carry:
/// `libsql://`/`https://` (remote, optionally with a local replica path),
/// `:memory:`, and `file:<path>` (or a bare path).
pub struct Database {
    pub(crate) db: Arc<libsql::Database>,
    is_remote: bool,
}

impl Database {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let is_remote = config.url.starts_with("libsql://") || config.url.starts_with("https://");

        let db = if is_remote {
            if let Some(ref local_path) = config.local_path {
                Builder::new_remote_replica(
                    local_path,
                    config.url.clone(),
                    config.auth_token.clone().unwrap_or_default(),
                )
                .build()
                .await?
            } else {
                Builder::new_remote(
                    config.url.clone(),
                    config.auth_token.clone().unwrap_or_default(),
                )
                .build()
                .await?
            }
        } else if config.url == ":memory:" {
            Builder::new_local(":memory:").build().await?
        } else {
            let path = config.url.strip_prefix("file:").unwrap_or(&config.url);
            Builder::new_local(path).build().await?
        };

        let database = Self {
            db: Arc::new(db),
            is_remote,
        };
        database.configure().await?;
        database.init_schema().await?;

        Ok(database)
    }

    pub fn connect(&self) -> Result<Connection> {
        Ok(self.db.connect()?)
    }

    /// Apply connection-level pragmas. Failures are logged, not fatal:
    /// remote backends reject some pragmas.
    async fn configure(&self) -> Result<()> {
        let conn = self.connect()?;

        let busy_timeout_ms: u64 = std::env::var("DATABASE_BUSY_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);

        for pragma in [
            format!("PRAGMA busy_timeout = {busy_timeout_ms}"),
            "PRAGMA journal_mode = WAL".to_string(),
            "PRAGMA foreign_keys = ON".to_string(),
        ] {
            if let Err(error) = conn.execute_batch(&pragma).await {
                tracing::warn!(%pragma, %error, "Failed to apply SQLite pragma");
            }
        }

        Ok(())
    }

    async fn init_schema(&self) -> Result<()> {
        let conn = self.connect()?;
        schema::init_schema(&conn).await?;
        Ok(())
    }

    /// Sync a remote replica. No-op for local databases.
    pub async fn sync(&self) -> Result<()> {
        if !self.is_remote {
            return Ok(());
        }
        let frames = self.db.sync().await?;
        tracing::info!(?frames, "Database synced");
        Ok(())
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            is_remote: self.is_remote,
        }
    }
}
