use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ConnectedProfile, Connection, Detail, DetailCategory, Profile};

// ---------------------------------------------------------------------------
// Individual store traits
// ---------------------------------------------------------------------------

/// CRUD and listing operations for profiles.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn create_profile(&self, profile: &Profile) -> Result<()>;
    async fn get_profile_by_id(&self, id: &str) -> Result<Option<Profile>>;
    async fn list_profiles(&self) -> Result<Vec<Profile>>;
    async fn update_profile(&self, profile: &Profile) -> Result<()>;
    async fn delete_profile(&self, id: &str) -> Result<bool>;
}

/// CRUD and per-profile listing for details.
#[async_trait]
pub trait DetailStore: Send + Sync {
    async fn create_detail(&self, detail: &Detail) -> Result<()>;
    async fn get_detail_by_id(&self, id: &str) -> Result<Option<Detail>>;
    async fn list_details(
        &self,
        profile_id: &str,
        category: Option<DetailCategory>,
    ) -> Result<Vec<Detail>>;
    async fn update_detail(&self, detail: &Detail) -> Result<()>;
    async fn delete_detail(&self, id: &str) -> Result<bool>;
}

/// Edge operations for the profile connection graph.
#[async_trait]
pub trait ConnectionStore: Send + Sync {
    async fn create_connection(&self, connection: &Connection) -> Result<()>;
    async fn delete_connection(&self, id: &str) -> Result<bool>;

    /// Returns all outgoing connections for the given profile id, each paired
    /// with the full connected-profile record. Order is store-defined but
    /// stable within a single tree build.
    async fn connections_for(&self, profile_id: &str) -> Result<Vec<ConnectedProfile>>;
}

// ---------------------------------------------------------------------------
// Unified backend supertrait
// ---------------------------------------------------------------------------

/// A complete store backend combining all entity traits plus lifecycle
/// operations.
#[async_trait]
pub trait StoreBackend: ProfileStore + DetailStore + ConnectionStore {
    /// Sync with remote (e.g. Turso replication). No-op for local backends.
    async fn sync(&self) -> Result<()>;
}
