use async_trait::async_trait;

use crate::db::connection::Database;
use crate::db::repository::{ConnectionRepository, DetailRepository, ProfileRepository};
use crate::db::traits::{ConnectionStore, DetailStore, ProfileStore, StoreBackend};
use crate::error::Result;
use crate::models::{ConnectedProfile, Connection, Detail, DetailCategory, Profile};

pub struct LibSqlBackend {
    db: Database,
}

impl LibSqlBackend {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileStore for LibSqlBackend {
    async fn create_profile(&self, profile: &Profile) -> Result<()> {
        let conn = self.db.connect()?;
        ProfileRepository::create(&conn, profile).await
    }
    async fn get_profile_by_id(&self, id: &str) -> Result<Option<Profile>> {
        let conn = self.db.connect()?;
        ProfileRepository::get_by_id(&conn, id).await
    }
    async fn list_profiles(&self) -> Result<Vec<Profile>> {
        let conn = self.db.connect()?;
        ProfileRepository::list(&conn).await
    }
    async fn update_profile(&self, profile: &Profile) -> Result<()> {
        let conn = self.db.connect()?;
        ProfileRepository::update(&conn, profile).await
    }
    async fn delete_profile(&self, id: &str) -> Result<bool> {
        let conn = self.db.connect()?;
        ProfileRepository::delete(&conn, id).await
    }
}

#[async_trait]
impl DetailStore for LibSqlBackend {
    async fn create_detail(&self, detail: &Detail) -> Result<()> {
        let conn = self.db.connect()?;
        DetailRepository::create(&conn, detail).await
    }
    async fn get_detail_by_id(&self, id: &str) -> Result<Option<Detail>> {
        let conn = self.db.connect()?;
        DetailRepository::get_by_id(&conn, id).await
    }
    async fn list_details(
        &self,
        profile_id: &str,
        category: Option<DetailCategory>,
    ) -> Result<Vec<Detail>> {
        let conn = self.db.connect()?;
        DetailRepository::list_for_profile(&conn, profile_id, category).await
    }
    async fn update_detail(&self, detail: &Detail) -> Result<()> {
        let conn = self.db.connect()?;
        DetailRepository::update(&conn, detail).await
    }
    async fn delete_detail(&self, id: &str) -> Result<bool> {
        let conn = self.db.connect()?;
        DetailRepository::delete(&conn, id).await
    }
}

#[async_trait]
impl ConnectionStore for LibSqlBackend {
    async fn create_connection(&self, connection: &Connection) -> Result<()> {
        let conn = self.db.connect()?;
        ConnectionRepository::create(&conn, connection).await
    }
    async fn delete_connection(&self, id: &str) -> Result<bool> {
        let conn = self.db.connect()?;
        ConnectionRepository::delete(&conn, id).await
    }
    async fn connections_for(&self, profile_id: &str) -> Result<Vec<ConnectedProfile>> {
        let conn = self.db.connect()?;
        ConnectionRepository::list_for_profile(&conn, profile_id).await
    }
}

#[async_trait]
impl StoreBackend for LibSqlBackend {
    async fn sync(&self) -> Result<()> {
        self.db.sync().await
    }
}
