use std::sync::Arc;

use crate::config::Config;
use crate::db::StoreBackend;
use crate::services::FamilyTreeBuilder;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<dyn StoreBackend>,
    pub tree: FamilyTreeBuilder,
}

impl AppState {
    pub fn new(config: Config, db: Arc<dyn StoreBackend>, tree: FamilyTreeBuilder) -> Self {
        Self {
            config: Arc::new(config),
            db,
            tree,
        }
    }
}
