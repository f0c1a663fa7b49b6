use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Metadata;

/// A person record: the root entity everything else hangs off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    /// Free-form relationship label shown on the profile card (e.g. "Mom").
    pub relationship: Option<String>,
    pub photo_url: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub notes: Option<String>,
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(id: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            relationship: None,
            photo_url: None,
            birthday: None,
            notes: None,
            metadata: Metadata::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
