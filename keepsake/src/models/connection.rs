use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Profile;

/// Broad grouping of relationship kinds, used for display and filtering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipCategory {
    Family,
    Professional,
    Social,
    Other,
}

impl std::fmt::Display for RelationshipCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Family => write!(f, "family"),
            Self::Professional => write!(f, "professional"),
            Self::Social => write!(f, "social"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// The typed tag carried by a connection edge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    Parent,
    Child,
    Sibling,
    Spouse,
    Grandparent,
    Grandchild,
    AuntUncle,
    NieceNephew,
    Cousin,
    Colleague,
    Doctor,
    Caregiver,
    Friend,
    Neighbor,
    Other,
}

impl RelationshipKind {
    pub fn category(&self) -> RelationshipCategory {
        match self {
            Self::Parent
            | Self::Child
            | Self::Sibling
            | Self::Spouse
            | Self::Grandparent
            | Self::Grandchild
            | Self::AuntUncle
            | Self::NieceNephew
            | Self::Cousin => RelationshipCategory::Family,
            Self::Colleague | Self::Doctor | Self::Caregiver => RelationshipCategory::Professional,
            Self::Friend | Self::Neighbor => RelationshipCategory::Social,
            Self::Other => RelationshipCategory::Other,
        }
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parent => write!(f, "parent"),
            Self::Child => write!(f, "child"),
            Self::Sibling => write!(f, "sibling"),
            Self::Spouse => write!(f, "spouse"),
            Self::Grandparent => write!(f, "grandparent"),
            Self::Grandchild => write!(f, "grandchild"),
            Self::AuntUncle => write!(f, "aunt_uncle"),
            Self::NieceNephew => write!(f, "niece_nephew"),
            Self::Cousin => write!(f, "cousin"),
            Self::Colleague => write!(f, "colleague"),
            Self::Doctor => write!(f, "doctor"),
            Self::Caregiver => write!(f, "caregiver"),
            Self::Friend => write!(f, "friend"),
            Self::Neighbor => write!(f, "neighbor"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for RelationshipKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "parent" => Ok(Self::Parent),
            "child" => Ok(Self::Child),
            "sibling" => Ok(Self::Sibling),
            "spouse" => Ok(Self::Spouse),
            "grandparent" => Ok(Self::Grandparent),
            "grandchild" => Ok(Self::Grandchild),
            "aunt_uncle" => Ok(Self::AuntUncle),
            "niece_nephew" => Ok(Self::NieceNephew),
            "cousin" => Ok(Self::Cousin),
            "colleague" => Ok(Self::Colleague),
            "doctor" => Ok(Self::Doctor),
            "caregiver" => Ok(Self::Caregiver),
            "friend" => Ok(Self::Friend),
            "neighbor" => Ok(Self::Neighbor),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown relationship kind: {s}")),
        }
    }
}

/// A directed, typed edge between two profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub from_profile_id: String,
    pub to_profile_id: String,
    pub kind: RelationshipKind,
    pub created_at: DateTime<Utc>,
}

impl Connection {
    pub fn new(
        id: String,
        from_profile_id: String,
        to_profile_id: String,
        kind: RelationshipKind,
    ) -> Self {
        Self {
            id,
            from_profile_id,
            to_profile_id,
            kind,
            created_at: Utc::now(),
        }
    }
}

/// An outgoing edge paired with the full record of the profile it points to.
/// This is what the tree builder consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedProfile {
    pub connection_id: String,
    pub kind: RelationshipKind,
    pub profile: Profile,
}
