//! Shared v1 enums mirroring the domain enums, with OpenAPI schemas.

use serde::{Deserialize, Serialize};

use crate::models;

/// Detail category on the v1 wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum V1DetailCategory {
    ClothingSize,
    GiftIdea,
    MedicalCondition,
    Hobby,
    Activity,
}

impl From<V1DetailCategory> for models::DetailCategory {
    fn from(category: V1DetailCategory) -> Self {
        match category {
            V1DetailCategory::ClothingSize => Self::ClothingSize,
            V1DetailCategory::GiftIdea => Self::GiftIdea,
            V1DetailCategory::MedicalCondition => Self::MedicalCondition,
            V1DetailCategory::Hobby => Self::Hobby,
            V1DetailCategory::Activity => Self::Activity,
        }
    }
}

impl From<models::DetailCategory> for V1DetailCategory {
    fn from(category: models::DetailCategory) -> Self {
        match category {
            models::DetailCategory::ClothingSize => Self::ClothingSize,
            models::DetailCategory::GiftIdea => Self::GiftIdea,
            models::DetailCategory::MedicalCondition => Self::MedicalCondition,
            models::DetailCategory::Hobby => Self::Hobby,
            models::DetailCategory::Activity => Self::Activity,
        }
    }
}

/// Relationship kind on the v1 wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum V1RelationshipKind {
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

impl From<V1RelationshipKind> for models::RelationshipKind {
    fn from(kind: V1RelationshipKind) -> Self {
        match kind {
            V1RelationshipKind::Parent => Self::Parent,
            V1RelationshipKind::Child => Self::Child,
            V1RelationshipKind::Sibling => Self::Sibling,
            V1RelationshipKind::Spouse => Self::Spouse,
            V1RelationshipKind::Grandparent => Self::Grandparent,
            V1RelationshipKind::Grandchild => Self::Grandchild,
            V1RelationshipKind::AuntUncle => Self::AuntUncle,
            V1RelationshipKind::NieceNephew => Self::NieceNephew,
            V1RelationshipKind::Cousin => Self::Cousin,
            V1RelationshipKind::Colleague => Self::Colleague,
            V1RelationshipKind::Doctor => Self::Doctor,
            V1RelationshipKind::Caregiver => Self::Caregiver,
            V1RelationshipKind::Friend => Self::Friend,
            V1RelationshipKind::Neighbor => Self::Neighbor,
            V1RelationshipKind::Other => Self::Other,
        }
    }
}

impl From<models::RelationshipKind> for V1RelationshipKind {
    fn from(kind: models::RelationshipKind) -> Self {
        match kind {
            models::RelationshipKind::Parent => Self::Parent,
            models::RelationshipKind::Child => Self::Child,
            models::RelationshipKind::Sibling => Self::Sibling,
            models::RelationshipKind::Spouse => Self::Spouse,
            models::RelationshipKind::Grandparent => Self::Grandparent,
            models::RelationshipKind::Grandchild => Self::Grandchild,
            models::RelationshipKind::AuntUncle => Self::AuntUncle,
            models::RelationshipKind::NieceNephew => Self::NieceNephew,
            models::RelationshipKind::Cousin => Self::Cousin,
            models::RelationshipKind::Colleague => Self::Colleague,
            models::RelationshipKind::Doctor => Self::Doctor,
            models::RelationshipKind::Caregiver => Self::Caregiver,
            models::RelationshipKind::Friend => Self::Friend,
            models::RelationshipKind::Neighbor => Self::Neighbor,
            models::RelationshipKind::Other => Self::Other,
        }
    }
}

/// Relationship grouping on the v1 wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum V1RelationshipCategory {
    Family,
    Professional,
    Social,
    Other,
}

impl From<models::RelationshipCategory> for V1RelationshipCategory {
    fn from(category: models::RelationshipCategory) -> Self {
        match category {
            models::RelationshipCategory::Family => Self::Family,
            models::RelationshipCategory::Professional => Self::Professional,
            models::RelationshipCategory::Social => Self::Social,
            models::RelationshipCategory::Other => Self::Other,
        }
    }
}
