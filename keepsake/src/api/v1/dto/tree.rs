//! Family-tree response DTOs for the v1 API.

use serde::{Deserialize, Serialize};

use super::common::V1RelationshipKind;
use super::profiles::ProfileResponse;
use crate::models;

/// Query parameters for `GET /api/v1/profiles/{profileId}/tree`.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct TreeQuery {
    /// Maximum number of edges to traverse from the root. Defaults to the
    /// configured tree depth; clamped to the configured ceiling.
    pub max_depth: Option<u32>,
}

/// One node of a built family tree on the v1 wire.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FamilyTreeNodeResponse {
    pub profile: ProfileResponse,
    /// Connection tag linking this node to its parent; absent for the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship_to_parent: Option<V1RelationshipKind>,
    pub depth: u32,
    pub children: Vec<FamilyTreeNodeResponse>,
}

impl From<models::FamilyTreeNode> for FamilyTreeNodeResponse {
    fn from(node: models::FamilyTreeNode) -> Self {
        Self {
            profile: node.profile.into(),
            relationship_to_parent: node.relationship_to_parent.map(Into::into),
            depth: node.depth,
            children: node.children.into_iter().map(Into::into).collect(),
        }
    }
}

/// Response body for `GET /api/v1/profiles/{profileId}/tree`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TreeResponse {
    pub tree: FamilyTreeNodeResponse,
    /// Total number of nodes in the tree, root included.
    pub node_count: u64,
    /// The depth cap that was applied to the build.
    pub max_depth: u32,
}
