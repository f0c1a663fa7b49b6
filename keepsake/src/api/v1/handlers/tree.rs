//! v1 Family-tree handler.
//!
//! Runs the tree builder against the connection graph. The tree is built
//! fresh on every request; the expanded/collapsed state of nodes is client
//! state and never reaches the server.

use axum::extract::{Path, Query, State};

use crate::api::v1::dto::{TreeQuery, TreeResponse};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;

/// `GET /api/v1/profiles/{profileId}/tree`
#[utoipa::path(
    get,
    path = "/api/v1/profiles/{profileId}/tree",
    tag = "tree",
    operation_id = "tree.get",
    params(
        ("profileId" = String, Path, description = "Root profile ID"),
        TreeQuery,
    ),
    responses(
        (status = 200, description = "Family tree rooted at the profile", body = TreeResponse),
        (status = 404, description = "Profile not found", body = ApiError),
    )
)]
pub async fn get_family_tree(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
    Query(query): Query<TreeQuery>,
) -> ApiResponse<TreeResponse> {
    let root = match state.db.get_profile_by_id(&profile_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            return ApiResponse::error(
                ErrorCode::NotFound,
                format!("Profile {profile_id} not found"),
            )
        }
        Err(e) => return e.into(),
    };

    let max_depth = query
        .max_depth
        .unwrap_or(state.config.tree.default_depth)
        .min(state.config.tree.max_depth_limit);

    let tree = match state.tree.build_tree(root, max_depth).await {
        Ok(tree) => tree,
        Err(e) => return e.into(),
    };

    let node_count = tree.node_count() as u64;
    ApiResponse::success(TreeResponse {
        tree: tree.into(),
        node_count,
        max_depth,
    })
}
