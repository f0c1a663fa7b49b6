//! v1 Connection handlers.
//!
//! Connections are directed edges. A mutual relationship is two edges; the
//! client decides whether to create the reverse edge.

use axum::extract::{Path, State};
use axum::Json;
use nanoid::nanoid;
use validator::Validate;

use crate::api::v1::dto::{
    ConnectionResponse, CreateConnectionRequest, DeleteResponse, ListConnectionsResponse,
};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode, ResponseMeta};
use crate::api::AppState;
use crate::models::Connection;

/// `GET /api/v1/profiles/{profileId}/connections`
#[utoipa::path(
    get,
    path = "/api/v1/profiles/{profileId}/connections",
    tag = "connections",
    operation_id = "connections.list",
    params(("profileId" = String, Path, description = "Profile ID")),
    responses(
        (status = 200, description = "Outgoing connections in insertion order", body = ListConnectionsResponse),
        (status = 404, description = "Profile not found", body = ApiError),
    )
)]
pub async fn list_connections(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> ApiResponse<ListConnectionsResponse> {
    match state.db.get_profile_by_id(&profile_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return ApiResponse::error(
                ErrorCode::NotFound,
                format!("Profile {profile_id} not found"),
            )
        }
        Err(e) => return e.into(),
    }

    let connections = match state.db.connections_for(&profile_id).await {
        Ok(connections) => connections,
        Err(e) => return e.into(),
    };

    let total = connections.len() as u64;
    let response = ListConnectionsResponse {
        connections: connections.into_iter().map(Into::into).collect(),
    };
    ApiResponse::success_with_meta(response, ResponseMeta { total: Some(total) })
}

/// `POST /api/v1/profiles/{profileId}/connections`
#[utoipa::path(
    post,
    path = "/api/v1/profiles/{profileId}/connections",
    tag = "connections",
    operation_id = "connections.create",
    params(("profileId" = String, Path, description = "Profile ID the edge starts from")),
    request_body = CreateConnectionRequest,
    responses(
        (status = 201, description = "Connection created", body = ConnectionResponse),
        (status = 400, description = "Validation failure or unknown target profile", body = ApiError),
        (status = 404, description = "Profile not found", body = ApiError),
    )
)]
pub async fn create_connection(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
    Json(req): Json<CreateConnectionRequest>,
) -> ApiResponse<ConnectionResponse> {
    if let Err(e) = req.validate() {
        return ApiResponse::error(ErrorCode::InvalidRequest, e.to_string());
    }
    if req.to_profile_id == profile_id {
        return ApiResponse::error(
            ErrorCode::InvalidRequest,
            "A profile cannot be connected to itself",
        );
    }

    match state.db.get_profile_by_id(&profile_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return ApiResponse::error(
                ErrorCode::NotFound,
                format!("Profile {profile_id} not found"),
            )
        }
        Err(e) => return e.into(),
    }
    match state.db.get_profile_by_id(&req.to_profile_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return ApiResponse::error(
                ErrorCode::InvalidRequest,
                format!("Target profile {} does not exist", req.to_profile_id),
            )
        }
        Err(e) => return e.into(),
    }

    let connection = Connection::new(nanoid!(), profile_id, req.to_profile_id, req.kind.into());

    match state.db.create_connection(&connection).await {
        Ok(()) => {
            tracing::info!(
                connection_id = %connection.id,
                from = %connection.from_profile_id,
                to = %connection.to_profile_id,
                kind = %connection.kind,
                "Connection created"
            );
            ApiResponse::created(connection.into())
        }
        Err(e) => e.into(),
    }
}

/// `DELETE /api/v1/connections/{connectionId}`
#[utoipa::path(
    delete,
    path = "/api/v1/connections/{connectionId}",
    tag = "connections",
    operation_id = "connections.delete",
    params(("connectionId" = String, Path, description = "Connection ID")),
    responses(
        (status = 200, description = "Connection deleted", body = DeleteResponse),
        (status = 404, description = "Connection not found", body = ApiError),
    )
)]
pub async fn delete_connection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<DeleteResponse> {
    match state.db.delete_connection(&id).await {
        Ok(true) => ApiResponse::success(DeleteResponse { id, deleted: true }),
        Ok(false) => ApiResponse::error(ErrorCode::NotFound, format!("Connection {id} not found")),
        Err(e) => e.into(),
    }
}
