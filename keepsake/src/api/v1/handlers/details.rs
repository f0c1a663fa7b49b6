//! v1 Detail handlers.

use axum::extract::{Path, State};
use axum::Json;
use axum_extra::extract::Query;
use chrono::Utc;
use nanoid::nanoid;
use validator::Validate;

use crate::api::v1::dto::{
    CreateDetailRequest, DeleteResponse, DetailResponse, ListDetailsQuery, ListDetailsResponse,
    UpdateDetailRequest,
};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode, ResponseMeta};
use crate::api::AppState;
use crate::models::Detail;

/// `GET /api/v1/profiles/{profileId}/details`
#[utoipa::path(
    get,
    path = "/api/v1/profiles/{profileId}/details",
    tag = "details",
    operation_id = "details.list",
    params(
        ("profileId" = String, Path, description = "Profile ID"),
        ListDetailsQuery,
    ),
    responses(
        (status = 200, description = "Details for the profile, oldest first", body = ListDetailsResponse),
        (status = 404, description = "Profile not found", body = ApiError),
    )
)]
pub async fn list_details(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
    Query(query): Query<ListDetailsQuery>,
) -> ApiResponse<ListDetailsResponse> {
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

    let details = match state
        .db
        .list_details(&profile_id, query.category.map(Into::into))
        .await
    {
        Ok(details) => details,
        Err(e) => return e.into(),
    };

    let total = details.len() as u64;
    let response = ListDetailsResponse {
        details: details.into_iter().map(Into::into).collect(),
    };
    ApiResponse::success_with_meta(response, ResponseMeta { total: Some(total) })
}

/// `POST /api/v1/profiles/{profileId}/details`
#[utoipa::path(
    post,
    path = "/api/v1/profiles/{profileId}/details",
    tag = "details",
    operation_id = "details.create",
    params(("profileId" = String, Path, description = "Profile ID")),
    request_body = CreateDetailRequest,
    responses(
        (status = 201, description = "Detail created", body = DetailResponse),
        (status = 400, description = "Validation failure", body = ApiError),
        (status = 404, description = "Profile not found", body = ApiError),
    )
)]
pub async fn create_detail(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
    Json(req): Json<CreateDetailRequest>,
) -> ApiResponse<DetailResponse> {
    if let Err(e) = req.validate() {
        return ApiResponse::error(ErrorCode::InvalidRequest, e.to_string());
    }
    if req.label.trim().is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "label must not be blank");
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

    let mut detail = Detail::new(
        nanoid!(),
        profile_id,
        req.category.into(),
        req.label.trim().to_string(),
        req.value,
    );
    detail.metadata = req.metadata.unwrap_or_default();

    match state.db.create_detail(&detail).await {
        Ok(()) => ApiResponse::created(detail.into()),
        Err(e) => e.into(),
    }
}

/// `PATCH /api/v1/details/{detailId}`
#[utoipa::path(
    patch,
    path = "/api/v1/details/{detailId}",
    tag = "details",
    operation_id = "details.update",
    params(("detailId" = String, Path, description = "Detail ID")),
    request_body = UpdateDetailRequest,
    responses(
        (status = 200, description = "Updated detail", body = DetailResponse),
        (status = 400, description = "Validation failure", body = ApiError),
        (status = 404, description = "Detail not found", body = ApiError),
    )
)]
pub async fn update_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateDetailRequest>,
) -> ApiResponse<DetailResponse> {
    if let Err(e) = req.validate() {
        return ApiResponse::error(ErrorCode::InvalidRequest, e.to_string());
    }
    if let Some(ref label) = req.label {
        if label.trim().is_empty() {
            return ApiResponse::error(ErrorCode::InvalidRequest, "label must not be blank");
        }
    }

    let mut detail = match state.db.get_detail_by_id(&id).await {
        Ok(Some(detail)) => detail,
        Ok(None) => {
            return ApiResponse::error(ErrorCode::NotFound, format!("Detail {id} not found"))
        }
        Err(e) => return e.into(),
    };

    if let Some(category) = req.category {
        detail.category = category.into();
    }
    if let Some(label) = req.label {
        detail.label = label.trim().to_string();
    }
    if let Some(value) = req.value {
        detail.value = value;
    }
    if let Some(metadata) = req.metadata {
        detail.metadata = metadata;
    }
    detail.updated_at = Utc::now();

    match state.db.update_detail(&detail).await {
        Ok(()) => ApiResponse::success(detail.into()),
        Err(e) => e.into(),
    }
}

/// `DELETE /api/v1/details/{detailId}`
#[utoipa::path(
    delete,
    path = "/api/v1/details/{detailId}",
    tag = "details",
    operation_id = "details.delete",
    params(("detailId" = String, Path, description = "Detail ID")),
    responses(
        (status = 200, description = "Detail deleted", body = DeleteResponse),
        (status = 404, description = "Detail not found", body = ApiError),
    )
)]
pub async fn delete_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<DeleteResponse> {
    match state.db.delete_detail(&id).await {
        Ok(true) => ApiResponse::success(DeleteResponse { id, deleted: true }),
        Ok(false) => ApiResponse::error(ErrorCode::NotFound, format!("Detail {id} not found")),
        Err(e) => e.into(),
    }
}
