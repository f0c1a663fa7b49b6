//! v1 Profile handlers.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use nanoid::nanoid;
use validator::Validate;

use crate::api::v1::dto::{
    CreateProfileRequest, DeleteResponse, ListProfilesResponse, ProfileResponse,
    UpdateProfileRequest,
};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode, ResponseMeta};
use crate::api::AppState;
use crate::models::Profile;

/// `GET /api/v1/profiles`
#[utoipa::path(
    get,
    path = "/api/v1/profiles",
    tag = "profiles",
    operation_id = "profiles.list",
    responses(
        (status = 200, description = "All profiles, ordered by name", body = ListProfilesResponse),
    )
)]
pub async fn list_profiles(State(state): State<AppState>) -> ApiResponse<ListProfilesResponse> {
    let profiles = match state.db.list_profiles().await {
        Ok(profiles) => profiles,
        Err(e) => return e.into(),
    };

    let total = profiles.len() as u64;
    let response = ListProfilesResponse {
        profiles: profiles.into_iter().map(Into::into).collect(),
    };
    ApiResponse::success_with_meta(response, ResponseMeta { total: Some(total) })
}

/// `POST /api/v1/profiles`
#[utoipa::path(
    post,
    path = "/api/v1/profiles",
    tag = "profiles",
    operation_id = "profiles.create",
    request_body = CreateProfileRequest,
    responses(
        (status = 201, description = "Profile created", body = ProfileResponse),
        (status = 400, description = "Validation failure", body = ApiError),
    )
)]
pub async fn create_profile(
    State(state): State<AppState>,
    Json(req): Json<CreateProfileRequest>,
) -> ApiResponse<ProfileResponse> {
    if let Err(e) = req.validate() {
        return ApiResponse::error(ErrorCode::InvalidRequest, e.to_string());
    }
    if req.name.trim().is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "name must not be blank");
    }

    let mut profile = Profile::new(nanoid!(), req.name.trim().to_string());
    profile.relationship = req.relationship;
    profile.photo_url = req.photo_url;
    profile.birthday = req.birthday;
    profile.notes = req.notes;
    profile.metadata = req.metadata.unwrap_or_default();

    match state.db.create_profile(&profile).await {
        Ok(()) => {
            tracing::info!(profile_id = %profile.id, "Profile created");
            ApiResponse::created(profile.into())
        }
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/profiles/{profileId}`
#[utoipa::path(
    get,
    path = "/api/v1/profiles/{profileId}",
    tag = "profiles",
    operation_id = "profiles.get",
    params(("profileId" = String, Path, description = "Profile ID")),
    responses(
        (status = 200, description = "The profile", body = ProfileResponse),
        (status = 404, description = "Profile not found", body = ApiError),
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<ProfileResponse> {
    match state.db.get_profile_by_id(&id).await {
        Ok(Some(profile)) => ApiResponse::success(profile.into()),
        Ok(None) => ApiResponse::error(ErrorCode::NotFound, format!("Profile {id} not found")),
        Err(e) => e.into(),
    }
}

/// `PATCH /api/v1/profiles/{profileId}`
#[utoipa::path(
    patch,
    path = "/api/v1/profiles/{profileId}",
    tag = "profiles",
    operation_id = "profiles.update",
    params(("profileId" = String, Path, description = "Profile ID")),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = ProfileResponse),
        (status = 400, description = "Validation failure", body = ApiError),
        (status = 404, description = "Profile not found", body = ApiError),
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResponse<ProfileResponse> {
    if let Err(e) = req.validate() {
        return ApiResponse::error(ErrorCode::InvalidRequest, e.to_string());
    }
    if let Some(ref name) = req.name {
        if name.trim().is_empty() {
            return ApiResponse::error(ErrorCode::InvalidRequest, "name must not be blank");
        }
    }

    let mut profile = match state.db.get_profile_by_id(&id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            return ApiResponse::error(ErrorCode::NotFound, format!("Profile {id} not found"))
        }
        Err(e) => return e.into(),
    };

    if let Some(name) = req.name {
        profile.name = name.trim().to_string();
    }
    if let Some(relationship) = req.relationship {
        profile.relationship = Some(relationship);
    }
    if let Some(photo_url) = req.photo_url {
        profile.photo_url = Some(photo_url);
    }
    if let Some(birthday) = req.birthday {
        profile.birthday = Some(birthday);
    }
    if let Some(notes) = req.notes {
        profile.notes = Some(notes);
    }
    if let Some(metadata) = req.metadata {
        profile.metadata = metadata;
    }
    profile.updated_at = Utc::now();

    match state.db.update_profile(&profile).await {
        Ok(()) => ApiResponse::success(profile.into()),
        Err(e) => e.into(),
    }
}

/// `DELETE /api/v1/profiles/{profileId}`
///
/// Details and connections hanging off the profile are removed with it.
#[utoipa::path(
    delete,
    path = "/api/v1/profiles/{profileId}",
    tag = "profiles",
    operation_id = "profiles.delete",
    params(("profileId" = String, Path, description = "Profile ID")),
    responses(
        (status = 200, description = "Profile deleted", body = DeleteResponse),
        (status = 404, description = "Profile not found", body = ApiError),
    )
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<DeleteResponse> {
    match state.db.delete_profile(&id).await {
        Ok(true) => {
            tracing::info!(profile_id = %id, "Profile deleted");
            ApiResponse::success(DeleteResponse { id, deleted: true })
        }
        Ok(false) => ApiResponse::error(ErrorCode::NotFound, format!("Profile {id} not found")),
        Err(e) => e.into(),
    }
}
