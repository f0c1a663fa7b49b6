//! Profile request/response DTOs for the v1 API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models;

/// Request body for `POST /api/v1/profiles`.
#[derive(Debug, Clone, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    /// Display name. Required, must not be blank.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Free-form relationship label (e.g. "Mom").
    pub relationship: Option<String>,
    /// Reference to an already-uploaded photo.
    pub photo_url: Option<String>,
    /// Birthday as an ISO date (`YYYY-MM-DD`).
    #[schema(value_type = Option<String>)]
    pub birthday: Option<NaiveDate>,
    pub notes: Option<String>,
    /// Free-form metadata object.
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<models::Metadata>,
}

/// Request body for `PATCH /api/v1/profiles/{profileId}`. Absent fields are
/// left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub relationship: Option<String>,
    pub photo_url: Option<String>,
    #[schema(value_type = Option<String>)]
    pub birthday: Option<NaiveDate>,
    pub notes: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<models::Metadata>,
}

/// A profile on the v1 wire.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub birthday: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[schema(value_type = Object)]
    pub metadata: models::Metadata,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String)]
    pub updated_at: DateTime<Utc>,
}

impl From<models::Profile> for ProfileResponse {
    fn from(profile: models::Profile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            relationship: profile.relationship,
            photo_url: profile.photo_url,
            birthday: profile.birthday,
            notes: profile.notes,
            metadata: profile.metadata,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

/// Response body for `GET /api/v1/profiles`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListProfilesResponse {
    pub profiles: Vec<ProfileResponse>,
}

/// Response body for `DELETE /api/v1/profiles/{profileId}` (and the other
/// delete endpoints).
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub id: String,
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_rejects_empty_name() {
        let req = CreateProfileRequest {
            name: String::new(),
            relationship: None,
            photo_url: None,
            birthday: None,
            notes: None,
            metadata: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn create_request_deserializes_camel_case() {
        let json = r#"{"name":"Grandma June","photoUrl":"june.jpg","birthday":"1941-06-02"}"#;
        let req: CreateProfileRequest = serde_json::from_str(json).expect("deserialize");
        assert_eq!(req.name, "Grandma June");
        assert_eq!(req.photo_url.as_deref(), Some("june.jpg"));
        assert_eq!(req.birthday, NaiveDate::from_ymd_opt(1941, 6, 2));
    }

    #[test]
    fn profile_response_serializes_camel_case() {
        let profile = models::Profile::new("prf_1".to_string(), "June".to_string());
        let resp: ProfileResponse = profile.into();
        let json = serde_json::to_value(&resp).expect("serialize");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        // Absent optionals are omitted entirely.
        assert!(json.get("photoUrl").is_none());
    }

    #[test]
    fn update_request_all_fields_optional() {
        let req: UpdateProfileRequest = serde_json::from_str("{}").expect("deserialize");
        assert!(req.name.is_none());
        assert!(req.validate().is_ok());
    }
}
