//! Detail request/response DTOs for the v1 API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::common::V1DetailCategory;
use crate::models;

/// Request body for `POST /api/v1/profiles/{profileId}/details`.
#[derive(Debug, Clone, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDetailRequest {
    pub category: V1DetailCategory,
    /// Short label shown in lists (e.g. "Sweater size").
    #[validate(length(min = 1, message = "label must not be empty"))]
    pub label: String,
    /// The remembered value (e.g. "Medium, prefers cardigans").
    pub value: String,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<models::Metadata>,
}

/// Request body for `PATCH /api/v1/details/{detailId}`. Absent fields are
/// left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDetailRequest {
    pub category: Option<V1DetailCategory>,
    #[validate(length(min = 1, message = "label must not be empty"))]
    pub label: Option<String>,
    pub value: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<models::Metadata>,
}

/// Query parameters for `GET /api/v1/profiles/{profileId}/details`.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListDetailsQuery {
    /// Restrict the listing to one category.
    pub category: Option<V1DetailCategory>,
}

/// A detail on the v1 wire.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetailResponse {
    pub id: String,
    pub profile_id: String,
    pub category: V1DetailCategory,
    pub label: String,
    pub value: String,
    #[schema(value_type = Object)]
    pub metadata: models::Metadata,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String)]
    pub updated_at: DateTime<Utc>,
}

impl From<models::Detail> for DetailResponse {
    fn from(detail: models::Detail) -> Self {
        Self {
            id: detail.id,
            profile_id: detail.profile_id,
            category: detail.category.into(),
            label: detail.label,
            value: detail.value,
            metadata: detail.metadata,
            created_at: detail.created_at,
            updated_at: detail.updated_at,
        }
    }
}

/// Response body for `GET /api/v1/profiles/{profileId}/details`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListDetailsResponse {
    pub details: Vec<DetailResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_rejects_empty_label() {
        let req = CreateDetailRequest {
            category: V1DetailCategory::GiftIdea,
            label: String::new(),
            value: "anything".to_string(),
            metadata: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn create_request_deserializes_snake_case_category() {
        let json = r#"{"category":"clothing_size","label":"Sweater","value":"M"}"#;
        let req: CreateDetailRequest = serde_json::from_str(json).expect("deserialize");
        assert_eq!(req.category, V1DetailCategory::ClothingSize);
    }

    #[test]
    fn detail_response_serializes_camel_case() {
        let detail = models::Detail::new(
            "dtl_1".to_string(),
            "prf_1".to_string(),
            models::DetailCategory::GiftIdea,
            "Wool socks".to_string(),
            "Size 9".to_string(),
        );
        let resp: DetailResponse = detail.into();
        let json = serde_json::to_value(&resp).expect("serialize");
        assert_eq!(json["profileId"], "prf_1");
        assert_eq!(json["category"], "gift_idea");
    }

    #[test]
    fn list_query_accepts_missing_category() {
        let query: ListDetailsQuery = serde_json::from_str("{}").expect("deserialize");
        assert!(query.category.is_none());
    }
}
