//! Connection request/response DTOs for the v1 API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::common::{V1RelationshipCategory, V1RelationshipKind};
use super::profiles::ProfileResponse;
use crate::models;

/// Request body for `POST /api/v1/profiles/{profileId}/connections`.
#[derive(Debug, Clone, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateConnectionRequest {
    /// Profile the edge points to.
    #[validate(length(min = 1, message = "toProfileId must not be empty"))]
    pub to_profile_id: String,
    pub kind: V1RelationshipKind,
}

/// A connection edge on the v1 wire.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionResponse {
    pub id: String,
    pub from_profile_id: String,
    pub to_profile_id: String,
    pub kind: V1RelationshipKind,
    /// Broad grouping derived from `kind`.
    pub category: V1RelationshipCategory,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
}

impl From<models::Connection> for ConnectionResponse {
    fn from(connection: models::Connection) -> Self {
        Self {
            id: connection.id,
            from_profile_id: connection.from_profile_id,
            to_profile_id: connection.to_profile_id,
            kind: connection.kind.into(),
            category: connection.kind.category().into(),
            created_at: connection.created_at,
        }
    }
}

/// One entry of a connection listing: the edge plus the connected profile.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedProfileResponse {
    pub connection_id: String,
    pub kind: V1RelationshipKind,
    pub category: V1RelationshipCategory,
    pub profile: ProfileResponse,
}

impl From<models::ConnectedProfile> for ConnectedProfileResponse {
    fn from(edge: models::ConnectedProfile) -> Self {
        Self {
            connection_id: edge.connection_id,
            kind: edge.kind.into(),
            category: edge.kind.category().into(),
            profile: edge.profile.into(),
        }
    }
}

/// Response body for `GET /api/v1/profiles/{profileId}/connections`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListConnectionsResponse {
    pub connections: Vec<ConnectedProfileResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_deserializes_camel_case() {
        let json = r#"{"toProfileId":"prf_2","kind":"sibling"}"#;
        let req: CreateConnectionRequest = serde_json::from_str(json).expect("deserialize");
        assert_eq!(req.to_profile_id, "prf_2");
        assert_eq!(req.kind, V1RelationshipKind::Sibling);
    }

    #[test]
    fn connection_response_carries_derived_category() {
        let connection = models::Connection::new(
            "con_1".to_string(),
            "prf_1".to_string(),
            "prf_2".to_string(),
            models::RelationshipKind::Doctor,
        );
        let resp: ConnectionResponse = connection.into();
        assert_eq!(resp.category, V1RelationshipCategory::Professional);

        let json = serde_json::to_value(&resp).expect("serialize");
        assert_eq!(json["fromProfileId"], "prf_1");
        assert_eq!(json["kind"], "doctor");
        assert_eq!(json["category"], "professional");
    }

    #[test]
    fn connected_profile_response_nests_the_profile() {
        let edge = models::ConnectedProfile {
            connection_id: "con_1".to_string(),
            kind: models::RelationshipKind::Friend,
            profile: models::Profile::new("prf_2".to_string(), "Ada".to_string()),
        };
        let resp: ConnectedProfileResponse = edge.into();
        let json = serde_json::to_value(&resp).expect("serialize");
        assert_eq!(json["connectionId"], "con_1");
        assert_eq!(json["profile"]["name"], "Ada");
        assert_eq!(json["category"], "social");
    }
}
