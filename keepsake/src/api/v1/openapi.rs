use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Keepsake API",
        version = "1.0.0",
        description = "Self-hostable caregiving companion. REST API for profiles, details, connections, and family trees.",
    ),
    paths(
        handlers::health::health_check,
        handlers::profiles::list_profiles,
        handlers::profiles::create_profile,
        handlers::profiles::get_profile,
        handlers::profiles::update_profile,
        handlers::profiles::delete_profile,
        handlers::details::list_details,
        handlers::details::create_detail,
        handlers::details::update_detail,
        handlers::details::delete_detail,
        handlers::connections::list_connections,
        handlers::connections::create_connection,
        handlers::connections::delete_connection,
        handlers::tree::get_family_tree,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        response::ResponseMeta,
        // Common
        dto::common::V1DetailCategory,
        dto::common::V1RelationshipKind,
        dto::common::V1RelationshipCategory,
        // Profiles
        dto::profiles::CreateProfileRequest,
        dto::profiles::UpdateProfileRequest,
        dto::profiles::ProfileResponse,
        dto::profiles::ListProfilesResponse,
        dto::profiles::DeleteResponse,
        // Details
        dto::details::CreateDetailRequest,
        dto::details::UpdateDetailRequest,
        dto::details::DetailResponse,
        dto::details::ListDetailsResponse,
        // Connections
        dto::connections::CreateConnectionRequest,
        dto::connections::ConnectionResponse,
        dto::connections::ConnectedProfileResponse,
        dto::connections::ListConnectionsResponse,
        // Tree
        dto::tree::FamilyTreeNodeResponse,
        dto::tree::TreeResponse,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::DatabaseStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "profiles", description = "Profile CRUD and listing"),
        (name = "details", description = "Categorized details recorded per profile"),
        (name = "connections", description = "Typed connection edges between profiles"),
        (name = "tree", description = "Family-tree construction over the connection graph"),
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            utoipa::openapi::security::SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
