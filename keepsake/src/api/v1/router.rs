use axum::{
    middleware,
    routing::{delete, get, patch},
    Router,
};

use crate::api::state::AppState;

use super::handlers;
use super::middleware::v1_auth_middleware;

pub fn v1_router(state: AppState) -> Router<AppState> {
    let profiles = Router::new()
        .route(
            "/",
            get(handlers::profiles::list_profiles).post(handlers::profiles::create_profile),
        )
        .route(
            "/{profileId}",
            get(handlers::profiles::get_profile)
                .patch(handlers::profiles::update_profile)
                .delete(handlers::profiles::delete_profile),
        )
        .route(
            "/{profileId}/details",
            get(handlers::details::list_details).post(handlers::details::create_detail),
        )
        .route(
            "/{profileId}/connections",
            get(handlers::connections::list_connections)
                .post(handlers::connections::create_connection),
        )
        .route("/{profileId}/tree", get(handlers::tree::get_family_tree));

    let details = Router::new().route(
        "/{detailId}",
        patch(handlers::details::update_detail).delete(handlers::details::delete_detail),
    );

    let connections = Router::new().route(
        "/{connectionId}",
        delete(handlers::connections::delete_connection),
    );

    let public_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router());

    let protected_routes = Router::new()
        .nest("/profiles", profiles)
        .nest("/details", details)
        .nest("/connections", connections)
        .route_layer(middleware::from_fn_with_state(state, v1_auth_middleware));

    Router::new().merge(public_routes).merge(protected_routes)
}
