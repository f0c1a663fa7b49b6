//! CRUD and validation flows for profiles, details, and connections over the
//! full router.

mod common;

use pretty_assertions::assert_eq;
use serde_json::json;
use tower::ServiceExt;

use common::{
    body_json, connect_profiles, create_profile, delete, get, patch_json, post_json, test_app,
};

// ── Profiles ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn profile_crud_roundtrip() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/profiles",
            json!({
                "name": "Grandma June",
                "relationship": "Grandmother",
                "birthday": "1941-06-02",
                "metadata": { "favoriteColor": "lilac" }
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let created = body_json(response).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(created["data"]["name"], "Grandma June");
    assert_eq!(created["data"]["birthday"], "1941-06-02");

    let response = app
        .clone()
        .oneshot(get(&format!("/api/v1/profiles/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let fetched = body_json(response).await;
    assert_eq!(fetched["data"]["relationship"], "Grandmother");
    assert_eq!(fetched["data"]["metadata"]["favoriteColor"], "lilac");

    let response = app
        .clone()
        .oneshot(patch_json(
            &format!("/api/v1/profiles/{id}"),
            json!({ "notes": "Allergic to penicillin" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated = body_json(response).await;
    assert_eq!(updated["data"]["notes"], "Allergic to penicillin");
    assert_eq!(updated["data"]["name"], "Grandma June");

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/v1/profiles/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let deleted = body_json(response).await;
    assert_eq!(deleted["data"]["deleted"], true);

    let response = app
        .clone()
        .oneshot(get(&format!("/api/v1/profiles/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn profile_list_is_sorted_and_counted() {
    let app = test_app().await;

    create_profile(&app, "Zoe").await;
    create_profile(&app, "Alice").await;
    create_profile(&app, "mara").await;

    let response = app.clone().oneshot(get("/api/v1/profiles")).await.unwrap();
    let json = body_json(response).await;

    let names: Vec<&str> = json["data"]["profiles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alice", "mara", "Zoe"]);
    assert_eq!(json["meta"]["total"], 3);
}

#[tokio::test]
async fn blank_profile_name_is_rejected() {
    let app = test_app().await;

    for body in [json!({ "name": "" }), json!({ "name": "   " })] {
        let response = app
            .clone()
            .oneshot(post_json("/api/v1/profiles", body))
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "invalid_request");
    }
}

// ── Details ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn detail_crud_and_category_filter() {
    let app = test_app().await;
    let profile_id = create_profile(&app, "June").await;

    for (category, label) in [
        ("gift_idea", "Wool socks"),
        ("hobby", "Crosswords"),
        ("gift_idea", "Tea sampler"),
    ] {
        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/api/v1/profiles/{profile_id}/details"),
                json!({ "category": category, "label": label, "value": "noted" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), 201);
    }

    let response = app
        .clone()
        .oneshot(get(&format!("/api/v1/profiles/{profile_id}/details")))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["meta"]["total"], 3);

    let response = app
        .clone()
        .oneshot(get(&format!(
            "/api/v1/profiles/{profile_id}/details?category=gift_idea"
        )))
        .await
        .unwrap();
    let json = body_json(response).await;
    let labels: Vec<&str> = json["data"]["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Wool socks", "Tea sampler"]);

    let detail_id = json["data"]["details"][0]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(patch_json(
            &format!("/api/v1/details/{detail_id}"),
            json!({ "value": "Size 9, hates scratchy wool" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated = body_json(response).await;
    assert_eq!(updated["data"]["value"], "Size 9, hates scratchy wool");

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/v1/details/{detail_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/v1/details/{detail_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn details_for_missing_profile_are_404() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(get("/api/v1/profiles/prf_missing/details"))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/profiles/prf_missing/details",
            json!({ "category": "hobby", "label": "Chess", "value": "Sundays" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn unknown_detail_category_is_rejected() {
    let app = test_app().await;
    let profile_id = create_profile(&app, "June").await;

    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/v1/profiles/{profile_id}/details"),
            json!({ "category": "sock_size", "label": "x", "value": "y" }),
        ))
        .await
        .unwrap();
    // Unknown enum variants fail axum's JSON extraction with 422.
    assert_eq!(response.status(), 422);
}

// ── Connections ───────────────────────────────────────────────────────────

#[tokio::test]
async fn connection_create_list_delete() {
    let app = test_app().await;
    let june = create_profile(&app, "June").await;
    let ray = create_profile(&app, "Ray").await;

    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/v1/profiles/{june}/connections"),
            json!({ "toProfileId": ray, "kind": "child" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let created = body_json(response).await;
    assert_eq!(created["data"]["kind"], "child");
    assert_eq!(created["data"]["category"], "family");
    let connection_id = created["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(get(&format!("/api/v1/profiles/{june}/connections")))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["meta"]["total"], 1);
    assert_eq!(json["data"]["connections"][0]["profile"]["name"], "Ray");

    // Directed: Ray has no outgoing edges.
    let response = app
        .clone()
        .oneshot(get(&format!("/api/v1/profiles/{ray}/connections")))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["meta"]["total"], 0);

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/v1/connections/{connection_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/v1/connections/{connection_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn self_connection_is_rejected() {
    let app = test_app().await;
    let june = create_profile(&app, "June").await;

    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/v1/profiles/{june}/connections"),
            json!({ "toProfileId": june, "kind": "friend" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "invalid_request");
}

#[tokio::test]
async fn connection_to_unknown_target_is_rejected() {
    let app = test_app().await;
    let june = create_profile(&app, "June").await;

    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/v1/profiles/{june}/connections"),
            json!({ "toProfileId": "prf_missing", "kind": "friend" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn deleting_a_profile_cascades_to_its_edges() {
    let app = test_app().await;
    let june = create_profile(&app, "June").await;
    let ray = create_profile(&app, "Ray").await;
    connect_profiles(&app, &june, &ray, "child").await;

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/v1/profiles/{ray}")))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = app
        .clone()
        .oneshot(get(&format!("/api/v1/profiles/{june}/connections")))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["meta"]["total"], 0);
}
