// SPDX-License-Identifier: MIT

//! Project registry API tests.

use axum::http::StatusCode;
use tower::ServiceExt;

mod common;

fn sample_project_body() -> serde_json::Value {
    serde_json::json!({
        "name": "X",
        "type": "Mangrove",
        "location": "L",
        "area": 10.0,
        "status": "Pending",
        "estimatedCarbon": 100.0,
        "metadata": {
            "coordinator": "Dr. Test",
            "fundingSource": "Grant",
            "methodology": "VM0033",
            "monitoringFrequency": "Quarterly"
        },
        "notes": ""
    })
}

#[tokio::test]
async fn test_first_project_in_empty_registry_gets_id_one() {
    let (app, _) = common::create_test_app();
    let token = common::login_token(&app).await;

    let response = app
        .clone()
        .oneshot(common::post_json(
            "/api/projects",
            Some(&token),
            sample_project_body(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["id"], "1");
    assert_eq!(body["name"], "X");

    let response = app
        .oneshot(common::get("/api/projects", Some(&token)))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_create_project_validation() {
    let (app, _) = common::create_test_app();
    let token = common::login_token(&app).await;

    let mut no_name = sample_project_body();
    no_name["name"] = serde_json::json!("");
    let response = app
        .clone()
        .oneshot(common::post_json("/api/projects", Some(&token), no_name))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut zero_area = sample_project_body();
    zero_area["area"] = serde_json::json!(0.0);
    let response = app
        .clone()
        .oneshot(common::post_json("/api/projects", Some(&token), zero_area))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut negative_carbon = sample_project_body();
    negative_carbon["estimatedCarbon"] = serde_json::json!(-5.0);
    let response = app
        .oneshot(common::post_json(
            "/api/projects",
            Some(&token),
            negative_carbon,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_status_update_moves_metric_buckets() {
    let (app, _) = common::create_seeded_app();
    let token = common::login_token(&app).await;

    // Seeded project "2" is Pending
    let before = common::body_json(
        app.clone()
            .oneshot(common::get("/api/dashboard", Some(&token)))
            .await
            .unwrap(),
    )
    .await;

    let response = app
        .clone()
        .oneshot(common::patch_json(
            "/api/projects/2",
            Some(&token),
            serde_json::json!({"status": "Approved"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "Approved");
    // Untouched fields survive the merge
    assert_eq!(body["name"], "Seagrass Conservation Gulf of Mannar");
    assert_eq!(body["dateCreated"], "2024-02-20");

    let after = common::body_json(
        app.oneshot(common::get("/api/dashboard", Some(&token)))
            .await
            .unwrap(),
    )
    .await;

    let approved_before = before["metrics"]["approvedProjects"].as_u64().unwrap();
    let pending_before = before["metrics"]["pendingVerification"].as_u64().unwrap();
    assert_eq!(
        after["metrics"]["approvedProjects"].as_u64().unwrap(),
        approved_before + 1
    );
    assert_eq!(
        after["metrics"]["pendingVerification"].as_u64().unwrap(),
        pending_before - 1
    );
}

#[tokio::test]
async fn test_update_unknown_project_is_404_and_changes_nothing() {
    let (app, state) = common::create_seeded_app();
    let token = common::login_token(&app).await;
    let before = state.store.projects();

    let response = app
        .oneshot(common::patch_json(
            "/api/projects/999",
            Some(&token),
            serde_json::json!({"status": "Approved"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let after = state.store.projects();
    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(after.iter()) {
        assert_eq!(b.id, a.id);
        assert_eq!(b.status, a.status);
    }
}

#[tokio::test]
async fn test_patch_cannot_change_identity() {
    let (app, _) = common::create_seeded_app();
    let token = common::login_token(&app).await;

    let response = app
        .clone()
        .oneshot(common::patch_json(
            "/api/projects/1",
            Some(&token),
            serde_json::json!({"id": "42", "dateCreated": "2030-01-01", "notes": "edited"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["id"], "1");
    assert_eq!(body["dateCreated"], "2024-01-15");
    assert_eq!(body["notes"], "edited");
}

#[tokio::test]
async fn test_project_filters() {
    let (app, _) = common::create_seeded_app();
    let token = common::login_token(&app).await;

    let pending = common::body_json(
        app.clone()
            .oneshot(common::get("/api/projects?status=Pending", Some(&token)))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(pending["total"], 2);

    let mangroves = common::body_json(
        app.clone()
            .oneshot(common::get("/api/projects?type=Mangrove", Some(&token)))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(mangroves["total"], 2);

    let search = common::body_json(
        app.oneshot(common::get("/api/projects?search=chilika", Some(&token)))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(search["total"], 1);
    assert_eq!(search["projects"][0]["id"], "5");
}

#[tokio::test]
async fn test_get_project_by_id() {
    let (app, _) = common::create_seeded_app();
    let token = common::login_token(&app).await;

    let response = app
        .clone()
        .oneshot(common::get("/api/projects/3", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["name"], "Saltmarsh Restoration Bhitarkanika");

    let response = app
        .oneshot(common::get("/api/projects/999", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
