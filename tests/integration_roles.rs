mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{ADMIN, HORIZONTE, SECRETARY, TEACHER, get_as, send, setup_test_app, token_for};
use schooldesk_models::RoleName;

const TEACHER_PATH: &str = "/api/roles/Professor(a)";

#[tokio::test]
async fn test_list_roles_requires_manage_roles() {
    let (app, _) = setup_test_app();

    let (status, _) = get_as(&app, "/api/roles", SECRETARY).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = get_as(&app, "/api/roles", ADMIN).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roles"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_permission_catalog_grouped_by_module() {
    let (app, _) = setup_test_app();

    let (status, body) = get_as(&app, "/api/roles/permissions", TEACHER).await;

    assert_eq!(status, StatusCode::OK);
    let groups = body.as_array().unwrap();
    assert_eq!(groups.len(), 12);
    let total: usize = groups
        .iter()
        .map(|g| g["permissions"].as_array().unwrap().len())
        .sum();
    assert_eq!(total, 35);
}

#[tokio::test]
async fn test_role_edit_applies_to_signed_in_users() {
    let (app, _) = setup_test_app();
    let teacher_token = token_for(TEACHER);

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/access/check/view_financials",
        Some(&teacher_token),
        None,
    )
    .await;
    assert_eq!(body["granted"], false);

    let (status, body) = send(
        &app,
        Method::PUT,
        TEACHER_PATH,
        Some(&token_for(ADMIN)),
        Some(json!({ "permissions": ["view_dashboard", "view_financials"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Professor(a)");
    assert_eq!(body["permissions"], json!(["view_dashboard", "view_financials"]));

    // Same token, next request: the new table is used.
    let (_, body) = send(
        &app,
        Method::GET,
        "/api/access/check/view_financials",
        Some(&teacher_token),
        None,
    )
    .await;
    assert_eq!(body["granted"], true);

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/access/check/view_students",
        Some(&teacher_token),
        None,
    )
    .await;
    assert_eq!(body["granted"], false);
}

#[tokio::test]
async fn test_role_edit_stays_within_school() {
    let (app, state) = setup_test_app();

    let (status, _) = send(
        &app,
        Method::PUT,
        TEACHER_PATH,
        Some(&token_for(ADMIN)),
        Some(json!({ "permissions": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let horizonte = state.store.snapshot(HORIZONTE).await.unwrap();
    assert!(!horizonte.settings.roles.get(RoleName::Teacher).unwrap().is_empty());
}

#[tokio::test]
async fn test_admin_role_is_locked() {
    let (app, _) = setup_test_app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/roles/Admin",
        Some(&token_for(ADMIN)),
        Some(json!({ "permissions": ["view_dashboard"] })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        "The Admin role always holds every permission and cannot be edited"
    );

    let (_, body) = get_as(&app, "/api/access/me", ADMIN).await;
    assert_eq!(body["permissions"].as_array().unwrap().len(), 35);
}

#[tokio::test]
async fn test_percent_encoded_role_label() {
    let (app, _) = setup_test_app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/roles/Secret%C3%A1rio(a)",
        Some(&token_for(ADMIN)),
        Some(json!({ "permissions": ["view_students", "create_students"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Secretário(a)");

    let (_, body) = get_as(&app, "/api/access/check/view_dashboard", SECRETARY).await;
    assert_eq!(body["granted"], false);
}

#[tokio::test]
async fn test_unknown_permission_token_is_rejected() {
    let (app, state) = setup_test_app();

    let (status, body) = send(
        &app,
        Method::PUT,
        TEACHER_PATH,
        Some(&token_for(ADMIN)),
        Some(json!({ "permissions": ["view_students", "teleport"] })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Unknown permissions: teleport");

    let aurora = state.store.snapshot(common::AURORA).await.unwrap();
    assert!(aurora.settings.roles.get(RoleName::Teacher).unwrap().len() > 1);
}

#[tokio::test]
async fn test_unknown_role_is_not_found() {
    let (app, _) = setup_test_app();

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/roles/Zelador",
        Some(&token_for(ADMIN)),
        Some(json!({ "permissions": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_requires_manage_roles() {
    let (app, _) = setup_test_app();

    let (status, _) = send(
        &app,
        Method::PUT,
        TEACHER_PATH,
        Some(&token_for(SECRETARY)),
        Some(json!({ "permissions": ["manage_users"] })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}
