mod common;

use axum::http::{Method, StatusCode};

use common::{
    ADMIN, NO_ROLE, PARENT, SECRETARY, STALE_ROLE, UNKNOWN_USER, get_as, send, setup_test_app,
};

#[tokio::test]
async fn test_me_returns_effective_permissions() {
    let (app, _) = setup_test_app();

    let (status, body) = get_as(&app, "/api/access/me", SECRETARY).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "Secretário(a)");
    assert_eq!(body["principal"]["school_id"], common::AURORA.to_string());
    let permissions: Vec<&str> = body["permissions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap())
        .collect();
    assert!(permissions.contains(&"create_students"));
    assert!(!permissions.contains(&"manage_users"));
}

#[tokio::test]
async fn test_check_permission_for_secretary() {
    let (app, _) = setup_test_app();

    let (status, body) = get_as(&app, "/api/access/check/create_students", SECRETARY).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["granted"], true);

    let (_, body) = get_as(&app, "/api/access/check/manage_users", SECRETARY).await;
    assert_eq!(body["granted"], false);
}

#[tokio::test]
async fn test_check_unknown_token_is_not_granted() {
    let (app, _) = setup_test_app();

    let (status, body) = get_as(&app, "/api/access/check/create_studnets", ADMIN).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["permission"], "create_studnets");
    assert_eq!(body["granted"], false);
}

#[tokio::test]
async fn test_admin_holds_full_catalog() {
    let (app, _) = setup_test_app();

    let (_, body) = get_as(&app, "/api/access/me", ADMIN).await;

    assert_eq!(body["permissions"].as_array().unwrap().len(), 35);
}

#[tokio::test]
async fn test_stale_role_fails_closed() {
    let (app, _) = setup_test_app();

    let (status, body) = get_as(&app, "/api/access/me", STALE_ROLE).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["role"].is_null());
    assert!(body["permissions"].as_array().unwrap().is_empty());

    let (status, body) = get_as(&app, "/api/students", STALE_ROLE).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        "Access denied. Missing required permission: view_students"
    );
}

#[tokio::test]
async fn test_unassigned_role_fails_closed() {
    let (app, _) = setup_test_app();

    let (_, body) = get_as(&app, "/api/access/check/view_dashboard", NO_ROLE).await;

    assert_eq!(body["granted"], false);
}

#[tokio::test]
async fn test_parent_permissions() {
    let (app, _) = setup_test_app();

    let (_, body) = get_as(&app, "/api/access/check/view_declarations", PARENT).await;
    assert_eq!(body["granted"], true);

    let (_, body) = get_as(&app, "/api/access/check/view_students", PARENT).await;
    assert_eq!(body["granted"], false);
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let (app, _) = setup_test_app();

    let (status, body) = send(&app, Method::GET, "/api/access/me", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Missing authorization header");
}

#[tokio::test]
async fn test_invalid_token_is_unauthorized() {
    let (app, _) = setup_test_app();

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/access/me",
        Some("not-a-token"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_without_profile_is_unauthorized() {
    let (app, _) = setup_test_app();

    let (status, _) = get_as(&app, "/api/access/me", UNKNOWN_USER).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_and_openapi_are_public() {
    let (app, _) = setup_test_app();

    let (status, body) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["schools"], 2);

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/declarations/render"].is_object());
}
