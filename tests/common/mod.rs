#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use schooldesk::router::init_router;
use schooldesk::state::AppState;
use schooldesk::store::TenantStore;
use schooldesk_auth::create_access_token;
use schooldesk_config::{CorsConfig, DeclarationConfig, JwtConfig};
use schooldesk_models::{
    DeclarationType, Directory, SchoolId, SchoolInfo, SchoolSettings, Student, StudentId,
    TenantRecord, UserId, UserProfile,
};

pub const AURORA: SchoolId = SchoolId::from_u128(1);
pub const HORIZONTE: SchoolId = SchoolId::from_u128(2);

pub const ADMIN: UserId = UserId::from_u128(1001);
pub const SECRETARY: UserId = UserId::from_u128(1002);
pub const TEACHER: UserId = UserId::from_u128(1003);
pub const PARENT: UserId = UserId::from_u128(1004);
pub const STALE_ROLE: UserId = UserId::from_u128(1005);
pub const NO_ROLE: UserId = UserId::from_u128(1006);
pub const HORIZONTE_ADMIN: UserId = UserId::from_u128(2001);
pub const UNKNOWN_USER: UserId = UserId::from_u128(9999);

pub const ANA: StudentId = StudentId::from_u128(11);
pub const BRUNO: StudentId = StudentId::from_u128(12);
pub const HORIZONTE_STUDENT: StudentId = StudentId::from_u128(21);

pub const ENROLLMENT_TEMPLATE: &str = "Aluno {{student.name}}, matriculado em {{currentYear}}.";

fn profile(id: UserId, email: &str, role: Option<&str>, student_id: Option<StudentId>) -> UserProfile {
    UserProfile {
        id,
        email: email.to_string(),
        name: email.split('@').next().unwrap_or_default().to_string(),
        role: role.map(str::to_string),
        student_id,
    }
}

fn student(id: StudentId, school_id: SchoolId, name: &str, parent_name: &str) -> Student {
    Student {
        id,
        school_id,
        name: name.to_string(),
        parent_name: parent_name.to_string(),
        cpf: "123.456.789-00".to_string(),
        class_name: "5º Ano A".to_string(),
    }
}

pub fn directory() -> Directory {
    let mut aurora = TenantRecord::new(
        AURORA,
        SchoolSettings::new(SchoolInfo {
            name: "Escola Aurora".to_string(),
            cnpj: "12.345.678/0001-90".to_string(),
            ..Default::default()
        }),
    );
    aurora
        .settings
        .declaration_templates
        .insert(DeclarationType::Enrollment, ENROLLMENT_TEMPLATE.to_string());
    aurora
        .settings
        .declaration_templates
        .remove(&DeclarationType::Clearance);
    aurora.students = vec![
        student(BRUNO, AURORA, "Bruno Lima", "Carla Lima"),
        student(ANA, AURORA, "Ana Clara Souza", "Marcos Souza"),
    ];
    aurora.users = vec![
        profile(ADMIN, "admin@aurora.com.br", Some("Admin"), None),
        profile(SECRETARY, "secretaria@aurora.com.br", Some("Secretário(a)"), None),
        profile(TEACHER, "professora@aurora.com.br", Some("Professor(a)"), None),
        profile(PARENT, "marcos@familia.com.br", Some("Responsável"), Some(ANA)),
        profile(STALE_ROLE, "antigo@aurora.com.br", Some("Tesoureiro(a)"), None),
        profile(NO_ROLE, "novo@aurora.com.br", None, None),
    ];

    let mut horizonte = TenantRecord::new(
        HORIZONTE,
        SchoolSettings::new(SchoolInfo {
            name: "Colégio Horizonte".to_string(),
            ..Default::default()
        }),
    );
    horizonte.students = vec![student(HORIZONTE_STUDENT, HORIZONTE, "Davi Rocha", "Elisa Rocha")];
    horizonte.users = vec![profile(HORIZONTE_ADMIN, "admin@horizonte.com.br", Some("Admin"), None)];

    Directory {
        schools: vec![aurora, horizonte],
    }
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".to_string(),
        audience: None,
        access_token_expiry: 3600,
    }
}

pub fn test_state() -> AppState {
    AppState {
        store: TenantStore::from_directory(directory()),
        jwt_config: jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        declaration_config: DeclarationConfig::default(),
    }
}

pub fn setup_test_app() -> (Router, AppState) {
    let state = test_state();
    (init_router(state.clone()), state)
}

pub fn token_for(user_id: UserId) -> String {
    create_access_token(user_id.into_inner(), "user@test.com", &jwt_config()).unwrap()
}

/// Sends one request and returns the status and the JSON body (`Null` when
/// the body is empty).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get_as(app: &Router, uri: &str, user_id: UserId) -> (StatusCode, Value) {
    send(app, Method::GET, uri, Some(&token_for(user_id)), None).await
}
