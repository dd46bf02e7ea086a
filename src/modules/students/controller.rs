use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, Query},
};
use tracing::instrument;

use schooldesk_core::{AppError, PaginationParams};
use schooldesk_models::{Student, StudentId};

use crate::middleware::auth::RequireViewStudents;

use super::model::PaginatedStudentsResponse;
use super::service;

#[utoipa::path(
    get,
    path = "/api/students",
    params(PaginationParams),
    responses(
        (status = 200, description = "Students of the caller's school", body = PaginatedStudentsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires view_students")
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
#[instrument(skip(auth_user), fields(school_id = %auth_user.principal.school_id))]
pub async fn get_students(
    RequireViewStudents(auth_user): RequireViewStudents,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedStudentsResponse>, AppError> {
    Ok(Json(service::list_students(&auth_user.tenant, &params)))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student", body = Student),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires view_students"),
        (status = 404, description = "Student not found")
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
#[instrument(skip(auth_user), fields(school_id = %auth_user.principal.school_id))]
pub async fn get_student(
    RequireViewStudents(auth_user): RequireViewStudents,
    Path(id): Path<StudentId>,
) -> Result<Json<Student>, AppError> {
    service::get_student(&auth_user.tenant, id)
        .map(Json)
        .ok_or_else(|| AppError::not_found(anyhow!("Student not found")))
}
