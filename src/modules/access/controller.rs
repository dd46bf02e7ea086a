use axum::{Json, extract::Path};
use tracing::instrument;

use schooldesk_core::AppError;

use crate::middleware::auth::AuthUser;

use super::model::{MeResponse, PermissionCheckResponse};
use super::service;

#[utoipa::path(
    get,
    path = "/api/access/me",
    responses(
        (status = 200, description = "Current principal and effective permissions", body = MeResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Access",
    security(("bearer_auth" = []))
)]
#[instrument(skip(auth_user), fields(user_id = %auth_user.principal.id))]
pub async fn get_me(auth_user: AuthUser) -> Result<Json<MeResponse>, AppError> {
    let role = auth_user.principal.role_name();
    Ok(Json(MeResponse {
        principal: auth_user.principal,
        role,
        permissions: auth_user.permissions,
    }))
}

/// Answers whether the caller holds `permission`. Tokens outside the catalog
/// are answered with `granted: false`, never an error.
#[utoipa::path(
    get,
    path = "/api/access/check/{permission}",
    params(
        ("permission" = String, Path, description = "Permission token, e.g. view_students")
    ),
    responses(
        (status = 200, description = "Whether the permission is granted", body = PermissionCheckResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Access",
    security(("bearer_auth" = []))
)]
#[instrument(skip(auth_user), fields(user_id = %auth_user.principal.id))]
pub async fn check_permission(
    auth_user: AuthUser,
    Path(permission): Path<String>,
) -> Result<Json<PermissionCheckResponse>, AppError> {
    let granted = service::has_permission_token(&auth_user.permissions, &permission);
    Ok(Json(PermissionCheckResponse {
        permission,
        granted,
    }))
}
