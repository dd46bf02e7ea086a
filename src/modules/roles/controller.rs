use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{info, instrument};

use schooldesk_core::AppError;
use schooldesk_core::permissions::{Permission, PermissionSet};
use schooldesk_models::{Role, RoleName};

use crate::middleware::auth::{AuthUser, RequireManageRoles};
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{PermissionGroup, RolesResponse, UpdateRolePermissionsDto};
use super::service;

fn parse_role(label: &str) -> Result<RoleName, AppError> {
    label
        .parse()
        .map_err(|_| AppError::not_found(anyhow!("Role '{}' not found", label)))
}

/// Parses every token, reporting all unknown ones at once.
fn parse_permissions(tokens: &[String]) -> Result<PermissionSet, AppError> {
    let mut unknown = Vec::new();
    let mut granted = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token.parse::<Permission>() {
            Ok(permission) => granted.push(permission),
            Err(_) => unknown.push(token.as_str()),
        }
    }

    if !unknown.is_empty() {
        return Err(AppError::unprocessable(anyhow!(
            "Unknown permissions: {}",
            unknown.join(", ")
        )));
    }

    Ok(granted.into_iter().collect())
}

#[utoipa::path(
    get,
    path = "/api/roles",
    responses(
        (status = 200, description = "Every role with its permissions", body = RolesResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires manage_roles")
    ),
    tag = "Roles",
    security(("bearer_auth" = []))
)]
#[instrument(skip(auth_user), fields(school_id = %auth_user.principal.school_id))]
pub async fn get_roles(
    RequireManageRoles(auth_user): RequireManageRoles,
) -> Result<Json<RolesResponse>, AppError> {
    let roles = service::list_roles(&auth_user.tenant.settings.roles);
    Ok(Json(RolesResponse { roles }))
}

/// The catalog is not school specific; any signed-in user may read it.
#[utoipa::path(
    get,
    path = "/api/roles/permissions",
    responses(
        (status = 200, description = "Permission catalog grouped by module", body = Vec<PermissionGroup>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Roles",
    security(("bearer_auth" = []))
)]
#[instrument(skip(_auth_user))]
pub async fn get_permission_catalog(
    _auth_user: AuthUser,
) -> Result<Json<Vec<PermissionGroup>>, AppError> {
    Ok(Json(service::permission_catalog()))
}

#[utoipa::path(
    put,
    path = "/api/roles/{role}",
    params(
        ("role" = String, Path, description = "Role label, e.g. Secretário(a)")
    ),
    request_body = UpdateRolePermissionsDto,
    responses(
        (status = 200, description = "Role updated", body = Role),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires manage_roles, or the role is Admin"),
        (status = 404, description = "Unknown role"),
        (status = 422, description = "Unknown permission tokens")
    ),
    tag = "Roles",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto), fields(school_id = %auth_user.principal.school_id))]
pub async fn update_role(
    State(state): State<AppState>,
    RequireManageRoles(auth_user): RequireManageRoles,
    Path(label): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateRolePermissionsDto>,
) -> Result<Json<Role>, AppError> {
    let role = parse_role(&label)?;
    let permissions = parse_permissions(&dto.permissions)?;

    let record = state
        .store
        .update(auth_user.principal.school_id, |current| {
            service::update_role_permissions(&current.settings.roles, role, permissions).map(
                |roles| {
                    let mut next = current.clone();
                    next.settings.roles = roles;
                    next
                },
            )
        })
        .await
        .ok_or_else(|| AppError::not_found(anyhow!("School not found")))?
        .map_err(AppError::forbidden)?;

    info!(
        role = %role,
        updated_by = %auth_user.principal.id,
        "Role permissions updated"
    );

    Ok(Json(Role {
        name: role,
        permissions: record.settings.roles.get(role).cloned().unwrap_or_default(),
    }))
}
