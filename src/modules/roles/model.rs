use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use schooldesk_core::permissions::{Permission, PermissionModule};
use schooldesk_models::Role;

/// A functional module with the permissions it contains.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PermissionGroup {
    pub module: PermissionModule,
    pub label: String,
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RolesResponse {
    pub roles: Vec<Role>,
}

/// Replaces the permission list of one role.
///
/// Tokens are taken as raw strings so that a token outside the catalog is
/// reported back instead of failing body deserialization.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRolePermissionsDto {
    #[validate(length(max = 100, message = "Too many permissions"))]
    pub permissions: Vec<String>,
}
