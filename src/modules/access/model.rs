use serde::Serialize;
use utoipa::ToSchema;

use schooldesk_core::permissions::{Permission, PermissionSet};
use schooldesk_models::{Principal, RoleName};

/// The caller's identity and the permissions it currently holds.
#[derive(Debug, Serialize, ToSchema)]
pub struct MeResponse {
    pub principal: Principal,
    /// Resolved role, `null` when the stored label names no known role
    pub role: Option<RoleName>,
    #[schema(value_type = Vec<Permission>)]
    pub permissions: PermissionSet,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PermissionCheckResponse {
    pub permission: String,
    pub granted: bool,
}
