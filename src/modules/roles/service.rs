//! Role administration: editing a school's role to permission table.

use thiserror::Error;
use tracing::info;

use schooldesk_core::permissions::{Permission, PermissionModule, PermissionSet};
use schooldesk_models::{Role, RoleName, RoleTable};

use super::model::PermissionGroup;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoleEditError {
    #[error("The Admin role always holds every permission and cannot be edited")]
    AdminRoleLocked,
}

/// Returns a copy of `table` where `role` holds exactly `permissions`.
///
/// The Admin role is locked to the full catalog; any edit to it is refused
/// and `table` is left as it was.
pub fn update_role_permissions(
    table: &RoleTable,
    role: RoleName,
    permissions: PermissionSet,
) -> Result<RoleTable, RoleEditError> {
    if role.is_admin() {
        return Err(RoleEditError::AdminRoleLocked);
    }

    info!(
        role = %role,
        granted = permissions.len(),
        "Updating role permissions"
    );

    let mut next = table.clone();
    next.insert(Role {
        name: role,
        permissions,
    });
    Ok(next)
}

/// Whether the Admin entry of `table` holds the full catalog.
pub fn admin_role_intact(table: &RoleTable) -> bool {
    table.get(RoleName::Admin).is_some_and(PermissionSet::is_full)
}

/// Every role name with its current permissions. Roles missing from the table
/// are listed with an empty set.
pub fn list_roles(table: &RoleTable) -> Vec<Role> {
    RoleName::ALL
        .into_iter()
        .map(|name| Role {
            name,
            permissions: table.get(name).cloned().unwrap_or_default(),
        })
        .collect()
}

/// The permission catalog grouped by functional module, in display order.
pub fn permission_catalog() -> Vec<PermissionGroup> {
    PermissionModule::ALL
        .into_iter()
        .map(|module| PermissionGroup {
            module,
            label: module.label().to_string(),
            permissions: module.permissions().collect::<Vec<Permission>>(),
        })
        .collect()
}
