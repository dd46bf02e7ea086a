//! Permission evaluation.
//!
//! The effective permission set of a principal is a pure function of its role
//! and the school's current role table. It is recomputed on every request from
//! the snapshot in hand, so an administrator's edit applies to users who are
//! already signed in.

use schooldesk_core::permissions::{Permission, PermissionSet};
use schooldesk_models::{RoleName, RoleTable};
use tracing::debug;

/// Resolves the permissions granted to `role` by `table`.
///
/// No role, or a role without an entry in the table, yields the empty set:
/// callers fail closed.
pub fn compute_effective_permissions(role: Option<RoleName>, table: &RoleTable) -> PermissionSet {
    let Some(role) = role else {
        return PermissionSet::empty();
    };

    match table.get(role) {
        Some(permissions) => permissions.clone(),
        None => {
            debug!(role = %role, "Role has no entry in the role table");
            PermissionSet::empty()
        }
    }
}

/// Like [`compute_effective_permissions`], for a role label as stored on a
/// profile. Labels that name no known role yield the empty set.
pub fn effective_permissions_for_label(label: Option<&str>, table: &RoleTable) -> PermissionSet {
    let role = label.and_then(|label| match label.parse::<RoleName>() {
        Ok(role) => Some(role),
        Err(err) => {
            debug!(error = %err, "Stale role reference");
            None
        }
    });

    compute_effective_permissions(role, table)
}

pub fn has_permission(effective: &PermissionSet, permission: Permission) -> bool {
    effective.contains(permission)
}

/// Membership test on a raw token. Unknown or misspelled tokens are absent.
pub fn has_permission_token(effective: &PermissionSet, token: &str) -> bool {
    effective.contains_token(token)
}
