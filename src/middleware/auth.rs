//! Authentication extractor and permission gates.
//!
//! [`AuthUser`] verifies the bearer token, resolves the user's profile in the
//! tenant directory, and computes the effective permission set from the
//! school's current role table. Every request recomputes the set, so role
//! edits and sign-outs take effect immediately.

use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::warn;

use schooldesk_auth::verify_token;
use schooldesk_core::AppError;
use schooldesk_core::permissions::{Permission, PermissionSet};
use schooldesk_models::{Principal, TenantRecord, UserId};

use crate::modules::access::service::{effective_permissions_for_label, has_permission};
use crate::state::AppState;

/// The authenticated principal, its school snapshot, and its permissions.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub principal: Principal,
    pub permissions: PermissionSet,
    /// Snapshot of the principal's school taken when the request arrived
    pub tenant: Arc<TenantRecord>,
}

impl AuthUser {
    pub fn new(principal: Principal, tenant: Arc<TenantRecord>) -> Self {
        let permissions =
            effective_permissions_for_label(principal.role.as_deref(), &tenant.settings.roles);
        Self {
            principal,
            permissions,
            tenant,
        }
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        has_permission(&self.permissions, permission)
    }

    /// Fails with 403 when `permission` is not granted.
    pub fn require(&self, permission: Permission) -> Result<(), AppError> {
        if self.has_permission(permission) {
            return Ok(());
        }

        warn!(
            user_id = %self.principal.id,
            school_id = %self.principal.school_id,
            role = ?self.principal.role,
            permission = %permission,
            "Permission denied"
        );
        Err(AppError::forbidden(anyhow!(
            "Access denied. Missing required permission: {}",
            permission
        )))
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized(anyhow!("Missing authorization header")))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized(anyhow!("Invalid authorization header format")))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = verify_token(bearer_token(parts)?, &state.jwt_config)?;

        let user_id: UserId = claims
            .sub
            .parse()
            .map_err(|_| AppError::unauthorized(anyhow!("Invalid user ID in token")))?;

        let tenant = state
            .store
            .tenant_of_user(user_id)
            .await
            .ok_or_else(|| AppError::unauthorized(anyhow!("No school profile for this user")))?;

        let principal = tenant
            .principal(user_id)
            .ok_or_else(|| AppError::unauthorized(anyhow!("No school profile for this user")))?;

        Ok(AuthUser::new(principal, tenant))
    }
}

/// Declares an extractor that only succeeds when the principal holds
/// `$permission`.
#[macro_export]
macro_rules! require_permission {
    ($name:ident, $permission:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = schooldesk_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user = <$crate::middleware::auth::AuthUser as axum::extract::FromRequestParts<
                    $crate::state::AppState,
                >>::from_request_parts(parts, state)
                .await?;
                auth_user.require($permission)?;
                Ok($name(auth_user))
            }
        }
    };
}

require_permission!(RequireViewStudents, Permission::ViewStudents);
require_permission!(RequireManageRoles, Permission::ManageRoles);
require_permission!(
    RequireManageDeclarationTemplates,
    Permission::ManageDeclarationTemplates
);
