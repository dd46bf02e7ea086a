//! In-memory tenant directory.
//!
//! Each school is held as an immutable [`TenantRecord`] behind an `Arc`.
//! Readers clone the `Arc` and work on that snapshot without holding the lock;
//! writers build a new record from the current one and swap it in, so a render
//! that started before a settings edit finishes against the old settings.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use schooldesk_core::PermissionSet;
use schooldesk_models::{Directory, Role, RoleName, SchoolId, TenantRecord, UserId};

use crate::modules::roles::service::admin_role_intact;

#[derive(Clone, Debug, Default)]
pub struct TenantStore {
    tenants: Arc<RwLock<HashMap<SchoolId, Arc<TenantRecord>>>>,
    /// School holding each user profile, fixed at load
    user_schools: Arc<HashMap<UserId, SchoolId>>,
}

impl TenantStore {
    /// Builds the store from a loaded directory. A school whose Admin role is
    /// missing or incomplete gets it restored to the full catalog.
    ///
    /// A user id may belong to one school only. When it appears in several,
    /// the first school in directory order keeps it.
    pub fn from_directory(directory: Directory) -> Self {
        let mut tenants = HashMap::with_capacity(directory.schools.len());
        let mut user_schools = HashMap::new();

        for mut record in directory.schools {
            if !admin_role_intact(&record.settings.roles) {
                warn!(school_id = %record.id, "Restoring the full permission catalog on the Admin role");
                record.settings.roles.insert(Role {
                    name: RoleName::Admin,
                    permissions: PermissionSet::full(),
                });
            }

            for user in &record.users {
                match user_schools.get(&user.id) {
                    Some(first) if *first != record.id => warn!(
                        user_id = %user.id,
                        kept = %first,
                        ignored = %record.id,
                        "User profile appears in more than one school"
                    ),
                    Some(_) => {}
                    None => {
                        user_schools.insert(user.id, record.id);
                    }
                }
            }

            tenants.insert(record.id, Arc::new(record));
        }

        Self {
            tenants: Arc::new(RwLock::new(tenants)),
            user_schools: Arc::new(user_schools),
        }
    }

    /// Reads a JSON [`Directory`] from `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let directory = read_directory(path)?;
        info!(
            path = %path.display(),
            schools = directory.schools.len(),
            "Loaded tenant directory"
        );
        Ok(Self::from_directory(directory))
    }

    pub async fn snapshot(&self, school_id: SchoolId) -> Option<Arc<TenantRecord>> {
        self.tenants.read().await.get(&school_id).cloned()
    }

    /// Finds the school holding the profile of `user_id`.
    pub async fn tenant_of_user(&self, user_id: UserId) -> Option<Arc<TenantRecord>> {
        let school_id = self.user_schools.get(&user_id)?;
        self.snapshot(*school_id)
            .await
            .filter(|record| record.user(user_id).is_some())
    }

    /// Replaces the record of `school_id` with the result of `edit`.
    ///
    /// `edit` runs under the write lock against the current record, so
    /// concurrent edits are applied one after the other. Returns `None` when
    /// the school does not exist; an `Err` from `edit` leaves the record
    /// untouched.
    #[instrument(skip(self, edit))]
    pub async fn update<F, E>(
        &self,
        school_id: SchoolId,
        edit: F,
    ) -> Option<Result<Arc<TenantRecord>, E>>
    where
        F: FnOnce(&TenantRecord) -> Result<TenantRecord, E>,
    {
        let mut tenants = self.tenants.write().await;
        let current = Arc::clone(tenants.get(&school_id)?);

        Some(edit(&current).map(|next| {
            let next = Arc::new(next);
            tenants.insert(school_id, Arc::clone(&next));
            next
        }))
    }

    pub async fn len(&self) -> usize {
        self.tenants.read().await.len()
    }
}

/// Reads a JSON [`Directory`] without building a store. Used by the CLI.
pub fn read_directory(path: &Path) -> anyhow::Result<Directory> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read tenant directory {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid tenant directory {}", path.display()))
}
