//! The multi-school directory document.
//!
//! This is the JSON shape of the seed file the server and CLI load: one
//! record per school with its settings, students, and user profiles.

use serde::{Deserialize, Serialize};

use crate::ids::{SchoolId, StudentId, UserId};
use crate::schools::SchoolSettings;
use crate::students::Student;
use crate::users::{Principal, UserProfile};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    #[serde(default)]
    pub schools: Vec<TenantRecord>,
}

/// One school's isolated partition of the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantRecord {
    pub id: SchoolId,
    pub settings: SchoolSettings,
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub users: Vec<UserProfile>,
}

impl TenantRecord {
    pub fn new(id: SchoolId, settings: SchoolSettings) -> Self {
        Self {
            id,
            settings,
            students: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Looks up a student of this school. Students of other schools are
    /// never returned, even if a record carries a foreign `school_id`.
    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students
            .iter()
            .find(|s| s.id == id && s.school_id == self.id)
    }

    pub fn user(&self, id: UserId) -> Option<&UserProfile> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn principal(&self, id: UserId) -> Option<Principal> {
        self.user(id)
            .map(|profile| Principal::from_profile(profile, self.id))
    }
}

impl Directory {
    pub fn school(&self, id: SchoolId) -> Option<&TenantRecord> {
        self.schools.iter().find(|s| s.id == id)
    }

    /// Finds the school a user belongs to.
    pub fn school_of_user(&self, user_id: UserId) -> Option<&TenantRecord> {
        self.schools.iter().find(|s| s.user(user_id).is_some())
    }
}
