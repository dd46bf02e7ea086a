//! User profiles and the session principal.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{SchoolId, StudentId, UserId};
use crate::roles::RoleName;

/// A user's profile within one school, as stored in the directory.
///
/// `role` is kept as the raw stored label: an administrator may rename or
/// remove roles while the user is signed in, and a stale label must resolve
/// to "no permissions" rather than fail to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    /// Set for parent users: the student they are responsible for
    #[serde(default)]
    pub student_id: Option<StudentId>,
}

/// The authenticated user making a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Principal {
    pub id: UserId,
    pub email: String,
    pub name: String,
    /// Role label as stored on the profile
    pub role: Option<String>,
    pub school_id: SchoolId,
    pub student_id: Option<StudentId>,
}

impl Principal {
    pub fn from_profile(profile: &UserProfile, school_id: SchoolId) -> Self {
        Self {
            id: profile.id,
            email: profile.email.clone(),
            name: profile.name.clone(),
            role: profile.role.clone(),
            school_id,
            student_id: profile.student_id,
        }
    }

    /// The assigned role, if the stored label names a known role.
    pub fn role_name(&self) -> Option<RoleName> {
        self.role.as_deref().and_then(|label| label.parse().ok())
    }

    /// Whether this principal is linked to `student_id` as its parent.
    pub fn is_parent_of(&self, student_id: StudentId) -> bool {
        self.student_id == Some(student_id)
    }
}
