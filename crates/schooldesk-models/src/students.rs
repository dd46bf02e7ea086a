//! Student records as read by declarations and the student list.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{SchoolId, StudentId};

/// A student enrolled in one school.
///
/// Optional profile fields default to empty strings so that an incomplete
/// record still renders (with blanks) instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Student {
    pub id: StudentId,
    pub school_id: SchoolId,
    pub name: String,
    #[serde(default)]
    pub parent_name: String,
    /// Brazilian individual taxpayer number
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub class_name: String,
}
