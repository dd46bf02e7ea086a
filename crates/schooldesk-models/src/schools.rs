//! School profile and the per-school settings snapshot.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::declarations::{DeclarationTemplates, default_templates};
use crate::roles::{Role, RoleTable, default_role_table};

/// Tenant profile fields printed on declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SchoolInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub logo_url: Option<String>,
    /// Brazilian company taxpayer number
    pub cnpj: String,
}

/// Everything both engines read for one school.
///
/// Settings are treated as an immutable snapshot: edits build a new value
/// and replace the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SchoolSettings {
    #[serde(default)]
    pub school: SchoolInfo,
    #[serde(default = "default_role_table")]
    #[schema(value_type = Vec<Role>)]
    pub roles: RoleTable,
    #[serde(default = "default_templates")]
    #[schema(value_type = std::collections::BTreeMap<String, String>)]
    pub declaration_templates: DeclarationTemplates,
}

impl SchoolSettings {
    /// Settings for a new school: default roles and templates.
    pub fn new(school: SchoolInfo) -> Self {
        Self {
            school,
            roles: default_role_table(),
            declaration_templates: default_templates(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations::DeclarationType;
    use crate::roles::RoleName;

    #[test]
    fn test_missing_sections_use_defaults() {
        let settings: SchoolSettings =
            serde_json::from_str(r#"{"school": {"name": "Escola Aurora"}}"#).unwrap();
        assert_eq!(settings.school.name, "Escola Aurora");
        assert!(settings.roles.get(RoleName::Admin).is_some());
        assert!(
            settings
                .declaration_templates
                .contains_key(&DeclarationType::Enrollment)
        );
    }

    #[test]
    fn test_explicit_empty_templates_stay_empty() {
        let settings: SchoolSettings =
            serde_json::from_str(r#"{"declaration_templates": {}}"#).unwrap();
        assert!(settings.declaration_templates.is_empty());
    }
}
