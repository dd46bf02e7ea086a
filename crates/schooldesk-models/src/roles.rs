//! Roles and the per-school role table.
//!
//! Role names form a closed set ([`RoleName`]). Each school keeps exactly one
//! [`Role`] per name in its [`RoleTable`]; the table is edited through the
//! role settings screen and read by the permission engine on every request.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use schooldesk_core::permissions::{self, Permission, PermissionSet};

/// The role identifiers a school can assign. Serialised by their labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum RoleName {
    #[serde(rename = "Admin")]
    Admin,
    #[serde(rename = "Diretor(a)")]
    Director,
    #[serde(rename = "Coordenador(a)")]
    Coordinator,
    #[serde(rename = "Secretário(a)")]
    Secretary,
    #[serde(rename = "Financeiro")]
    Finance,
    #[serde(rename = "Professor(a)")]
    Teacher,
    /// Parent or guardian using the family portal
    #[serde(rename = "Responsável")]
    Parent,
}

impl RoleName {
    pub const ALL: [RoleName; 7] = [
        RoleName::Admin,
        RoleName::Director,
        RoleName::Coordinator,
        RoleName::Secretary,
        RoleName::Finance,
        RoleName::Teacher,
        RoleName::Parent,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            RoleName::Admin => "Admin",
            RoleName::Director => "Diretor(a)",
            RoleName::Coordinator => "Coordenador(a)",
            RoleName::Secretary => "Secretário(a)",
            RoleName::Finance => "Financeiro",
            RoleName::Teacher => "Professor(a)",
            RoleName::Parent => "Responsável",
        }
    }

    /// The role whose permission set is locked to the full catalog.
    pub const fn is_admin(self) -> bool {
        matches!(self, RoleName::Admin)
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoleName(pub String);

impl fmt::Display for UnknownRoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}'", self.0)
    }
}

impl std::error::Error for UnknownRoleName {}

impl FromStr for RoleName {
    type Err = UnknownRoleName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleName::ALL
            .into_iter()
            .find(|role| role.label() == s)
            .ok_or_else(|| UnknownRoleName(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Role {
    pub name: RoleName,
    #[serde(deserialize_with = "permissions::deserialize_lenient")]
    #[schema(value_type = Vec<Permission>)]
    pub permissions: PermissionSet,
}

/// One permission set per role name. Serialised as a list of [`Role`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Role>", into = "Vec<Role>")]
pub struct RoleTable(BTreeMap<RoleName, PermissionSet>);

impl RoleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: RoleName) -> Option<&PermissionSet> {
        self.0.get(&name)
    }

    /// Inserts or replaces the entry for `role.name`.
    pub fn insert(&mut self, role: Role) -> Option<PermissionSet> {
        self.0.insert(role.name, role.permissions)
    }

    pub fn with_role<I>(mut self, name: RoleName, permissions: I) -> Self
    where
        I: IntoIterator<Item = Permission>,
    {
        self.insert(Role {
            name,
            permissions: permissions.into_iter().collect(),
        });
        self
    }

    pub fn remove(&mut self, name: RoleName) -> Option<PermissionSet> {
        self.0.remove(&name)
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().map(|(name, permissions)| Role {
            name: *name,
            permissions: permissions.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Role>> for RoleTable {
    fn from(roles: Vec<Role>) -> Self {
        let mut table = RoleTable::new();
        for role in roles {
            table.insert(role);
        }
        table
    }
}

impl From<RoleTable> for Vec<Role> {
    fn from(table: RoleTable) -> Self {
        table.roles().collect()
    }
}

/// The role table a new school starts with.
pub fn default_role_table() -> RoleTable {
    use Permission::*;

    RoleTable::new()
        .with_role(RoleName::Admin, Permission::ALL.iter().copied())
        .with_role(
            RoleName::Director,
            Permission::ALL
                .iter()
                .copied()
                .filter(|p| !matches!(p, ManageRoles | ManageSettings)),
        )
        .with_role(
            RoleName::Coordinator,
            [
                ViewDashboard,
                ViewStudents,
                EditStudents,
                ViewStaff,
                ViewAgenda,
                ManageAgenda,
                ViewCommunications,
                SendCommunications,
                ViewDeclarations,
                GenerateDeclarations,
                ViewGallery,
                ManageGallery,
                ViewLibrary,
                ManageLibrary,
                ViewReports,
            ],
        )
        .with_role(
            RoleName::Secretary,
            [
                ViewDashboard,
                ViewStudents,
                CreateStudents,
                EditStudents,
                ViewLeads,
                CreateLeads,
                EditLeads,
                ConvertLeads,
                ViewAgenda,
                ViewCommunications,
                SendCommunications,
                ViewDeclarations,
                GenerateDeclarations,
                ViewReports,
            ],
        )
        .with_role(
            RoleName::Finance,
            [
                ViewDashboard,
                ViewStudents,
                ViewFinancials,
                CreateInvoices,
                EditInvoices,
                DeleteInvoices,
                ExportFinancials,
                ViewReports,
                ExportReports,
            ],
        )
        .with_role(
            RoleName::Teacher,
            [
                ViewDashboard,
                ViewStudents,
                ViewAgenda,
                ViewCommunications,
                SendCommunications,
                ViewGallery,
                ManageGallery,
                ViewLibrary,
            ],
        )
        .with_role(
            RoleName::Parent,
            [
                ViewDashboard,
                ViewAgenda,
                ViewCommunications,
                ViewDeclarations,
                ViewGallery,
                ViewLibrary,
            ],
        )
}
