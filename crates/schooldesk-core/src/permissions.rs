//! The permission catalog for SchoolDesk.
//!
//! Permissions are a closed set: every grantable capability is a variant of
//! [`Permission`], serialised as its snake_case token (`"view_students"`,
//! `"manage_roles"`, ...). Tokens that are not in the catalog never parse, so
//! a typo in stored data can only ever *remove* access.
//!
//! # Example
//!
//! ```ignore
//! use schooldesk_core::permissions::{Permission, PermissionSet};
//!
//! let set: PermissionSet = [Permission::ViewStudents, Permission::CreateStudents]
//!     .into_iter()
//!     .collect();
//!
//! assert!(set.contains(Permission::CreateStudents));
//! assert!(!set.contains_token("manage_users"));
//! assert!(!set.contains_token("create_studnets"));
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Functional area a permission belongs to. Used to group the catalog in the
/// role settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum PermissionModule {
    Dashboard,
    Students,
    Staff,
    Financials,
    Leads,
    Agenda,
    Communications,
    Declarations,
    Gallery,
    Library,
    Reports,
    Admin,
}

impl PermissionModule {
    pub const ALL: [PermissionModule; 12] = [
        PermissionModule::Dashboard,
        PermissionModule::Students,
        PermissionModule::Staff,
        PermissionModule::Financials,
        PermissionModule::Leads,
        PermissionModule::Agenda,
        PermissionModule::Communications,
        PermissionModule::Declarations,
        PermissionModule::Gallery,
        PermissionModule::Library,
        PermissionModule::Reports,
        PermissionModule::Admin,
    ];

    /// Label shown in the settings screen.
    pub const fn label(self) -> &'static str {
        match self {
            PermissionModule::Dashboard => "Dashboard",
            PermissionModule::Students => "Alunos",
            PermissionModule::Staff => "Equipe",
            PermissionModule::Financials => "Financeiro",
            PermissionModule::Leads => "Captação",
            PermissionModule::Agenda => "Agenda",
            PermissionModule::Communications => "Comunicados",
            PermissionModule::Declarations => "Declarações",
            PermissionModule::Gallery => "Galeria",
            PermissionModule::Library => "Biblioteca",
            PermissionModule::Reports => "Relatórios",
            PermissionModule::Admin => "Administração",
        }
    }

    pub fn permissions(self) -> impl Iterator<Item = Permission> {
        Permission::ALL
            .iter()
            .copied()
            .filter(move |p| p.module() == self)
    }
}

macro_rules! permission_catalog {
    (
        $(
            $module:ident {
                $( $(#[$doc:meta])* $variant:ident => $token:tt ),+ $(,)?
            }
        )+
    ) => {
        /// A single grantable capability.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
        )]
        pub enum Permission {
            $( $( $(#[$doc])* #[serde(rename = $token)] $variant, )+ )+
        }

        impl Permission {
            /// The full catalog, in display order.
            pub const ALL: &'static [Permission] = &[ $( $( Permission::$variant, )+ )+ ];

            /// The wire token, e.g. `"view_students"`.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $( Permission::$variant => $token, )+ )+
                }
            }

            pub const fn module(self) -> PermissionModule {
                match self {
                    $( $( Permission::$variant => PermissionModule::$module, )+ )+
                }
            }
        }
    };
}

permission_catalog! {
    Dashboard {
        ViewDashboard => "view_dashboard",
    }
    Students {
        ViewStudents => "view_students",
        CreateStudents => "create_students",
        EditStudents => "edit_students",
        DeleteStudents => "delete_students",
    }
    Staff {
        ViewStaff => "view_staff",
        CreateStaff => "create_staff",
        EditStaff => "edit_staff",
        DeleteStaff => "delete_staff",
    }
    Financials {
        ViewFinancials => "view_financials",
        CreateInvoices => "create_invoices",
        EditInvoices => "edit_invoices",
        DeleteInvoices => "delete_invoices",
        ExportFinancials => "export_financials",
    }
    Leads {
        ViewLeads => "view_leads",
        CreateLeads => "create_leads",
        EditLeads => "edit_leads",
        DeleteLeads => "delete_leads",
        /// Turn an admissions lead into an enrolled student
        ConvertLeads => "convert_leads",
    }
    Agenda {
        ViewAgenda => "view_agenda",
        ManageAgenda => "manage_agenda",
    }
    Communications {
        ViewCommunications => "view_communications",
        SendCommunications => "send_communications",
    }
    Declarations {
        ViewDeclarations => "view_declarations",
        GenerateDeclarations => "generate_declarations",
        /// Edit the per-school declaration templates
        ManageDeclarationTemplates => "manage_declaration_templates",
    }
    Gallery {
        ViewGallery => "view_gallery",
        ManageGallery => "manage_gallery",
    }
    Library {
        ViewLibrary => "view_library",
        ManageLibrary => "manage_library",
    }
    Reports {
        ViewReports => "view_reports",
        ExportReports => "export_reports",
    }
    Admin {
        ManageUsers => "manage_users",
        /// Edit role to permission assignments
        ManageRoles => "manage_roles",
        ManageSettings => "manage_settings",
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPermission(pub String);

impl fmt::Display for UnknownPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown permission '{}'", self.0)
    }
}

impl std::error::Error for UnknownPermission {}

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPermission(s.to_string()))
    }
}

/// A deduplicated, ordered set of permissions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every permission in the catalog.
    pub fn full() -> Self {
        Permission::ALL.iter().copied().collect()
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    /// Membership test on a raw token. Unknown tokens are simply absent.
    pub fn contains_token(&self, token: &str) -> bool {
        token
            .parse::<Permission>()
            .is_ok_and(|permission| self.contains(permission))
    }

    pub fn is_full(&self) -> bool {
        self.0.len() == Permission::ALL.len()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }

    pub fn tokens(&self) -> Vec<&'static str> {
        self.iter().map(Permission::as_str).collect()
    }

    /// Builds a set from raw tokens, dropping tokens outside the catalog.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .filter_map(|token| token.as_ref().parse().ok())
            .collect()
    }
}

/// Deserializes a token list into a [`PermissionSet`], ignoring unknown tokens
/// instead of rejecting the whole document.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<PermissionSet, D::Error>
where
    D: Deserializer<'de>,
{
    let tokens: Vec<String> = Vec::deserialize(deserializer)?;
    Ok(PermissionSet::from_tokens(tokens))
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PermissionSet {
    type Item = &'a Permission;
    type IntoIter = std::collections::btree_set::Iter<'a, Permission>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
