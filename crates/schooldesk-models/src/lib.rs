//! # SchoolDesk Models
//!
//! Domain models shared by the API, the CLI, and the tenant directory.
//!
//! # Modules
//!
//! - [`declarations`]: declaration types and per-school templates
//! - [`directory`]: the multi-school directory document (seed format)
//! - [`ids`]: strongly-typed identifiers
//! - [`roles`]: role names, roles, and the per-school role table
//! - [`schools`]: school profile and the settings snapshot
//! - [`students`]: student records
//! - [`users`]: user profiles and the session principal

pub mod declarations;
pub mod directory;
pub mod ids;
pub mod roles;
pub mod schools;
pub mod students;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use declarations::{DeclarationTemplates, DeclarationType, default_templates};
pub use directory::{Directory, TenantRecord};
pub use ids::{SchoolId, StudentId, UserId};
pub use roles::{Role, RoleName, RoleTable, UnknownRoleName, default_role_table};
pub use schools::{SchoolInfo, SchoolSettings};
pub use students::Student;
pub use users::{Principal, UserProfile};
