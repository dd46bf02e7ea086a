//! # SchoolDesk API
//!
//! Backend for the SchoolDesk school CRM. It serves two engines to the web
//! client:
//!
//! - the **permission engine**: a principal's effective permissions are
//!   looked up from its role in the school's role table, recomputed on every
//!   request so that role edits apply immediately
//! - the **declaration engine**: enrollment, completion, transfer, tax and
//!   clearance documents rendered from per-school templates with
//!   `{{student.name}}` style placeholders
//!
//! Both engines are pure functions over an immutable snapshot of one school
//! (its settings, students and user profiles). Snapshots live in the
//! in-memory [`store::TenantStore`], seeded from a JSON directory file.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/              # schooldesk-cli commands
//! ├── middleware/       # AuthUser extractor and permission gates
//! ├── modules/
//! │   ├── access/       # Permission engine, /api/access
//! │   ├── roles/        # Role administration, /api/roles
//! │   ├── declarations/ # Template engine, /api/declarations
//! │   └── students/     # Student records, /api/students
//! ├── store.rs          # Tenant snapshots
//! └── router.rs         # Main application router
//! ```
//!
//! Each feature module follows the same layout: `controller.rs` (handlers),
//! `service.rs` (logic), `model.rs` (DTOs) and `router.rs`.
//!
//! ## Authentication
//!
//! Sign-in happens on the auth platform. Requests carry its HS256 access
//! token as `Authorization: Bearer <token>`; the token subject must match a
//! user profile in exactly one school.
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! SEED_PATH=demos/seed.json
//! DECLARATION_UTC_OFFSET_HOURS=-3
//! ```

pub mod cli;
pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod store;
pub mod validator;

// Re-export workspace crates for convenience
pub use schooldesk_auth;
pub use schooldesk_config;
pub use schooldesk_core;
pub use schooldesk_models;
