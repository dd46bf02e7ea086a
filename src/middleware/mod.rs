//! Request extractors for authentication and authorization.
//!
//! # Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::AuthUser`] verifies the token, finds the user's school profile
//!    and computes its effective permissions from the current role table
//! 3. Permission extractors (`RequireManageRoles`, ...) reject with 403 when
//!    the permission is missing
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::RequireViewStudents;
//!
//! async fn get_students(RequireViewStudents(auth_user): RequireViewStudents) {
//!     // Only runs when the caller holds "view_students"
//! }
//! ```

pub mod auth;
