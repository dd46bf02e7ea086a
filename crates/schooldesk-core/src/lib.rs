//! # SchoolDesk Core
//!
//! Core types, errors, and utilities for the SchoolDesk API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`pagination`]: Pagination utilities for list endpoints
//! - [`permissions`]: The closed permission catalog and [`PermissionSet`]
//!
//! # Example
//!
//! ```ignore
//! use schooldesk_core::permissions::{Permission, PermissionSet};
//!
//! let granted: PermissionSet = [Permission::ViewStudents].into_iter().collect();
//! assert!(granted.contains(Permission::ViewStudents));
//! assert!(!granted.contains_token("manage_users"));
//! ```

pub mod errors;
pub mod pagination;
pub mod permissions;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use pagination::{PaginationMeta, PaginationParams};
pub use permissions::{Permission, PermissionModule, PermissionSet};
