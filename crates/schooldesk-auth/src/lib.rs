//! # SchoolDesk Auth
//!
//! Sign-in itself happens on the auth platform; this crate only verifies the
//! access tokens it issues and exposes their claims.
//!
//! - [`claims`]: access token claim structure
//! - [`jwt`]: token verification, plus minting for tooling and tests

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
