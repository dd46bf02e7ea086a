//! Declaration documents: rendering templates for a student and managing the
//! per-school template table.

pub mod controller;
pub mod dates;
pub mod model;
pub mod router;
pub mod service;
pub mod template;
