//! Role administration for the school's settings screen.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
