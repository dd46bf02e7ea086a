//! Permission engine and the permission checks exposed to the UI.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
