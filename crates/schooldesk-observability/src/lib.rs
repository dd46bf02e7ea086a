//! SchoolDesk observability.
//!
//! - [`init_tracing`]: console logging, plus daily-rolling JSON files when a
//!   log directory is configured
//! - [`logging_middleware`]: one structured event per HTTP request
//!
//! # Example
//!
//! ```no_run
//! use schooldesk_config::LoggingConfig;
//! use schooldesk_observability::init_tracing;
//!
//! init_tracing(&LoggingConfig::from_env());
//! ```

mod logging;
mod middleware;

pub use logging::{default_filter, init_tracing};
pub use middleware::logging_middleware;
