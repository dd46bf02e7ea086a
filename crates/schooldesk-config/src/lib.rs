//! # SchoolDesk Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: verification of session tokens issued by the auth platform
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: listen address and the tenant directory seed file
//! - [`declarations`]: time zone used to date generated declarations
//! - [`logging`]: log level and optional log directory
//!
//! # Example
//!
//! ```ignore
//! use schooldesk_config::{JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod declarations;
pub mod jwt;
pub mod logging;
pub mod server;

mod env;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use declarations::DeclarationConfig;
pub use jwt::JwtConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;
