use std::env;
use std::path::PathBuf;

use crate::env::non_empty;

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Default level for SchoolDesk crates when `RUST_LOG` is unset.
    pub level: String,
    /// Directory for daily-rolling JSON logs. Console only when unset.
    pub log_dir: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_dir: non_empty("LOG_DIR").map(PathBuf::from),
        }
    }
}
