use std::env;
use std::path::PathBuf;

use crate::env::{non_empty, parse_or};

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// JSON tenant directory loaded at startup. The server starts empty when unset.
    pub seed_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_or("PORT", 3000),
            seed_path: non_empty("SEED_PATH").map(PathBuf::from),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
