use schooldesk_config::{CorsConfig, DeclarationConfig, JwtConfig, ServerConfig};
use tracing::warn;

use crate::store::TenantStore;

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: TenantStore,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub declaration_config: DeclarationConfig,
}

pub fn init_app_state(server_config: &ServerConfig) -> anyhow::Result<AppState> {
    let store = match &server_config.seed_path {
        Some(path) => TenantStore::load(path)?,
        None => {
            warn!("SEED_PATH is not set; starting with an empty tenant directory");
            TenantStore::default()
        }
    };

    Ok(AppState {
        store,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        declaration_config: DeclarationConfig::from_env(),
    })
}
