use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{check_permission, get_me};

pub fn init_access_router() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_me))
        .route("/check/{permission}", get(check_permission))
}
