use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{get_permission_catalog, get_roles, update_role};

pub fn init_roles_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_roles))
        .route("/permissions", get(get_permission_catalog))
        .route("/{role}", put(update_role))
}
