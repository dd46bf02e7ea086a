use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

use super::controller::{
    delete_template, get_placeholders, get_templates, render_declaration, update_template,
};

pub fn init_declarations_router() -> Router<AppState> {
    Router::new()
        .route("/render", post(render_declaration))
        .route("/templates", get(get_templates))
        .route(
            "/templates/{declaration_type}",
            put(update_template).delete(delete_template),
        )
        .route("/placeholders", get(get_placeholders))
}
