use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_student, get_students};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_students))
        .route("/{id}", get(get_student))
}
