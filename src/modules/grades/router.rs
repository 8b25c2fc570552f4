use axum::{
    Router,
    routing::{delete, get, post},
};

use super::controller::{create_grade, delete_grade, get_average, get_grades};
use crate::state::AppState;

pub fn init_grades_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_grade).get(get_grades))
        .route("/average", get(get_average))
        .route("/{id}", delete(delete_grade))
}
