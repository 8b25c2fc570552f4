use axum::{Router, routing::post};

use super::controller::get_motivational_phrase;
use crate::state::AppState;

pub fn init_motivation_router() -> Router<AppState> {
    Router::new().route("/", post(get_motivational_phrase))
}
