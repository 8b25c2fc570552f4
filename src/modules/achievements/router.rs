use axum::{Router, routing::get};

use super::controller::get_achievements;
use crate::state::AppState;

pub fn init_achievements_router() -> Router<AppState> {
    Router::new().route("/", get(get_achievements))
}
