use axum::{Router, routing::post};

use super::controller::{create_study_session, get_study_sessions};
use crate::state::AppState;

pub fn init_study_sessions_router() -> Router<AppState> {
    Router::new().route("/", post(create_study_session).get(get_study_sessions))
}
