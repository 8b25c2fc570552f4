use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use super::model::{CreateStudySessionRequest, StudySession};
use super::service::StudySessionService;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Record a completed focus session
#[utoipa::path(
    post,
    path = "/api/study-sessions",
    request_body = CreateStudySessionRequest,
    responses(
        (status = 201, description = "Session recorded, credits awarded", body = StudySession),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Subject not found", body = ErrorResponse),
        (status = 422, description = "Invalid timer window", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Study Sessions"
)]
#[instrument(skip(state, dto))]
pub async fn create_study_session(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateStudySessionRequest>,
) -> Result<(StatusCode, Json<StudySession>), AppError> {
    let user_id = auth_user.user_id()?;
    let session =
        StudySessionService::create_session(&state.db, &state.motivation, user_id, dto).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// List the caller's focus sessions, newest first
#[utoipa::path(
    get,
    path = "/api/study-sessions",
    responses(
        (status = 200, description = "Sessions owned by the caller", body = [StudySession]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Study Sessions"
)]
#[instrument(skip(state))]
pub async fn get_study_sessions(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<StudySession>>, AppError> {
    let user_id = auth_user.user_id()?;
    let sessions = StudySessionService::get_sessions(&state.db, user_id).await?;
    Ok(Json(sessions))
}
