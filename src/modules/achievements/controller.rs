use axum::Json;
use axum::extract::State;
use tracing::instrument;

use super::model::AchievementsResponse;
use super::service::AchievementService;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Derived achievements and level for the caller
#[utoipa::path(
    get,
    path = "/api/achievements",
    responses(
        (status = 200, description = "Achievements computed from study totals", body = AchievementsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Achievements"
)]
#[instrument(skip(state))]
pub async fn get_achievements(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<AchievementsResponse>, AppError> {
    let user_id = auth_user.user_id()?;
    let response = AchievementService::get_achievements(&state.db, user_id).await?;
    Ok(Json(response))
}
