use axum::Json;
use axum::extract::State;
use tracing::instrument;

use super::model::{MotivationalPhraseRequest, MotivationalPhraseResponse};
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Generate a motivational phrase
#[utoipa::path(
    post,
    path = "/api/motivational-phrase",
    request_body = MotivationalPhraseRequest,
    responses(
        (status = 200, description = "A phrase, possibly a fallback when the upstream is down", body = MotivationalPhraseResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Motivation"
)]
#[instrument(skip(state, dto))]
pub async fn get_motivational_phrase(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<MotivationalPhraseRequest>,
) -> Result<Json<MotivationalPhraseResponse>, AppError> {
    auth_user.user_id()?;

    let context = dto.context.unwrap_or_else(|| "general study".to_string());
    let phrase = state.motivation.generate(&context).await;

    Ok(Json(MotivationalPhraseResponse { phrase }))
}
