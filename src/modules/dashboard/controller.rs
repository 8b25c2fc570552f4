use axum::Json;
use axum::extract::State;
use tracing::instrument;

use super::model::DashboardData;
use super::service::DashboardService;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Aggregated study activity for the caller
#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Dashboard aggregates", body = DashboardData),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Dashboard"
)]
#[instrument(skip(state))]
pub async fn get_dashboard(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<DashboardData>, AppError> {
    let user_id = auth_user.user_id()?;
    let data = DashboardService::get_dashboard(&state.db, user_id).await?;
    Ok(Json(data))
}
