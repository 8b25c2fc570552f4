use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use super::model::{CreateGradeRequest, Grade, GradeAverageResponse, GradeFilterParams};
use super::service::GradeService;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Record a grade
#[utoipa::path(
    post,
    path = "/api/grades",
    request_body = CreateGradeRequest,
    responses(
        (status = 201, description = "Grade recorded", body = Grade),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Subject not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Grades"
)]
#[instrument(skip(state, dto))]
pub async fn create_grade(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateGradeRequest>,
) -> Result<(StatusCode, Json<Grade>), AppError> {
    let user_id = auth_user.user_id()?;
    let grade = GradeService::create_grade(&state.db, user_id, dto).await?;
    Ok((StatusCode::CREATED, Json(grade)))
}

/// List the caller's grades
#[utoipa::path(
    get,
    path = "/api/grades",
    params(
        GradeFilterParams
    ),
    responses(
        (status = 200, description = "Grades owned by the caller", body = [Grade]),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn get_grades(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<GradeFilterParams>,
) -> Result<Json<Vec<Grade>>, AppError> {
    let user_id = auth_user.user_id()?;
    let grades = GradeService::get_grades(&state.db, user_id, params.subject_id).await?;
    Ok(Json(grades))
}

/// Average of the caller's grades
#[utoipa::path(
    get,
    path = "/api/grades/average",
    params(
        GradeFilterParams
    ),
    responses(
        (status = 200, description = "Average grade, null when no grades exist", body = GradeAverageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn get_average(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<GradeFilterParams>,
) -> Result<Json<GradeAverageResponse>, AppError> {
    let user_id = auth_user.user_id()?;
    let response = GradeService::get_average(&state.db, user_id, params.subject_id).await?;
    Ok(Json(response))
}

/// Delete a grade
#[utoipa::path(
    delete,
    path = "/api/grades/{id}",
    params(
        ("id" = Uuid, Path, description = "Grade id")
    ),
    responses(
        (status = 200, description = "Grade deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Grade not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn delete_grade(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let user_id = auth_user.user_id()?;
    GradeService::delete_grade(&state.db, id, user_id).await?;
    Ok(Json(json!({ "message": "Grade deleted successfully" })))
}
