use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::subjects::service::SubjectService;
use crate::utils::errors::AppError;

use super::model::{
    CreateGradeRequest, DEFAULT_MAX_GRADE, Grade, GradeAverageResponse, average,
};

pub struct GradeService;

impl GradeService {
    #[instrument(skip(db, dto))]
    pub async fn create_grade(
        db: &PgPool,
        user_id: Uuid,
        dto: CreateGradeRequest,
    ) -> Result<Grade, AppError> {
        // 404s when the subject is missing or owned by someone else.
        SubjectService::get_subject_by_id(db, dto.subject_id, user_id).await?;

        let max_grade = dto.max_grade.unwrap_or(DEFAULT_MAX_GRADE);
        if dto.grade > max_grade {
            return Err(AppError::unprocessable(anyhow::anyhow!(
                "grade cannot exceed max_grade ({})",
                max_grade
            )));
        }

        let grade = sqlx::query_as::<_, Grade>(
            "INSERT INTO grades (user_id, subject_id, grade, max_grade, exam_name, exam_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, user_id, subject_id, grade, max_grade, exam_name, exam_date, created_at",
        )
        .bind(user_id)
        .bind(dto.subject_id)
        .bind(dto.grade)
        .bind(max_grade)
        .bind(&dto.exam_name)
        .bind(dto.exam_date)
        .fetch_one(db)
        .await
        .context("Failed to create grade")
        .map_err(AppError::database)?;

        Ok(grade)
    }

    #[instrument(skip(db))]
    pub async fn get_grades(
        db: &PgPool,
        user_id: Uuid,
        subject_id: Option<Uuid>,
    ) -> Result<Vec<Grade>, AppError> {
        let grades = sqlx::query_as::<_, Grade>(
            "SELECT id, user_id, subject_id, grade, max_grade, exam_name, exam_date, created_at
             FROM grades
             WHERE user_id = $1 AND ($2::uuid IS NULL OR subject_id = $2)
             ORDER BY exam_date DESC",
        )
        .bind(user_id)
        .bind(subject_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch grades")
        .map_err(AppError::database)?;

        Ok(grades)
    }

    #[instrument(skip(db))]
    pub async fn delete_grade(db: &PgPool, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM grades WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await
            .context("Failed to delete grade")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Grade not found")));
        }

        Ok(())
    }

    /// The mean is recomputed on every read; an empty set reports `null`.
    #[instrument(skip(db))]
    pub async fn get_average(
        db: &PgPool,
        user_id: Uuid,
        subject_id: Option<Uuid>,
    ) -> Result<GradeAverageResponse, AppError> {
        let values: Vec<f64> = sqlx::query_scalar(
            "SELECT grade FROM grades
             WHERE user_id = $1 AND ($2::uuid IS NULL OR subject_id = $2)",
        )
        .bind(user_id)
        .bind(subject_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch grades for average")
        .map_err(AppError::database)?;

        Ok(GradeAverageResponse {
            average: average(&values),
            count: values.len() as i64,
        })
    }
}
