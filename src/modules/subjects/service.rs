use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{
    CreateSubjectRequest, DEFAULT_SUBJECT_COLOR, Subject, UpdateSubjectRequest, is_hex_color,
};

pub struct SubjectService;

impl SubjectService {
    #[instrument(skip(db, dto))]
    pub async fn create_subject(
        db: &PgPool,
        user_id: Uuid,
        dto: CreateSubjectRequest,
    ) -> Result<Subject, AppError> {
        let color = dto
            .color
            .unwrap_or_else(|| DEFAULT_SUBJECT_COLOR.to_string());
        if !is_hex_color(&color) {
            return Err(AppError::unprocessable(anyhow::anyhow!(
                "color must be a hex value like {}",
                DEFAULT_SUBJECT_COLOR
            )));
        }

        let subject = sqlx::query_as::<_, Subject>(
            "INSERT INTO subjects (user_id, name, color, target_hours_per_week)
             VALUES ($1, $2, $3, $4)
             RETURNING id, user_id, name, color, target_hours_per_week, created_at",
        )
        .bind(user_id)
        .bind(&dto.name)
        .bind(&color)
        .bind(dto.target_hours_per_week.unwrap_or(0))
        .fetch_one(db)
        .await
        .context("Failed to create subject")
        .map_err(AppError::database)?;

        Ok(subject)
    }

    #[instrument(skip(db))]
    pub async fn get_subjects(db: &PgPool, user_id: Uuid) -> Result<Vec<Subject>, AppError> {
        let subjects = sqlx::query_as::<_, Subject>(
            "SELECT id, user_id, name, color, target_hours_per_week, created_at
             FROM subjects
             WHERE user_id = $1
             ORDER BY created_at",
        )
        .bind(user_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch subjects")
        .map_err(AppError::database)?;

        Ok(subjects)
    }

    #[instrument(skip(db))]
    pub async fn get_subject_by_id(
        db: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Subject, AppError> {
        let subject = sqlx::query_as::<_, Subject>(
            "SELECT id, user_id, name, color, target_hours_per_week, created_at
             FROM subjects
             WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch subject by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Subject not found")))?;

        Ok(subject)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_subject(
        db: &PgPool,
        id: Uuid,
        user_id: Uuid,
        dto: UpdateSubjectRequest,
    ) -> Result<Subject, AppError> {
        let existing = Self::get_subject_by_id(db, id, user_id).await?;

        let name = dto.name.unwrap_or(existing.name);
        let color = dto.color.unwrap_or(existing.color);
        let target = dto
            .target_hours_per_week
            .unwrap_or(existing.target_hours_per_week);

        if !is_hex_color(&color) {
            return Err(AppError::unprocessable(anyhow::anyhow!(
                "color must be a hex value like {}",
                DEFAULT_SUBJECT_COLOR
            )));
        }

        let subject = sqlx::query_as::<_, Subject>(
            "UPDATE subjects
             SET name = $1, color = $2, target_hours_per_week = $3
             WHERE id = $4 AND user_id = $5
             RETURNING id, user_id, name, color, target_hours_per_week, created_at",
        )
        .bind(&name)
        .bind(&color)
        .bind(target)
        .bind(id)
        .bind(user_id)
        .fetch_one(db)
        .await
        .context("Failed to update subject")
        .map_err(AppError::database)?;

        Ok(subject)
    }

    #[instrument(skip(db))]
    pub async fn delete_subject(db: &PgPool, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM subjects WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await
            .context("Failed to delete subject")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Subject not found")));
        }

        Ok(())
    }
}
