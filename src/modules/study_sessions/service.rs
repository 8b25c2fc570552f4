use anyhow::Context;
use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::motivation::client::MotivationClient;
use crate::modules::subjects::service::SubjectService;
use crate::utils::errors::AppError;
use crate::utils::rewards::credits_for_minutes;

use super::model::{CreateStudySessionRequest, StudySession, validate_session_window};

pub struct StudySessionService;

impl StudySessionService {
    /// Records a closed focus session and awards credits.
    ///
    /// The session row and the user counters move in one transaction, so
    /// the credit balance always equals the sum over recorded sessions.
    #[instrument(skip(db, motivation, dto))]
    pub async fn create_session(
        db: &PgPool,
        motivation: &MotivationClient,
        user_id: Uuid,
        dto: CreateStudySessionRequest,
    ) -> Result<StudySession, AppError> {
        let duration_minutes =
            validate_session_window(dto.started_at, dto.ended_at, Utc::now())?;

        // 404s when the subject is missing or owned by someone else.
        let subject = SubjectService::get_subject_by_id(db, dto.subject_id, user_id).await?;

        let credits_earned = credits_for_minutes(duration_minutes);

        // Best-effort: falls back to a built-in phrase on upstream failure.
        let phrase = motivation
            .generate(&format!("studying {}", subject.name))
            .await;

        let mut tx = db.begin().await.map_err(AppError::database)?;

        let session = sqlx::query_as::<_, StudySession>(
            "INSERT INTO study_sessions
                 (user_id, subject_id, started_at, ended_at, duration_minutes,
                  credits_earned, motivational_phrase)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, user_id, subject_id, started_at, ended_at, duration_minutes,
                       credits_earned, motivational_phrase, created_at",
        )
        .bind(user_id)
        .bind(dto.subject_id)
        .bind(dto.started_at)
        .bind(dto.ended_at)
        .bind(duration_minutes as i32)
        .bind(credits_earned)
        .bind(&phrase)
        .fetch_one(&mut *tx)
        .await
        .context("Failed to record study session")
        .map_err(AppError::database)?;

        sqlx::query(
            "UPDATE users
             SET credits = credits + $1, total_study_minutes = total_study_minutes + $2
             WHERE id = $3",
        )
        .bind(credits_earned)
        .bind(duration_minutes as i32)
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .context("Failed to update user counters")
        .map_err(AppError::database)?;

        tx.commit().await.map_err(AppError::database)?;

        Ok(session)
    }

    #[instrument(skip(db))]
    pub async fn get_sessions(db: &PgPool, user_id: Uuid) -> Result<Vec<StudySession>, AppError> {
        let sessions = sqlx::query_as::<_, StudySession>(
            "SELECT id, user_id, subject_id, started_at, ended_at, duration_minutes,
                    credits_earned, motivational_phrase, created_at
             FROM study_sessions
             WHERE user_id = $1
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch study sessions")
        .map_err(AppError::database)?;

        Ok(sessions)
    }
}
