use anyhow::Context;
use chrono::{Duration, NaiveTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::grades::service::GradeService;
use crate::utils::errors::AppError;

use super::model::{DashboardData, RecentSession};

#[derive(sqlx::FromRow)]
struct SessionTotals {
    sessions: i64,
    minutes: i64,
    credits: i64,
}

pub struct DashboardService;

impl DashboardService {
    #[instrument(skip(db))]
    pub async fn get_dashboard(db: &PgPool, user_id: Uuid) -> Result<DashboardData, AppError> {
        let now = Utc::now();
        let today_start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        let tomorrow_start = today_start + Duration::days(1);
        let week_ago = now - Duration::days(7);

        let today = sqlx::query_as::<_, SessionTotals>(
            "SELECT COUNT(*) AS sessions,
                    COALESCE(SUM(duration_minutes), 0)::BIGINT AS minutes,
                    COALESCE(SUM(credits_earned), 0)::BIGINT AS credits
             FROM study_sessions
             WHERE user_id = $1 AND created_at >= $2 AND created_at < $3",
        )
        .bind(user_id)
        .bind(today_start)
        .bind(tomorrow_start)
        .fetch_one(db)
        .await
        .context("Failed to aggregate today's sessions")
        .map_err(AppError::database)?;

        let weekly_minutes: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(duration_minutes), 0)::BIGINT
             FROM study_sessions
             WHERE user_id = $1 AND created_at >= $2",
        )
        .bind(user_id)
        .bind(week_ago)
        .fetch_one(db)
        .await
        .context("Failed to aggregate weekly minutes")
        .map_err(AppError::database)?;

        let average = GradeService::get_average(db, user_id, None).await?;

        let total_subjects: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM subjects WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(db)
                .await
                .context("Failed to count subjects")
                .map_err(AppError::database)?;

        let recent_sessions = sqlx::query_as::<_, RecentSession>(
            "SELECT s.name AS subject_name, ss.duration_minutes, ss.credits_earned,
                    ss.created_at AS date
             FROM study_sessions ss
             JOIN subjects s ON s.id = ss.subject_id
             WHERE ss.user_id = $1
             ORDER BY ss.created_at DESC
             LIMIT 5",
        )
        .bind(user_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch recent sessions")
        .map_err(AppError::database)?;

        Ok(DashboardData {
            today_sessions: today.sessions,
            today_minutes: today.minutes,
            today_credits: today.credits,
            weekly_minutes,
            average_grade: average.average,
            total_subjects,
            recent_sessions,
        })
    }
}
