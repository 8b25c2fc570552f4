use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::service::AuthService;
use crate::utils::errors::AppError;
use crate::utils::rewards::level_for_credits;

use super::model::{AchievementsResponse, Totals, compute_achievements};

pub struct AchievementService;

impl AchievementService {
    #[instrument(skip(db))]
    pub async fn get_achievements(
        db: &PgPool,
        user_id: Uuid,
    ) -> Result<AchievementsResponse, AppError> {
        let user = AuthService::get_user(db, user_id).await?;

        let session_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM study_sessions WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(db)
                .await
                .context("Failed to count study sessions")
                .map_err(AppError::database)?;

        let achievements = compute_achievements(Totals {
            credits: user.credits,
            total_study_minutes: user.total_study_minutes,
            session_count,
        });

        Ok(AchievementsResponse {
            level: level_for_credits(user.credits),
            credits: user.credits,
            achievements,
        })
    }
}
