use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// One of the last few recorded sessions, with its subject name joined in.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct RecentSession {
    pub subject_name: String,
    pub duration_minutes: i32,
    pub credits_earned: i32,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardData {
    pub today_sessions: i64,
    pub today_minutes: i64,
    pub today_credits: i64,
    pub weekly_minutes: i64,
    /// `null` when the user has no grades yet.
    pub average_grade: Option<f64>,
    pub total_subjects: i64,
    pub recent_sessions: Vec<RecentSession>,
}
