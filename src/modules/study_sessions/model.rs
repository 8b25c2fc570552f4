use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::errors::AppError;

/// Longest focus session the server accepts, in minutes.
pub const MAX_SESSION_MINUTES: i64 = 24 * 60;

/// Tolerance for client clocks running ahead of the server.
pub const CLOCK_SKEW_ALLOWANCE_MINUTES: i64 = 5;

/// A closed focus-mode session. Immutable once recorded.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct StudySession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub subject_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub credits_earned: i32,
    pub motivational_phrase: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The client reports the timer window; the server derives the duration
/// and the credits instead of trusting a client-computed minute count.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudySessionRequest {
    pub subject_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
}

/// Validates the reported timer window against `now` and returns the whole
/// minutes it spans.
///
/// Rejected with 422: an inverted window, an end more than
/// [`CLOCK_SKEW_ALLOWANCE_MINUTES`] in the future, or a window longer than
/// [`MAX_SESSION_MINUTES`].
pub fn validate_session_window(
    started_at: DateTime<Utc>,
    ended_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<i64, AppError> {
    if ended_at <= started_at {
        return Err(AppError::unprocessable(anyhow::anyhow!(
            "ended_at must be after started_at"
        )));
    }

    if ended_at > now + Duration::minutes(CLOCK_SKEW_ALLOWANCE_MINUTES) {
        return Err(AppError::unprocessable(anyhow::anyhow!(
            "ended_at cannot be in the future"
        )));
    }

    let minutes = (ended_at - started_at).num_minutes();
    if minutes > MAX_SESSION_MINUTES {
        return Err(AppError::unprocessable(anyhow::anyhow!(
            "session cannot be longer than 24 hours"
        )));
    }

    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn at(minutes: i64) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-03-10T08:00:00Z").unwrap().to_utc()
            + Duration::minutes(minutes)
    }

    #[test]
    fn test_window_duration_truncates_to_whole_minutes() {
        let start = at(0);
        let end = start + Duration::seconds(95 * 60 + 45);
        assert_eq!(validate_session_window(start, end, end).unwrap(), 95);
    }

    #[test]
    fn test_inverted_window_rejected() {
        let err = validate_session_window(at(30), at(0), at(60)).unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);

        let err = validate_session_window(at(30), at(30), at(60)).unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_future_end_rejected_beyond_skew() {
        // 10 minutes ahead of the server clock
        let err = validate_session_window(at(0), at(40), at(30)).unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);

        // within the skew allowance
        assert!(validate_session_window(at(0), at(33), at(30)).is_ok());
    }

    #[test]
    fn test_marathon_window_rejected() {
        let err = validate_session_window(at(0), at(25 * 60), at(25 * 60)).unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);

        assert_eq!(
            validate_session_window(at(0), at(24 * 60), at(24 * 60)).unwrap(),
            MAX_SESSION_MINUTES
        );
    }
}
