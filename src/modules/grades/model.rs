use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Default grade scale (Italian university exams are graded out of 30).
pub const DEFAULT_MAX_GRADE: f64 = 30.0;

/// An exam grade recorded for a subject.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Grade {
    pub id: Uuid,
    pub user_id: Uuid,
    pub subject_id: Uuid,
    pub grade: f64,
    pub max_grade: f64,
    pub exam_name: String,
    pub exam_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGradeRequest {
    pub subject_id: Uuid,
    #[validate(range(min = 0.0, message = "grade must not be negative"))]
    pub grade: f64,
    #[validate(range(min = 0.0, message = "max_grade must not be negative"))]
    pub max_grade: Option<f64>,
    #[validate(length(min = 1, max = 200, message = "exam_name must be 1 to 200 characters"))]
    pub exam_name: String,
    pub exam_date: DateTime<Utc>,
}

/// Query filter shared by the list and average endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct GradeFilterParams {
    pub subject_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GradeAverageResponse {
    /// Mean of the matching grades, `null` when no grades exist.
    pub average: Option<f64>,
    pub count: i64,
}

/// Arithmetic mean rounded to 2 decimals; `None` for an empty set, never 0.
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    Some((mean * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_of_empty_set_is_absent() {
        assert_eq!(average(&[]), None);
    }

    #[test]
    fn test_average_rounds_to_two_decimals() {
        assert_eq!(average(&[6.0, 7.0, 9.0]), Some(7.33));
        assert_eq!(average(&[28.0, 30.0]), Some(29.0));
        assert_eq!(average(&[25.0]), Some(25.0));
    }

    #[test]
    fn test_average_is_not_zero_for_empty() {
        // An empty set reports absence of a value, not 0.
        assert_ne!(average(&[]), Some(0.0));
    }
}
