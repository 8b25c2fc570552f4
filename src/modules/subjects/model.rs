use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Default accent color shown for a subject in the client (blue).
pub const DEFAULT_SUBJECT_COLOR: &str = "#3B82F6";

/// A subject tracked by a user.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct Subject {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub color: String,
    pub target_hours_per_week: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSubjectRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters"))]
    pub name: String,
    pub color: Option<String>,
    #[validate(range(min = 0, max = 168, message = "target_hours_per_week must be 0 to 168"))]
    pub target_hours_per_week: Option<i32>,
}

/// All fields optional; only provided fields are updated.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSubjectRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters"))]
    pub name: Option<String>,
    pub color: Option<String>,
    #[validate(range(min = 0, max = 168, message = "target_hours_per_week must be 0 to 168"))]
    pub target_hours_per_week: Option<i32>,
}

/// Accepts `#RGB` and `#RRGGBB` hex notations.
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}
