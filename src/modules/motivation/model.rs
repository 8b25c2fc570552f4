use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct MotivationalPhraseRequest {
    /// What the student is working on; defaults to "general study".
    #[validate(length(max = 200, message = "context must be at most 200 characters"))]
    pub context: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MotivationalPhraseResponse {
    pub phrase: String,
}
