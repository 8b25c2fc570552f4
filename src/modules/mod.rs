pub mod achievements;
pub mod auth;
pub mod dashboard;
pub mod grades;
pub mod motivation;
pub mod study_sessions;
pub mod subjects;
