use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::achievements::model::{Achievement, AchievementsResponse};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};
use crate::modules::dashboard::model::{DashboardData, RecentSession};
use crate::modules::grades::model::{CreateGradeRequest, Grade, GradeAverageResponse};
use crate::modules::motivation::model::{MotivationalPhraseRequest, MotivationalPhraseResponse};
use crate::modules::study_sessions::model::{CreateStudySessionRequest, StudySession};
use crate::modules::subjects::model::{CreateSubjectRequest, Subject, UpdateSubjectRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::get_profile,
        crate::modules::subjects::controller::create_subject,
        crate::modules::subjects::controller::get_subjects,
        crate::modules::subjects::controller::get_subject,
        crate::modules::subjects::controller::update_subject,
        crate::modules::subjects::controller::delete_subject,
        crate::modules::grades::controller::create_grade,
        crate::modules::grades::controller::get_grades,
        crate::modules::grades::controller::get_average,
        crate::modules::grades::controller::delete_grade,
        crate::modules::study_sessions::controller::create_study_session,
        crate::modules::study_sessions::controller::get_study_sessions,
        crate::modules::motivation::controller::get_motivational_phrase,
        crate::modules::dashboard::controller::get_dashboard,
        crate::modules::achievements::controller::get_achievements,
    ),
    components(
        schemas(
            ErrorResponse,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            UserProfile,
            Subject,
            CreateSubjectRequest,
            UpdateSubjectRequest,
            Grade,
            CreateGradeRequest,
            GradeAverageResponse,
            StudySession,
            CreateStudySessionRequest,
            MotivationalPhraseRequest,
            MotivationalPhraseResponse,
            DashboardData,
            RecentSession,
            Achievement,
            AchievementsResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and profile"),
        (name = "Subjects", description = "Subject tracking"),
        (name = "Grades", description = "Exam grades and averages"),
        (name = "Study Sessions", description = "Focus-mode sessions and credit rewards"),
        (name = "Motivation", description = "AI-generated motivational phrases"),
        (name = "Dashboard", description = "Aggregated study activity"),
        (name = "Achievements", description = "Derived achievements and levels")
    ),
    info(
        title = "Studia API",
        version = "0.1.0",
        description = "REST API for student study management: subjects, grades, focus sessions and credit rewards.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
