use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_governor::GovernorLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::achievements::router::init_achievements_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::dashboard::router::init_dashboard_router;
use crate::modules::grades::router::init_grades_router;
use crate::modules::motivation::router::init_motivation_router;
use crate::modules::study_sessions::router::init_study_sessions_router;
use crate::modules::subjects::router::init_subjects_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    // Login/register get a stricter limiter keyed on client IP.
    let auth_router = if state.rate_limit_config.enabled {
        init_auth_router().layer(GovernorLayer::new(Arc::new(
            state.rate_limit_config.auth_governor_config(),
        )))
    } else {
        init_auth_router()
    };

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", auth_router)
                .nest("/subjects", init_subjects_router())
                .nest("/grades", init_grades_router())
                .nest("/study-sessions", init_study_sessions_router())
                .nest("/motivational-phrase", init_motivation_router())
                .nest("/dashboard", init_dashboard_router())
                .nest("/achievements", init_achievements_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
