use sqlx::{Postgres, Transaction};
use studia::config::ai::AiConfig;
use studia::config::cors::CorsConfig;
use studia::config::jwt::JwtConfig;
use studia::config::rate_limit::RateLimitConfig;
use studia::modules::motivation::client::MotivationClient;
use studia::state::AppState;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[allow(dead_code)]
pub async fn create_test_user(
    tx: &mut Transaction<'_, Postgres>,
    username: &str,
    email: &str,
    password: &str,
) -> TestUser {
    let hashed = studia::utils::password::hash_password(password).unwrap();

    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO users (username, email, password) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(username)
    .bind(email)
    .bind(&hashed)
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    TestUser {
        id,
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[allow(dead_code)]
pub struct TestSubject {
    pub id: Uuid,
    pub name: String,
}

#[allow(dead_code)]
pub async fn create_test_subject(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    name: &str,
) -> TestSubject {
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO subjects (user_id, name) VALUES ($1, $2) RETURNING id",
    )
    .bind(user_id)
    .bind(name)
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    TestSubject {
        id,
        name: name.to_string(),
    }
}

#[allow(dead_code)]
pub fn generate_unique_username() -> String {
    // short enough for the register endpoint's 32-character limit
    let id = Uuid::new_v4().simple().to_string();
    format!("user{}", &id[..12])
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// AI client that never touches the network: no key configured, so every
/// phrase comes from the built-in fallback list.
pub fn test_motivation_client() -> MotivationClient {
    MotivationClient::new(AiConfig {
        api_key: None,
        base_url: "http://127.0.0.1:9".to_string(),
        model: "test-model".to_string(),
        request_timeout_secs: 1,
    })
    .unwrap()
}

/// App state for router tests. Rate limiting is off; the limiter has its
/// own integration test that enables it explicitly.
pub fn test_state(pool: sqlx::PgPool) -> AppState {
    dotenvy::dotenv().ok();
    AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        rate_limit_config: RateLimitConfig {
            enabled: false,
            ..RateLimitConfig::default()
        },
        motivation: test_motivation_client(),
    }
}
