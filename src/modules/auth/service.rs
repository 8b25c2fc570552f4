use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{AuthResponse, LoginRequest, RegisterRequest, User, UserProfile};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn register_user(
        db: &PgPool,
        dto: RegisterRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let taken: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM users WHERE username = $1 OR email = $2")
                .bind(&dto.username)
                .bind(&dto.email)
                .fetch_optional(db)
                .await
                .map_err(AppError::database)?;

        if taken.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Username or email already registered"
            )));
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password, full_name)
             VALUES ($1, $2, $3, $4)
             RETURNING id, username, email, full_name, avatar, credits, total_study_minutes, created_at",
        )
        .bind(&dto.username)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(&dto.full_name)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                // Concurrent registration can still hit the unique index.
                if db_err.is_unique_violation() {
                    return AppError::bad_request(anyhow::anyhow!(
                        "Username or email already registered"
                    ));
                }
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        let access_token = create_access_token(user.id, &user.username, jwt_config)?;

        Ok(AuthResponse {
            access_token,
            token_type: "bearer".to_string(),
            user: UserProfile::from(user),
        })
    }

    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct PasswordRow {
            id: Uuid,
            password: String,
        }

        let row = sqlx::query_as::<_, PasswordRow>(
            "SELECT id, password FROM users WHERE username = $1",
        )
        .bind(&dto.username)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::unauthorized("Invalid username or password".to_string()))?;

        let is_valid = verify_password(&dto.password, &row.password)?;

        if !is_valid {
            return Err(AppError::unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        let user = Self::get_user(db, row.id).await?;
        let access_token = create_access_token(user.id, &user.username, jwt_config)?;

        Ok(AuthResponse {
            access_token,
            token_type: "bearer".to_string(),
            user: UserProfile::from(user),
        })
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, user_id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, email, full_name, avatar, credits, total_study_minutes, created_at
             FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::unauthorized("User not found".to_string()))
    }
}
