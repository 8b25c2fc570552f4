mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    create_test_subject, create_test_user, generate_unique_email, generate_unique_username,
    test_state,
};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use studia::router::init_router;
use tower::ServiceExt;

async fn setup_test_app(pool: PgPool) -> axum::Router {
    init_router(test_state(pool))
}

async fn get_auth_token(app: &axum::Router, username: &str, password: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "username": username,
                "password": password
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    body["access_token"].as_str().unwrap().to_string()
}

async fn seeded_user_token(pool: &PgPool, app: &axum::Router) -> (uuid::Uuid, String) {
    let mut tx = pool.begin().await.unwrap();
    let username = generate_unique_username();
    let password = "testpass123";
    let user = create_test_user(&mut tx, &username, &generate_unique_email(), password).await;
    tx.commit().await.unwrap();

    let token = get_auth_token(app, &username, password).await;
    (user.id, token)
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_subject_with_default_color(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;
    let (_, token) = seeded_user_token(&pool, &app).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/subjects")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Analisi 1"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body["name"], "Analisi 1");
    assert_eq!(body["color"], "#3B82F6");
    assert_eq!(body["target_hours_per_week"], 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_subject_rejects_bad_color(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;
    let (_, token) = seeded_user_token(&pool, &app).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/subjects")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Fisica",
                "color": "blue"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_subjects_only_own(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;
    let (user_id, token) = seeded_user_token(&pool, &app).await;
    let (other_id, _) = seeded_user_token(&pool, &app).await;

    let mut tx = pool.begin().await.unwrap();
    create_test_subject(&mut tx, user_id, "Mia").await;
    create_test_subject(&mut tx, other_id, "Altrui").await;
    tx.commit().await.unwrap();

    let request = Request::builder()
        .method("GET")
        .uri("/api/subjects")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Mia"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_subject_of_other_user_is_404(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;
    let (_, token) = seeded_user_token(&pool, &app).await;
    let (other_id, _) = seeded_user_token(&pool, &app).await;

    let mut tx = pool.begin().await.unwrap();
    let foreign = create_test_subject(&mut tx, other_id, "Altrui").await;
    tx.commit().await.unwrap();

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/subjects/{}", foreign.id))
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_subject(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;
    let (user_id, token) = seeded_user_token(&pool, &app).await;

    let mut tx = pool.begin().await.unwrap();
    let subject = create_test_subject(&mut tx, user_id, "Chimica").await;
    tx.commit().await.unwrap();

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/subjects/{}", subject.id))
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Chimica organica",
                "target_hours_per_week": 6
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body["name"], "Chimica organica");
    assert_eq!(body["target_hours_per_week"], 6);
    // untouched field keeps its value
    assert_eq!(body["color"], "#3B82F6");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_subject_then_gone(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;
    let (user_id, token) = seeded_user_token(&pool, &app).await;

    let mut tx = pool.begin().await.unwrap();
    let subject = create_test_subject(&mut tx, user_id, "Storia").await;
    tx.commit().await.unwrap();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/subjects/{}", subject.id))
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/subjects/{}", subject.id))
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_subjects_require_token(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/subjects")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
