#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tower::ServiceExt;

use trivia_api::db::{run_migrations, Category, InMemoryRepository, Question};
use trivia_api::server::app::{build_router, AppState};

pub const CATEGORIES: [(i64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// (id, category, question). Category 5 holds exactly 3, 7 and 9, and only 9 mentions "title".
const QUESTIONS: [(i64, i64, &str); 12] = [
    (1, 4, "Who invented Peanut Butter?"),
    (2, 3, "What is the largest lake in Africa?"),
    (3, 5, "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?"),
    (4, 4, "Which dung beetle was worshipped by the ancient Egyptians?"),
    (5, 3, "In which royal palace would you find the Hall of Mirrors?"),
    (6, 6, "Which is the only team to play in every soccer World Cup tournament?"),
    (7, 5, "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?"),
    (8, 1, "What is the heaviest organ in the human body?"),
    (9, 5, "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?"),
    (10, 2, "La Giaconda is better known as what?"),
    (11, 1, "Who discovered penicillin?"),
    (12, 2, "Which Dutch graphic artist, initials M C, was a creator of optical illusions?"),
];

pub fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|&(id, kind)| Category {
            id,
            kind: kind.to_owned(),
        })
        .collect()
}

pub fn questions() -> Vec<Question> {
    QUESTIONS
        .iter()
        .map(|&(id, category, text)| Question {
            id,
            question: text.to_owned(),
            answer: format!("answer {id}"),
            category,
            difficulty: id % 5 + 1,
        })
        .collect()
}

pub fn fixture_repo() -> InMemoryRepository {
    InMemoryRepository::with_data(categories(), questions())
}

pub fn app(repo: InMemoryRepository) -> Router {
    build_router(AppState::new(repo))
}

pub fn fixture_app() -> Router {
    app(fixture_repo())
}

/// In-memory SQLite database with migrations applied. One connection, kept
/// open for the life of the pool, so every query sees the same database.
pub async fn sqlite_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, method, uri, body).await;
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

pub fn ids(questions: &Value) -> Vec<i64> {
    questions
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode) {
    assert_eq!(status, expected, "body: {body}");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], expected.as_u16());
    assert!(body["message"].is_string());
}
