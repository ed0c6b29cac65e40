mod common;

use axum::http::StatusCode;
use serde_json::json;
use trivia_api::db::{
    InMemoryRepository, NewQuestion, QuestionFilter, SqliteRepository, TriviaRepository,
};
use trivia_api::server::app::{build_router, AppState};

use common::{get, ids, post, sqlite_pool};

fn new_question(text: &str, category: i64) -> NewQuestion {
    NewQuestion {
        question: text.to_owned(),
        answer: "answer".to_owned(),
        category,
        difficulty: 3,
    }
}

#[tokio::test]
async fn migrations_seed_categories() {
    let repo = SqliteRepository::new(sqlite_pool().await);

    let categories = repo.categories().await.unwrap();

    let kinds: Vec<&str> = categories.iter().map(|c| c.kind.as_str()).collect();
    assert_eq!(
        kinds,
        ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
    );
    assert_eq!(repo.category(4).await.unwrap().unwrap().kind, "History");
    assert!(repo.category(40).await.unwrap().is_none());
}

#[tokio::test]
async fn create_filter_and_delete() {
    let repo = SqliteRepository::new(sqlite_pool().await);

    let first = repo
        .create_question(new_question("What is the TITLE of the film?", 5))
        .await
        .unwrap();
    let second = repo
        .create_question(new_question("Who wrote it?", 2))
        .await
        .unwrap();
    assert!(second > first);

    let all = repo.questions(&QuestionFilter::All).await.unwrap();
    assert_eq!(all.iter().map(|q| q.id).collect::<Vec<_>>(), [first, second]);

    let art = repo.questions(&QuestionFilter::Category(2)).await.unwrap();
    assert_eq!(art.len(), 1);
    assert_eq!(art[0].question, "Who wrote it?");
    assert_eq!(art[0].difficulty, 3);

    let found = repo
        .questions(&QuestionFilter::Search("title".to_owned()))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, first);

    assert!(repo.delete_question(first).await.unwrap());
    assert!(!repo.delete_question(first).await.unwrap());
    assert!(repo.question(first).await.unwrap().is_none());
    assert!(repo.question(second).await.unwrap().is_some());
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
    let repo = SqliteRepository::new(sqlite_pool().await);
    repo.create_question(new_question("Is 100% of it water?", 1))
        .await
        .unwrap();
    repo.create_question(new_question("Is 100 of it water?", 1))
        .await
        .unwrap();

    let found = repo
        .questions(&QuestionFilter::Search("100%".to_owned()))
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].question, "Is 100% of it water?");
}

#[tokio::test]
async fn search_folds_non_ascii_case_like_the_memory_repository() {
    let sqlite = SqliteRepository::new(sqlite_pool().await);
    let memory = InMemoryRepository::new();
    let repos: [&dyn TriviaRepository; 2] = [&sqlite, &memory];

    for repo in repos {
        repo.create_question(new_question("Who founded the ÉCOLE normale?", 4))
            .await
            .unwrap();
        repo.create_question(new_question("Who founded the Sorbonne?", 4))
            .await
            .unwrap();

        let found = repo
            .questions(&QuestionFilter::Search("école".to_owned()))
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].question, "Who founded the ÉCOLE normale?");
    }
}

#[tokio::test]
async fn http_round_trip_against_sqlite() {
    let app = build_router(AppState::new(SqliteRepository::new(sqlite_pool().await)));

    let (status, body) = post(
        &app,
        "/questions",
        json!({"question": "Which planet is red?", "answer": "Mars", "category": 1, "difficulty": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["created"].as_i64().unwrap();

    let (status, body) = get(&app, "/categories/1/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["questions"]), [id]);
    assert_eq!(body["current_category"], "Science");

    let (status, body) = post(
        &app,
        "/quizzes",
        json!({"previous_questions": [], "quiz_category": {"id": 1, "type": "Science"}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["answer"], "Mars");
}
