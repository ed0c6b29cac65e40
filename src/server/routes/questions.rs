use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;

use super::{categories_map, PageQuery};
use crate::{
    db::{NewQuestion, Question, QuestionFilter},
    game::{paginate, Page},
    server::{
        app::{AppState, Repo},
        deserializers::deserialize_non_blank,
        error::{ApiError, ApiResponse},
        extract::{ApiJson, ApiPath, ApiQuery},
    },
    telemetry::QUESTION_MUTATIONS_CNTR,
};

/// Body of `POST /questions`: either a new question or a search request.
#[derive(Deserialize, Default)]
struct QuestionsBody {
    #[serde(rename = "searchTerm", default)]
    search_term: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_blank")]
    question: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_blank")]
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    difficulty: Option<i64>,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm", default)]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, String>,
    current_category: String,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct Created {
    success: bool,
    created: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
    deleted: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

impl QuestionsBody {
    fn into_new_question(self) -> Result<NewQuestion, ApiError> {
        let missing = |field: &str| ApiError::Unprocessable(format!("{field} is required"));
        Ok(NewQuestion {
            question: self.question.ok_or_else(|| missing("question"))?,
            answer: self.answer.ok_or_else(|| missing("answer"))?,
            category: self.category.ok_or_else(|| missing("category"))?,
            difficulty: self.difficulty.ok_or_else(|| missing("difficulty"))?,
        })
    }
}

async fn get_questions(
    State(repo): State<Repo>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResponse<Json<QuestionsPage>> {
    let categories = repo.categories().await?;
    let current_category = categories
        .first()
        .map(|c| c.kind.clone())
        .ok_or_else(|| ApiError::NotFound("no categories exist".to_owned()))?;
    let questions = repo.questions(&QuestionFilter::All).await?;

    Ok(Json(QuestionsPage {
        success: true,
        questions: paginate(&questions, query.page).to_vec(),
        total_questions: questions.len(),
        categories: categories_map(&categories),
        current_category,
    }))
}

async fn create_or_search(
    State(repo): State<Repo>,
    ApiQuery(query): ApiQuery<PageQuery>,
    ApiJson(body): ApiJson<QuestionsBody>,
) -> ApiResponse<Response> {
    if let Some(term) = body.search_term.as_deref() {
        return Ok(search(&repo, term, query.page).await?.into_response());
    }

    let new_question = body.into_new_question()?;
    let id = repo.create_question(new_question).await?;
    QUESTION_MUTATIONS_CNTR.with_label_values(&["create"]).inc();
    tracing::info!(id, "Created question");

    let questions = repo.questions(&QuestionFilter::All).await?;
    let created = Created {
        success: true,
        created: id,
        questions: paginate(&questions, query.page).to_vec(),
        total_questions: questions.len(),
    };
    Ok((StatusCode::CREATED, Json(created)).into_response())
}

async fn search_questions(
    State(repo): State<Repo>,
    ApiQuery(query): ApiQuery<PageQuery>,
    ApiJson(body): ApiJson<SearchBody>,
) -> ApiResponse<Json<SearchResults>> {
    let term = body.search_term.unwrap_or_default();
    search(&repo, &term, query.page).await
}

async fn search(repo: &Repo, term: &str, page: Page) -> ApiResponse<Json<SearchResults>> {
    if term.trim().is_empty() {
        return Err(ApiError::Unprocessable(
            "searchTerm must not be empty".to_owned(),
        ));
    }
    let questions = repo
        .questions(&QuestionFilter::Search(term.to_owned()))
        .await?;

    Ok(Json(SearchResults {
        success: true,
        questions: paginate(&questions, page).to_vec(),
        total_questions: questions.len(),
    }))
}

async fn delete_question(
    State(repo): State<Repo>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResponse<Json<Deleted>> {
    if !repo.delete_question(id).await? {
        return Err(ApiError::NotFound(format!("question {id} not found")));
    }
    QUESTION_MUTATIONS_CNTR.with_label_values(&["delete"]).inc();
    tracing::info!(id, "Deleted question");

    let questions = repo.questions(&QuestionFilter::All).await?;
    Ok(Json(Deleted {
        success: true,
        deleted: id,
        questions: paginate(&questions, query.page).to_vec(),
        total_questions: questions.len(),
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(get_questions).post(create_or_search))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
