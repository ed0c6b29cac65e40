use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::{categories_map, PageQuery};
use crate::{
    db::{Question, QuestionFilter},
    game::paginate,
    server::{
        app::{AppState, Repo},
        error::{ApiError, ApiResponse},
        extract::{ApiPath, ApiQuery},
    },
};

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
    total_categories: usize,
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: String,
}

async fn get_categories(State(repo): State<Repo>) -> ApiResponse<Json<CategoriesResponse>> {
    let categories = repo.categories().await?;
    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories: categories_map(&categories),
    }))
}

async fn get_category_questions(
    State(repo): State<Repo>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResponse<Json<CategoryQuestionsResponse>> {
    let category = repo
        .category(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("category {id} not found")))?;
    let questions = repo.questions(&QuestionFilter::Category(id)).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: paginate(&questions, query.page).to_vec(),
        total_questions: questions.len(),
        current_category: category.kind,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(get_category_questions))
        .with_state(state)
}
