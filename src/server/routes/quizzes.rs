use std::collections::HashSet;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;

use crate::{
    db::Question,
    game::{next_question, QuizCategory},
    server::{
        app::{AppState, Repo},
        error::{ApiError, ApiResponse},
        extract::ApiJson,
    },
    telemetry::QUIZ_QUESTIONS_CNTR,
};

#[derive(Deserialize)]
struct QuizBody {
    previous_questions: Option<Vec<i64>>,
    quiz_category: Option<QuizCategoryBody>,
}

// `type` is sent along with the id but only the id matters
#[derive(Deserialize)]
struct QuizCategoryBody {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    id: Option<i64>,
}

#[derive(Serialize)]
struct QuizQuestion {
    success: bool,
    question: Option<Question>,
}

impl QuizBody {
    fn validate(self) -> Result<(HashSet<i64>, QuizCategory), ApiError> {
        let previous = self.previous_questions.ok_or_else(|| {
            ApiError::BadRequest("previous_questions is required".to_owned())
        })?;
        let category = self
            .quiz_category
            .and_then(|c| c.id)
            .ok_or_else(|| ApiError::BadRequest("quiz_category.id is required".to_owned()))?;
        Ok((previous.into_iter().collect(), QuizCategory::from_id(category)))
    }
}

async fn play_quiz(
    State(repo): State<Repo>,
    ApiJson(body): ApiJson<QuizBody>,
) -> ApiResponse<Json<QuizQuestion>> {
    let (previous, category) = body.validate()?;
    if let QuizCategory::Id(id) = category {
        if repo.category(id).await?.is_none() {
            return Err(ApiError::NotFound(format!("category {id} not found")));
        }
    }

    let eligible = repo.questions(&category.filter()).await?;
    let question = {
        let mut rng = rand::thread_rng();
        next_question(&eligible, &previous, &mut rng).cloned()
    };

    match &question {
        Some(q) => {
            QUIZ_QUESTIONS_CNTR
                .with_label_values(&[category.label().as_str()])
                .inc();
            tracing::debug!(id = q.id, "Serving quiz question");
        }
        None => tracing::debug!(
            served = previous.len(),
            "Quiz exhausted its {} eligible questions",
            eligible.len()
        ),
    }

    Ok(Json(QuizQuestion {
        success: true,
        question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
