use async_trait::async_trait;
use sqlx::SqlitePool;

use super::queries::{categories, questions};
use super::{
    Category, NewQuestion, Question, QuestionFilter, RepositoryResult, TriviaRepository,
};

/// [`TriviaRepository`] backed by a SQLite connection pool.
#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TriviaRepository for SqliteRepository {
    async fn categories(&self) -> RepositoryResult<Vec<Category>> {
        Ok(categories::get_all_categories(&self.pool).await?)
    }

    async fn category(&self, id: i64) -> RepositoryResult<Option<Category>> {
        Ok(categories::get_category(&self.pool, id).await?)
    }

    async fn questions(&self, filter: &QuestionFilter) -> RepositoryResult<Vec<Question>> {
        let result = match filter {
            QuestionFilter::All => questions::get_all_questions(&self.pool).await,
            QuestionFilter::Category(id) => {
                questions::get_questions_for_category(&self.pool, *id).await
            }
            // SQLite's lower() folds ASCII only, so matching happens on our side
            QuestionFilter::Search(_) => questions::get_all_questions(&self.pool)
                .await
                .map(|all| all.into_iter().filter(|q| filter.matches(q)).collect()),
        };
        Ok(result?)
    }

    async fn question(&self, id: i64) -> RepositoryResult<Option<Question>> {
        Ok(questions::get_question_by_id(&self.pool, id).await?)
    }

    async fn create_question(&self, question: NewQuestion) -> RepositoryResult<i64> {
        let id = questions::create_question(&self.pool, &question).await?;
        tracing::debug!(id, "Inserted question");
        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> RepositoryResult<bool> {
        Ok(questions::delete_question(&self.pool, id).await?)
    }
}
