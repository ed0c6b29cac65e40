use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{
    Category, NewQuestion, Question, QuestionFilter, RepositoryResult, TriviaRepository,
};

/// [`TriviaRepository`] kept entirely in memory.
///
/// Ids are assigned like an autoincrement column: one past the highest id
/// ever stored, so deleted ids are never reused.
#[derive(Default)]
pub struct InMemoryRepository {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    last_question_id: i64,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository holding exactly the given records.
    pub fn with_data(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let last_question_id = questions.iter().map(|q| q.id).max().unwrap_or(0);
        let state = State {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            questions: questions.into_iter().map(|q| (q.id, q)).collect(),
            last_question_id,
        };
        Self {
            state: RwLock::new(state),
        }
    }
}

#[async_trait]
impl TriviaRepository for InMemoryRepository {
    async fn categories(&self) -> RepositoryResult<Vec<Category>> {
        Ok(self.state.read().await.categories.values().cloned().collect())
    }

    async fn category(&self, id: i64) -> RepositoryResult<Option<Category>> {
        Ok(self.state.read().await.categories.get(&id).cloned())
    }

    async fn questions(&self, filter: &QuestionFilter) -> RepositoryResult<Vec<Question>> {
        Ok(self
            .state
            .read()
            .await
            .questions
            .values()
            .filter(|q| filter.matches(q))
            .cloned()
            .collect())
    }

    async fn question(&self, id: i64) -> RepositoryResult<Option<Question>> {
        Ok(self.state.read().await.questions.get(&id).cloned())
    }

    async fn create_question(&self, question: NewQuestion) -> RepositoryResult<i64> {
        let mut state = self.state.write().await;
        state.last_question_id += 1;
        let id = state.last_question_id;
        state.questions.insert(id, question.with_id(id));
        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> RepositoryResult<bool> {
        Ok(self.state.write().await.questions.remove(&id).is_some())
    }
}
