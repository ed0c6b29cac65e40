mod memory;
mod models;
pub mod queries;
mod sqlite;
pub mod transfer;

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseSettings;

pub use memory::InMemoryRepository;
pub use models::{Category, NewQuestion, Question, QuestionFilter};
pub use sqlite::SqliteRepository;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Storage used by the HTTP handlers.
///
/// Lookups that can miss return `Option`/`bool`; an `Err` always means the
/// storage itself failed.
#[async_trait]
pub trait TriviaRepository: Send + Sync {
    /// All categories ordered by id.
    async fn categories(&self) -> RepositoryResult<Vec<Category>>;

    async fn category(&self, id: i64) -> RepositoryResult<Option<Category>>;

    /// Questions matching `filter`, ordered by id.
    async fn questions(&self, filter: &QuestionFilter) -> RepositoryResult<Vec<Question>>;

    async fn question(&self, id: i64) -> RepositoryResult<Option<Question>>;

    /// Inserts the question and returns its id.
    async fn create_question(&self, question: NewQuestion) -> RepositoryResult<i64>;

    /// Returns `false` when there was nothing to delete.
    async fn delete_question(&self, id: i64) -> RepositoryResult<bool>;
}

pub async fn establish_connection(settings: &DatabaseSettings) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(settings.connect_options()?)
        .await
}

pub async fn run_migrations(pool: &SqlitePool) -> RepositoryResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
