use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, sqlx::FromRow, Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

#[derive(Serialize, Deserialize, sqlx::FromRow, Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// A question that has passed validation but has no id yet.
#[derive(Clone, Debug)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Which questions a listing should return. Results are always ordered by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionFilter {
    All,
    Category(i64),
    /// Case-insensitive substring match on the question text.
    Search(String),
}

impl QuestionFilter {
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            QuestionFilter::All => true,
            QuestionFilter::Category(id) => question.category == *id,
            QuestionFilter::Search(term) => question
                .question
                .to_lowercase()
                .contains(&term.to_lowercase()),
        }
    }
}

impl NewQuestion {
    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
