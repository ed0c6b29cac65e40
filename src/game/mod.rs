//! Game rules that sit between storage and the HTTP handlers.

pub mod pagination;
pub mod quiz;

pub use pagination::{paginate, Page, QUESTIONS_PER_PAGE};
pub use quiz::{next_question, QuizCategory};
