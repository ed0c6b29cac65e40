use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::db::{Question, QuestionFilter};

/// Category a quiz draws from. The game client sends id `0` for "All".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Id(i64),
}

impl QuizCategory {
    pub fn from_id(id: i64) -> Self {
        if id == 0 {
            QuizCategory::All
        } else {
            QuizCategory::Id(id)
        }
    }

    pub fn filter(self) -> QuestionFilter {
        match self {
            QuizCategory::All => QuestionFilter::All,
            QuizCategory::Id(id) => QuestionFilter::Category(id),
        }
    }

    pub fn label(self) -> String {
        match self {
            QuizCategory::All => "all".to_owned(),
            QuizCategory::Id(id) => id.to_string(),
        }
    }
}

/// Picks a question uniformly among `eligible` questions not yet in `previous`.
///
/// `None` means every eligible question has been served.
pub fn next_question<'a, R>(
    eligible: &'a [Question],
    previous: &HashSet<i64>,
    rng: &mut R,
) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    let remaining: Vec<&Question> = eligible
        .iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();
    remaining.choose(rng).copied()
}
