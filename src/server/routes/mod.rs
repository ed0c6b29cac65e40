mod categories;
mod questions;
mod quizzes;

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::db::Category;
use crate::game::Page;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default)]
    page: Page,
}

/// Categories as the `{"<id>": "<type>"}` map the game client expects.
fn categories_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}
