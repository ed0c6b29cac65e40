use std::num::NonZeroUsize;

use serde::Deserialize;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// One-indexed page number.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct Page(NonZeroUsize);

impl Page {
    pub const FIRST: Page = Page(NonZeroUsize::MIN);

    pub fn new(number: usize) -> Option<Self> {
        NonZeroUsize::new(number).map(Page)
    }

    pub fn number(self) -> usize {
        self.0.get()
    }

    /// Offset of the first record on this page. Saturates for absurd page numbers.
    fn offset(self, per_page: usize) -> usize {
        (self.number() - 1).saturating_mul(per_page)
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::FIRST
    }
}

/// Returns the records of `page`, or an empty slice when the page lies past the end.
pub fn paginate<T>(records: &[T], page: Page) -> &[T] {
    paginate_by(records, page, QUESTIONS_PER_PAGE)
}

fn paginate_by<T>(records: &[T], page: Page, per_page: usize) -> &[T] {
    let start = page.offset(per_page).min(records.len());
    let end = start.saturating_add(per_page).min(records.len());
    &records[start..end]
}
