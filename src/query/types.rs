use crate::recipe::Recipe;
use serde::{Deserialize, Serialize};

/// Which of the two mutually exclusive query modes is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryMode {
    /// Exact-equality match on one field. An empty field name matches all
    /// documents.
    Filter { field: String, value: String },
    /// Full-text search across all fields.
    Search { term: String },
}

impl Default for QueryMode {
    fn default() -> Self {
        Self::Filter { field: String::new(), value: String::new() }
    }
}

/// One page of results plus the total number of matches across all pages.
/// Fully replaced on every query-state change, never patched in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultPage {
    pub recipes: Vec<Recipe>,
    /// Total matches for the query, independent of the pagination window.
    pub total_count: u64,
}

/// Pagination cursor over the active mode. Pages are 1-based.
#[derive(Debug, Clone)]
pub struct QueryState {
    pub mode: QueryMode,
    pub page: u64,
    pub page_size: u64,
    pub total_count: u64,
}

impl QueryState {
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.page_size * (self.page - 1)
    }

    #[must_use]
    pub fn total_pages(&self) -> u64 {
        total_pages(self.total_count, self.page_size)
    }
}

/// ceil(total / page size); zero matches means zero pages.
#[must_use]
pub fn total_pages(total_count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// One page-number control. The active page renders non-interactive; with
/// zero matches no controls render at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub number: u64,
    pub enabled: bool,
}
