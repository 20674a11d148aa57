//! Pagination controller.
//!
//! Owns the query state for one session: the active mode, the page cursor,
//! and the last known total. State transitions are synchronous and
//! side-effect free (`begin_*` / `complete`); the async methods drive a
//! [`RecipeSource`] through a full transition and are what callers normally
//! use.
//!
//! Requests are never cancelled, so a slow response can arrive after the
//! user has already moved on. Every issued request snapshots the state
//! generation; [`Pager::complete`] discards any result whose snapshot is
//! stale instead of letting it clobber the current page.

use super::RecipeSource;
use super::types::{PageLink, QueryMode, QueryState, ResultPage};
use crate::errors::CatalogError;
use log::debug;

/// Session-scoped pagination controller over a [`RecipeSource`].
pub struct Pager<S> {
    source: S,
    state: QueryState,
    generation: u64,
    current: ResultPage,
}

/// Snapshot of the query state at the moment a request was issued.
#[derive(Debug, Clone)]
pub struct QueryTicket {
    pub mode: QueryMode,
    pub offset: u64,
    pub limit: u64,
    generation: u64,
}

impl<S> Pager<S> {
    pub fn new(source: S, page_size: u64) -> Self {
        Self {
            source,
            state: QueryState {
                mode: QueryMode::default(),
                page: 1,
                page_size,
                total_count: 0,
            },
            generation: 0,
            current: ResultPage::default(),
        }
    }

    #[must_use]
    pub fn current(&self) -> &ResultPage {
        &self.current
    }

    /// The underlying source, e.g. to reuse the session's [`crate::Catalog`]
    /// for mutations between page fetches.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn into_source(self) -> S {
        self.source
    }

    #[must_use]
    pub fn mode(&self) -> &QueryMode {
        &self.state.mode
    }

    /// 1-based page index.
    #[must_use]
    pub fn current_page(&self) -> u64 {
        self.state.page
    }

    #[must_use]
    pub fn page_size(&self) -> u64 {
        self.state.page_size
    }

    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.state.total_count
    }

    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.state.total_pages()
    }

    /// Page-number controls for the current result set. The active page is
    /// disabled; zero matches yields no controls.
    #[must_use]
    pub fn page_links(&self) -> Vec<PageLink> {
        (1..=self.state.total_pages())
            .map(|number| PageLink { number, enabled: number != self.state.page })
            .collect()
    }

    /// Switch to structured-filter mode and reset to page 1.
    pub fn begin_navigate(&mut self, field: &str, value: &str) -> QueryTicket {
        self.state.mode = QueryMode::Filter { field: field.to_owned(), value: value.to_owned() };
        self.state.page = 1;
        self.issue()
    }

    /// Switch to free-text mode and reset to page 1. A term that is empty
    /// after trimming is rejected here: no request, no state change.
    pub fn begin_search(&mut self, term: &str) -> Option<QueryTicket> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }
        self.state.mode = QueryMode::Search { term: term.to_owned() };
        self.state.page = 1;
        Some(self.issue())
    }

    /// Reissue the active mode for another page.
    pub fn begin_go_to_page(&mut self, page: u64) -> QueryTicket {
        self.state.page = page.max(1);
        self.issue()
    }

    fn issue(&mut self) -> QueryTicket {
        self.generation += 1;
        QueryTicket {
            mode: self.state.mode.clone(),
            offset: self.state.offset(),
            limit: self.state.page_size,
            generation: self.generation,
        }
    }

    /// Install a completed page, unless the query state has moved on while
    /// the request was in flight. Returns whether the page was installed.
    pub fn complete(&mut self, ticket: &QueryTicket, page: ResultPage) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "discarding stale result (generation {} != {})",
                ticket.generation, self.generation
            );
            return false;
        }
        self.state.total_count = page.total_count;
        self.current = page;
        true
    }
}

impl<S: RecipeSource> Pager<S> {
    /// Navigate to an exact-equality filter (empty field = all recipes).
    pub async fn navigate(&mut self, field: &str, value: &str) -> Result<&ResultPage, CatalogError> {
        let ticket = self.begin_navigate(field, value);
        self.run(ticket).await
    }

    /// Full-text search. A blank term issues no request and returns `None`,
    /// leaving the displayed results untouched.
    pub async fn search(&mut self, term: &str) -> Result<Option<&ResultPage>, CatalogError> {
        match self.begin_search(term) {
            Some(ticket) => self.run(ticket).await.map(Some),
            None => Ok(None),
        }
    }

    /// Jump to a page of the current query.
    pub async fn go_to_page(&mut self, page: u64) -> Result<&ResultPage, CatalogError> {
        let ticket = self.begin_go_to_page(page);
        self.run(ticket).await
    }

    async fn run(&mut self, ticket: QueryTicket) -> Result<&ResultPage, CatalogError> {
        let page = match &ticket.mode {
            QueryMode::Filter { field, value } => {
                self.source.filtered_page(field, value, ticket.offset, ticket.limit).await?
            }
            QueryMode::Search { term } => {
                self.source.text_page(term, ticket.offset, ticket.limit).await?
            }
        };
        self.complete(&ticket, page);
        Ok(&self.current)
    }
}
