pub mod pager;
pub mod types;

pub use pager::{Pager, QueryTicket};
pub use types::{PageLink, QueryMode, QueryState, ResultPage, total_pages};

use crate::errors::CatalogError;

/// Anything that can serve pages of recipes for the two query modes.
///
/// [`crate::Catalog`] is the remote implementation; tests drive the pager
/// with in-memory fakes.
pub trait RecipeSource {
    /// One page of recipes matching an exact-equality filter, plus the
    /// total match count. An empty field name matches all documents.
    fn filtered_page(
        &self,
        field: &str,
        value: &str,
        offset: u64,
        limit: u64,
    ) -> impl Future<Output = Result<ResultPage, CatalogError>>;

    /// One page of full-text search results, plus the total match count.
    fn text_page(
        &self,
        term: &str,
        offset: u64,
        limit: u64,
    ) -> impl Future<Output = Result<ResultPage, CatalogError>>;
}
