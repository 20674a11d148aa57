pub mod config;
pub mod credentials;
pub mod decode;
pub mod errors;
pub mod logger;
pub mod mutation;
pub mod pipeline;
pub mod query;
pub mod recipe;
pub mod transport;

use crate::config::Config;
use crate::credentials::Credentials;
use crate::errors::CatalogError;
use crate::query::{RecipeSource, ResultPage};
use crate::recipe::Recipe;
use crate::transport::DataApiClient;

/// Distinct values for the three navigation facets, fetched together for
/// tree construction.
#[derive(Debug, Clone, Default)]
pub struct NavigationFacets {
    pub categories: Vec<String>,
    pub main_ingredients: Vec<String>,
    pub countries: Vec<String>,
}

/// The main catalogue handle: one per authenticated session.
///
/// Composes the pipeline builders, the transport, and the response
/// decoders behind the operations the UI layer consumes. Paged queries
/// live on the [`RecipeSource`] impl so a [`query::Pager`] can drive a
/// `Catalog` directly.
pub struct Catalog {
    client: DataApiClient,
}

impl Catalog {
    /// Session against the default endpoint with default timeouts.
    pub fn new(credentials: Credentials) -> Result<Self, CatalogError> {
        Ok(Self { client: DataApiClient::new(credentials)? })
    }

    pub fn with_config(credentials: Credentials, config: &Config) -> Result<Self, CatalogError> {
        Ok(Self {
            client: DataApiClient::with_base_url(
                credentials,
                &config.base_url,
                config.timeout_secs,
            )?,
        })
    }

    /// All distinct values of a field present in the collection.
    pub async fn distinct_values(&self, field: &str) -> Result<Vec<String>, CatalogError> {
        let body = self.client.aggregate(&pipeline::distinct_values(field)).await?;
        decode::distinct_values(&body)
    }

    /// The three facet lists the navigation tree is built from.
    pub async fn navigation_facets(&self) -> Result<NavigationFacets, CatalogError> {
        Ok(NavigationFacets {
            categories: self.distinct_values("category").await?,
            main_ingredients: self.distinct_values("mainingredient").await?,
            countries: self.distinct_values("country").await?,
        })
    }

    /// Insert a new recipe (no id) and return the backend-assigned id.
    pub async fn insert(&self, recipe: &Recipe) -> Result<String, CatalogError> {
        mutation::insert(&self.client, recipe).await
    }

    /// Replace the fields of the recipe stored under `id`.
    pub async fn update(&self, recipe: &Recipe, id: &str) -> Result<(), CatalogError> {
        mutation::update(&self.client, recipe, id).await
    }
}

impl RecipeSource for Catalog {
    async fn filtered_page(
        &self,
        field: &str,
        value: &str,
        offset: u64,
        limit: u64,
    ) -> Result<ResultPage, CatalogError> {
        let body =
            self.client.aggregate(&pipeline::filtered_page(field, value, offset, limit)).await?;
        decode::filtered_page(&body)
    }

    async fn text_page(
        &self,
        term: &str,
        offset: u64,
        limit: u64,
    ) -> Result<ResultPage, CatalogError> {
        let body = self.client.aggregate(&pipeline::text_search(term, offset, limit)).await?;
        decode::search_page(&body)
    }
}
