//! Parsers for the three response envelope shapes.
//!
//! Every aggregation response arrives as `{"documents": [...]}`; what the
//! documents look like depends on the pipeline that produced them. Each
//! shape gets its own serde model; there is no shape-sniffing. "No matching
//! documents" is a valid empty result, never an error; a body that does not
//! match the expected shape is a [`CatalogError::Decode`].

use crate::errors::CatalogError;
use crate::query::ResultPage;
use crate::recipe::Recipe;
use serde::Deserialize;

#[derive(Deserialize)]
struct DistinctEnvelope {
    #[serde(default)]
    documents: Vec<DistinctRow>,
}

#[derive(Deserialize)]
struct DistinctRow {
    // null when some documents lack the field; flattened to "" to keep
    // response order intact.
    #[serde(rename = "_id", default)]
    value: Option<String>,
}

#[derive(Deserialize)]
struct FacetEnvelope {
    #[serde(default)]
    documents: Vec<FacetResult>,
}

#[derive(Deserialize)]
struct FacetResult {
    #[serde(default)]
    recipes: Vec<Recipe>,
    #[serde(rename = "totalCount", default)]
    total_count: Vec<CountRow>,
}

#[derive(Deserialize)]
struct CountRow {
    #[serde(rename = "totalCount", default)]
    total_count: u64,
}

#[derive(Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    documents: Vec<SearchResult>,
}

#[derive(Deserialize)]
struct SearchResult {
    #[serde(default)]
    docs: Vec<Recipe>,
    #[serde(default)]
    meta: Vec<SearchMeta>,
}

#[derive(Deserialize, Default)]
struct SearchMeta {
    #[serde(default)]
    count: SearchCount,
}

#[derive(Deserialize, Default)]
struct SearchCount {
    #[serde(default)]
    total: u64,
}

/// Flatten a distinct-values response to one string per record, in
/// response order.
pub fn distinct_values(body: &str) -> Result<Vec<String>, CatalogError> {
    let envelope: DistinctEnvelope = serde_json::from_str(body)?;
    Ok(envelope.documents.into_iter().map(|row| row.value.unwrap_or_default()).collect())
}

/// Decode a filtered-page response: one facet result holding the page and
/// a single-element count record.
///
/// An empty page reports total 0 regardless of the count branch: when the
/// filter matched nothing, the `$count` stage never emitted a record. A
/// missing or malformed-empty count branch also degrades to 0 rather than
/// discarding a successfully decoded page.
pub fn filtered_page(body: &str) -> Result<ResultPage, CatalogError> {
    let envelope: FacetEnvelope = serde_json::from_str(body)?;
    let result = envelope
        .documents
        .into_iter()
        .next()
        .ok_or_else(|| CatalogError::Decode("aggregation returned no facet result".into()))?;
    if result.recipes.is_empty() {
        return Ok(ResultPage::default());
    }
    let total_count = result.total_count.first().map_or(0, |row| row.total_count);
    Ok(ResultPage { recipes: result.recipes, total_count })
}

/// Decode a text-search response: one facet result holding the page and a
/// single-element `$$SEARCH_META` record with the total match count.
pub fn search_page(body: &str) -> Result<ResultPage, CatalogError> {
    let envelope: SearchEnvelope = serde_json::from_str(body)?;
    let result = envelope
        .documents
        .into_iter()
        .next()
        .ok_or_else(|| CatalogError::Decode("search returned no facet result".into()))?;
    if result.docs.is_empty() {
        return Ok(ResultPage::default());
    }
    let total_count = result.meta.first().map_or(0, |meta| meta.count.total);
    Ok(ResultPage { recipes: result.docs, total_count })
}
