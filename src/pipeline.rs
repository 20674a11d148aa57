//! Aggregation pipelines for the three query intents.
//!
//! Stages are plain `bson::Document`s so the transport can serialize them
//! straight into the Data API `pipeline` field.

use bson::{Document, doc};

/// Group every document by the field's value; the `_id`s of the output
/// stream are the distinct values. Output order is backend-determined.
#[must_use]
pub fn distinct_values(field: &str) -> Vec<Document> {
    vec![doc! { "$group": { "_id": format!("${field}") } }]
}

/// Page and total count in one round trip: a `$facet` with a page branch
/// (match/skip/limit) and a count branch (match/count), both over the same
/// filter.
#[must_use]
pub fn filtered_page(field: &str, value: &str, offset: u64, limit: u64) -> Vec<Document> {
    let match_stage = doc! { "$match": equality_filter(field, value) };

    let page_branch = vec![
        match_stage.clone(),
        doc! { "$skip": offset as i64 },
        doc! { "$limit": limit as i64 },
    ];
    let count_branch = vec![match_stage, doc! { "$count": "totalCount" }];

    vec![doc! { "$facet": { "recipes": page_branch, "totalCount": count_branch } }]
}

/// Full-text search across all fields with total-count tracking. The page
/// window is applied to the search stream, then a `$facet` splits the
/// surviving documents from the `$$SEARCH_META` count record.
///
/// Blank terms must be rejected by callers before this builder is reached.
#[must_use]
pub fn text_search(term: &str, offset: u64, limit: u64) -> Vec<Document> {
    debug_assert!(!term.trim().is_empty());
    vec![
        doc! {
            "$search": {
                "text": { "path": { "wildcard": "*" }, "query": term },
                "count": { "type": "total" },
            }
        },
        doc! { "$skip": offset as i64 },
        doc! { "$limit": limit as i64 },
        doc! {
            "$facet": {
                "docs": [],
                "meta": [ { "$replaceWith": "$$SEARCH_META" }, { "$limit": 1 } ],
            }
        },
    ]
}

/// An empty field name matches every document.
fn equality_filter(field: &str, value: &str) -> Document {
    let mut filter = Document::new();
    if !field.is_empty() {
        filter.insert(field, value);
    }
    filter
}
