use mealtime::pipeline;
use serde_json::json;

#[test]
fn distinct_pipeline_is_a_single_group_stage() {
    let stages = pipeline::distinct_values("category");
    let as_json = serde_json::to_value(&stages).unwrap();
    assert_eq!(as_json, json!([{ "$group": { "_id": "$category" } }]));
}

#[test]
fn filtered_page_facets_page_and_count_over_the_same_match() {
    let stages = pipeline::filtered_page("category", "Dessert", 20, 10);
    let as_json = serde_json::to_value(&stages).unwrap();
    assert_eq!(
        as_json,
        json!([{
            "$facet": {
                "recipes": [
                    { "$match": { "category": "Dessert" } },
                    { "$skip": 20 },
                    { "$limit": 10 }
                ],
                "totalCount": [
                    { "$match": { "category": "Dessert" } },
                    { "$count": "totalCount" }
                ]
            }
        }])
    );
}

#[test]
fn empty_field_name_matches_all_documents() {
    let stages = pipeline::filtered_page("", "", 0, 10);
    let as_json = serde_json::to_value(&stages).unwrap();
    assert_eq!(as_json[0]["$facet"]["recipes"][0], json!({ "$match": {} }));
    assert_eq!(as_json[0]["$facet"]["totalCount"][0], json!({ "$match": {} }));
}

#[test]
fn text_search_pipeline_pages_then_splits_meta() {
    let stages = pipeline::text_search("goulash", 10, 5);
    let as_json = serde_json::to_value(&stages).unwrap();
    assert_eq!(
        as_json,
        json!([
            {
                "$search": {
                    "text": { "path": { "wildcard": "*" }, "query": "goulash" },
                    "count": { "type": "total" }
                }
            },
            { "$skip": 10 },
            { "$limit": 5 },
            {
                "$facet": {
                    "docs": [],
                    "meta": [ { "$replaceWith": "$$SEARCH_META" }, { "$limit": 1 } ]
                }
            }
        ])
    );
}
