use mealtime::Catalog;
use mealtime::config::Config;
use mealtime::credentials::Credentials;
use mealtime::errors::CatalogError;
use mealtime::recipe::{Ingredient, Recipe};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> Credentials {
    Credentials::new("mealtime-abcde", "meals", "recipes", "cook@example.com", "hunter2")
}

fn config_for(server: &MockServer) -> Config {
    Config { base_url: server.uri(), ..Config::default() }
}

fn sample_recipe() -> Recipe {
    Recipe {
        id: None,
        title: "Goulash".into(),
        description: "Beef stew with paprika".into(),
        category: "Main".into(),
        country: "Hungary".into(),
        main_ingredient: "beef".into(),
        prep_time: 90,
        default_portions: 4,
        ingredients: vec![
            Ingredient { name: "beef".into(), quantity: 0.5, unit: "kg".into(), notes: "cubed".into() },
            Ingredient { name: "paprika".into(), quantity: 2.0, unit: "tbsp".into(), notes: "/".into() },
        ],
        image: None,
    }
}

#[tokio::test]
async fn insert_posts_the_document_and_returns_the_assigned_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/app/mealtime-abcde/endpoint/data/v1/action/insertOne"))
        .and(body_partial_json(json!({
            "dataSource": "mongodb-atlas",
            "database": "meals",
            "collection": "recipes",
            "document": {
                "title": "Goulash",
                "mainingredient": "beef",
                "preptime": 90,
                "defaultportions": 4,
                "image": null
            }
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "insertedId": "64f1c0ffee01" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let catalog = Catalog::with_config(credentials(), &config_for(&server)).unwrap();
    let id = catalog.insert(&sample_recipe()).await.unwrap();
    assert_eq!(id, "64f1c0ffee01");
}

#[tokio::test]
async fn insert_rejection_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("document validation failed"))
        .mount(&server)
        .await;

    let catalog = Catalog::with_config(credentials(), &config_for(&server)).unwrap();
    let err = catalog.insert(&sample_recipe()).await.unwrap_err();
    match err {
        CatalogError::Rejected { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "document validation failed");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn insert_without_session_classifies_as_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let catalog = Catalog::with_config(credentials(), &config_for(&server)).unwrap();
    let err = catalog.insert(&sample_recipe()).await.unwrap_err();
    assert!(matches!(err, CatalogError::Auth { status: 401, .. }));
}

#[tokio::test]
async fn update_filters_by_the_stored_object_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/app/mealtime-abcde/endpoint/data/v1/action/updateOne"))
        .and(body_partial_json(json!({
            "filter": { "_id": { "$oid": "64f1c0ffee01" } },
            "update": { "$set": { "title": "Goulash" } }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "matchedCount": 1, "modifiedCount": 1 })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let catalog = Catalog::with_config(credentials(), &config_for(&server)).unwrap();
    catalog.update(&sample_recipe(), "64f1c0ffee01").await.unwrap();
}

#[tokio::test]
async fn update_against_missing_collection_classifies_as_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string("cannot find collection"))
        .mount(&server)
        .await;

    let catalog = Catalog::with_config(credentials(), &config_for(&server)).unwrap();
    let err = catalog.update(&sample_recipe(), "64f1c0ffee01").await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { status: 404, .. }));
}

#[tokio::test]
async fn server_failure_classifies_as_unexpected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let catalog = Catalog::with_config(credentials(), &config_for(&server)).unwrap();
    let err = catalog.insert(&sample_recipe()).await.unwrap_err();
    assert!(matches!(err, CatalogError::Unexpected { status: 500, .. }));
}
