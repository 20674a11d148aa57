//! Insert and update operations.
//!
//! Both are fire-and-report: no retry, no local cache mutation. Callers
//! re-query to refresh the displayed page after a successful write.

use crate::errors::CatalogError;
use crate::recipe::Recipe;
use crate::transport::{ACTION_INSERT_ONE, ACTION_UPDATE_ONE, DATA_SOURCE, DataApiClient};
use log::info;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InsertBody<'a> {
    data_source: &'a str,
    database: &'a str,
    collection: &'a str,
    document: &'a Recipe,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateBody<'a> {
    data_source: &'a str,
    database: &'a str,
    collection: &'a str,
    filter: IdFilter<'a>,
    update: SetUpdate<'a>,
}

/// Identity filter keyed by the stored document id.
#[derive(Serialize)]
struct IdFilter<'a> {
    #[serde(rename = "_id")]
    id: Oid<'a>,
}

#[derive(Serialize)]
struct Oid<'a> {
    #[serde(rename = "$oid")]
    oid: &'a str,
}

/// Replace-fields operation carrying the full recipe payload.
#[derive(Serialize)]
struct SetUpdate<'a> {
    #[serde(rename = "$set")]
    set: &'a Recipe,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InsertResponse {
    inserted_id: String,
}

/// Insert a new recipe and return the backend-assigned id.
pub async fn insert(client: &DataApiClient, recipe: &Recipe) -> Result<String, CatalogError> {
    let credentials = client.credentials();
    let body = InsertBody {
        data_source: DATA_SOURCE,
        database: &credentials.database,
        collection: &credentials.collection,
        document: recipe,
    };
    let (status, text) = client.post(ACTION_INSERT_ONE, &body).await?;
    if status != StatusCode::CREATED {
        return Err(classify_mutation(status, text));
    }
    let response: InsertResponse = serde_json::from_str(&text)?;
    info!("inserted recipe {}", response.inserted_id);
    Ok(response.inserted_id)
}

/// Replace the fields of the recipe stored under `id`.
pub async fn update(client: &DataApiClient, recipe: &Recipe, id: &str) -> Result<(), CatalogError> {
    let credentials = client.credentials();
    let body = UpdateBody {
        data_source: DATA_SOURCE,
        database: &credentials.database,
        collection: &credentials.collection,
        filter: IdFilter { id: Oid { oid: id } },
        update: SetUpdate { set: recipe },
    };
    let (status, text) = client.post(ACTION_UPDATE_ONE, &body).await?;
    if status != StatusCode::OK {
        return Err(classify_mutation(status, text));
    }
    info!("updated recipe {id}");
    Ok(())
}

fn classify_mutation(status: StatusCode, body: String) -> CatalogError {
    match status.as_u16() {
        401 | 403 => CatalogError::Auth { status: status.as_u16(), body },
        404 => CatalogError::NotFound { status: status.as_u16(), body },
        s if (400..500).contains(&s) => CatalogError::Rejected { status: s, body },
        s => CatalogError::Unexpected { status: s, body },
    }
}
