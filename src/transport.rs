//! HTTPS transport for the Atlas Data API.
//!
//! One authenticated POST per logical operation. Credential headers ride on
//! every request; the endpoint path selects the backend action.

use crate::credentials::Credentials;
use crate::errors::CatalogError;
use bson::Document;
use log::debug;
pub use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://eu-central-1.aws.data.mongodb-api.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fixed data source name for Atlas-hosted clusters.
pub const DATA_SOURCE: &str = "mongodb-atlas";

pub(crate) const ACTION_AGGREGATE: &str = "aggregate";
pub(crate) const ACTION_INSERT_ONE: &str = "insertOne";
pub(crate) const ACTION_UPDATE_ONE: &str = "updateOne";
pub(crate) const ACTION_FIND_ONE: &str = "findOne";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AggregateBody<'a> {
    data_source: &'a str,
    database: &'a str,
    collection: &'a str,
    pipeline: &'a [Document],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FindOneBody<'a> {
    data_source: &'a str,
    database: &'a str,
    collection: &'a str,
    filter: Document,
}

/// Client for the Data API action endpoints of one app.
pub struct DataApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl DataApiClient {
    pub fn new(credentials: Credentials) -> Result<Self, CatalogError> {
        Self::with_base_url(credentials, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_base_url(
        credentials: Credentials,
        base_url: &str,
        timeout_secs: u64,
    ) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string(), credentials })
    }

    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn action_url(&self, action: &str) -> String {
        format!(
            "{}/app/{}/endpoint/data/v1/action/{}",
            self.base_url, self.credentials.app_id, action
        )
    }

    /// Issue one authenticated POST and return the raw status and body.
    /// An incomplete credential set fails here, before any request goes out.
    pub(crate) async fn post(
        &self,
        action: &str,
        body: &impl Serialize,
    ) -> Result<(StatusCode, String), CatalogError> {
        if !self.credentials.is_complete() {
            return Err(CatalogError::NotConfigured);
        }
        let response = self
            .http
            .post(self.action_url(action))
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header("email", &self.credentials.email)
            .header("password", &self.credentials.password)
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        debug!("{action} -> {status}");
        Ok((status, text))
    }

    /// Run an aggregation pipeline and return the raw response body.
    pub async fn aggregate(&self, pipeline: &[Document]) -> Result<String, CatalogError> {
        let body = AggregateBody {
            data_source: DATA_SOURCE,
            database: &self.credentials.database,
            collection: &self.credentials.collection,
            pipeline,
        };
        let (status, text) = self.post(ACTION_AGGREGATE, &body).await?;
        if status == StatusCode::OK { Ok(text) } else { Err(classify_status(status, text)) }
    }
}

/// Read-path status classification. Mutations have their own rules for the
/// conflict/validation range.
pub(crate) fn classify_status(status: StatusCode, body: String) -> CatalogError {
    match status.as_u16() {
        401 | 403 => CatalogError::Auth { status: status.as_u16(), body },
        404 => CatalogError::NotFound { status: status.as_u16(), body },
        s => CatalogError::Unexpected { status: s, body },
    }
}

/// Validate a credential set with a `findOne` probe and return the raw
/// status code for the caller to map to a user-facing message.
pub async fn check_credentials(
    credentials: &Credentials,
    base_url: &str,
    timeout_secs: u64,
) -> Result<StatusCode, CatalogError> {
    let client = DataApiClient::with_base_url(credentials.clone(), base_url, timeout_secs)?;
    let body = FindOneBody {
        data_source: DATA_SOURCE,
        database: &credentials.database,
        collection: &credentials.collection,
        filter: Document::new(),
    };
    let (status, _) = client.post(ACTION_FIND_ONE, &body).await?;
    Ok(status)
}

/// User-facing message for a failed credential probe.
#[must_use]
pub fn login_failure_message(status: StatusCode) -> &'static str {
    match status.as_u16() {
        401 => "Login failed - wrong credentials!",
        404 => "Login failed - App not found!",
        400 => "Login failed - database/collection not found!",
        _ => "Login failed - unknown error!",
    }
}
