//! Typed access to the three lookup endpoints.
//!
//! [`MedicineLookup`] is the seam the rest of the client is written against; the HTTP
//! implementation is [`LookupClient`]. Blank input is refused locally, so no request is
//! ever sent for it.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use api_shared::{ErrorRes, MedicineRes, SimilarMedicineRes, SuggestionRes};
use medquery_types::is_blank;
use reqwest::StatusCode;
use std::future::Future;

/// The lookup operations the client screens need.
pub trait MedicineLookup: Send + Sync + 'static {
    /// Names starting with `fragment`. Blank input resolves to an empty list.
    fn suggestions(&self, fragment: &str)
        -> impl Future<Output = ClientResult<Vec<String>>> + Send;

    /// Details of the medicine named `name`, or `None` when the service has no such medicine.
    fn medicine(&self, name: &str) -> impl Future<Output = ClientResult<Option<MedicineRes>>> + Send;

    /// Medicines sharing the given compositions.
    fn similar(
        &self,
        comp1: &str,
        comp2: Option<&str>,
    ) -> impl Future<Output = ClientResult<Vec<SimilarMedicineRes>>> + Send;
}

/// HTTP client for a running lookup service.
#[derive(Clone, Debug)]
pub struct LookupClient {
    http: reqwest::Client,
    api_base: String,
}

impl LookupClient {
    pub fn new(cfg: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: cfg.api_base().to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

/// Logs the service's error body (if any) and turns a non-success status into an error.
async fn status_error(endpoint: &'static str, response: reqwest::Response) -> ClientError {
    let status = response.status();
    match response.json::<ErrorRes>().await {
        Ok(body) => tracing::debug!("{} returned {}: {}", endpoint, status, body.error),
        Err(_) => tracing::debug!("{} returned {} without an error body", endpoint, status),
    }
    ClientError::Status { endpoint, status }
}

impl MedicineLookup for LookupClient {
    async fn suggestions(&self, fragment: &str) -> ClientResult<Vec<String>> {
        if is_blank(Some(fragment)) {
            return Ok(Vec::new());
        }

        let response = self
            .http
            .get(self.url("/suggestions"))
            .query(&[("q", fragment)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(status_error("/suggestions", response).await);
        }

        let names: Vec<SuggestionRes> = response.json().await?;
        Ok(names.into_iter().map(|s| s.name).collect())
    }

    async fn medicine(&self, name: &str) -> ClientResult<Option<MedicineRes>> {
        if is_blank(Some(name)) {
            return Err(ClientError::InvalidInput("Medicine name required".into()));
        }

        let response = self
            .http
            .get(self.url("/medicine"))
            .query(&[("name", name)])
            .send()
            .await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            _ => Err(status_error("/medicine", response).await),
        }
    }

    async fn similar(
        &self,
        comp1: &str,
        comp2: Option<&str>,
    ) -> ClientResult<Vec<SimilarMedicineRes>> {
        if is_blank(Some(comp1)) {
            return Err(ClientError::InvalidInput("Composition required".into()));
        }

        let mut query = vec![("comp1", comp1)];
        if let Some(comp2) = comp2.filter(|c| !c.trim().is_empty()) {
            query.push(("comp2", comp2));
        }

        let response = self
            .http
            .get(self.url("/similar"))
            .query(&query)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(status_error("/similar", response).await);
        }

        Ok(response.json().await?)
    }
}
