//! Reporting clients: the live Google Ads REST client and an offline fixture
//! replayer. Both decode responses through [`parse_search_response`].

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{AdsReportError, Result};
use crate::gaql::ReportQuery;
use crate::models::ReportRow;

/// Lazily decoded result rows, in the order the service returned them.
pub type ReportRows<'a> = Box<dyn Iterator<Item = Result<ReportRow>> + 'a>;

/// Something that can run a report query.
pub trait ReportingClient {
    fn search(&self, query: &ReportQuery) -> Result<ReportRows<'_>>;
}

impl<C: ReportingClient + ?Sized> ReportingClient for &C {
    fn search(&self, query: &ReportQuery) -> Result<ReportRows<'_>> {
        (**self).search(query)
    }
}

impl<C: ReportingClient + ?Sized> ReportingClient for Box<C> {
    fn search(&self, query: &ReportQuery) -> Result<ReportRows<'_>> {
        (**self).search(query)
    }
}

// ---------------------------------------------------------------------------
// Response decoding
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct SearchBatch {
    #[serde(default)]
    results: Vec<Value>,
}

/// `search` returns one batch; a saved `searchStream` response is an array
/// of batches.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SearchResponse {
    Stream(Vec<SearchBatch>),
    Single(SearchBatch),
}

/// Decode a search (or search stream) response body into rows.
///
/// The envelope is parsed eagerly; each row is decoded when the iterator
/// reaches it.
pub fn parse_search_response(body: &str) -> Result<ReportRows<'static>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    let results: Vec<Value> = match response {
        SearchResponse::Single(batch) => batch.results,
        SearchResponse::Stream(batches) => {
            batches.into_iter().flat_map(|b| b.results).collect()
        }
    };
    tracing::debug!(rows = results.len(), "decoded search response");
    Ok(Box::new(results.into_iter().map(ReportRow::from_result)))
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Build an [`AdsReportError::Api`] from a failed response.
///
/// Uses the service's `{"error": {...}}` envelope when the body has one,
/// otherwise the raw body text.
pub fn api_error(status: u16, body: &str) -> AdsReportError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => AdsReportError::Api {
            status,
            code: envelope.error.status,
            message: envelope.error.message,
        },
        Err(_) => AdsReportError::Api {
            status,
            code: None,
            message: body.trim().to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// GoogleAdsClient
// ---------------------------------------------------------------------------

/// Blocking client for the Google Ads REST `googleAds:search` method.
///
/// The access token is used as given; obtaining and refreshing it is up to
/// the caller.
pub struct GoogleAdsClient {
    config: ClientConfig,
    http: Client,
}

impl GoogleAdsClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl ReportingClient for GoogleAdsClient {
    fn search(&self, query: &ReportQuery) -> Result<ReportRows<'_>> {
        let url = self.config.search_url();
        tracing::info!(customer_id = %self.config.customer_id, "querying ad group report");
        tracing::debug!(url = %url, gaql = %query.gaql(), "dispatching search request");

        let mut request = self
            .http
            .post(&url)
            .bearer_auth(&self.config.access_token)
            .header("developer-token", &self.config.developer_token)
            .json(&SearchRequest {
                query: query.gaql(),
            });
        if let Some(login) = &self.config.login_customer_id {
            request = request.header("login-customer-id", login);
        }

        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            let err = api_error(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), "search request failed");
            return Err(err);
        }

        parse_search_response(&body)
    }
}

// ---------------------------------------------------------------------------
// FixtureClient
// ---------------------------------------------------------------------------

/// Replays a saved search response from disk instead of calling the service.
pub struct FixtureClient {
    path: PathBuf,
}

impl FixtureClient {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ReportingClient for FixtureClient {
    fn search(&self, query: &ReportQuery) -> Result<ReportRows<'_>> {
        tracing::info!(path = %self.path.display(), "replaying saved report response");
        tracing::debug!(gaql = %query.gaql(), "query not sent in offline mode");
        let body = fs::read_to_string(&self.path).map_err(|e| {
            AdsReportError::Config(format!(
                "cannot read fixture {}: {}",
                self.path.display(),
                e
            ))
        })?;
        parse_search_response(&body)
    }
}
