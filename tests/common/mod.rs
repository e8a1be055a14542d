//! Shared fixtures for the integration tests.
//!
//! Provides `StubClient`, an in-memory `ReportingClient` that serves canned
//! search results, and `result()` which builds one result in the service's
//! REST encoding.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use ads_report::client::parse_search_response;
use ads_report::{AdsReportError, ReportQuery, ReportRows, ReportingClient, Result};
use serde_json::{json, Value};

/// One search result as the service encodes it (int64 metrics as strings).
pub fn result(
    campaign: &str,
    ad_group: &str,
    clicks: i64,
    impressions: i64,
    cost_micros: i64,
    conversions: f64,
) -> Value {
    json!({
        "campaign": { "resourceName": "customers/1234567890/campaigns/1", "name": campaign },
        "adGroup": { "resourceName": "customers/1234567890/adGroups/2", "name": ad_group },
        "metrics": {
            "clicks": clicks.to_string(),
            "impressions": impressions.to_string(),
            "costMicros": cost_micros.to_string(),
            "conversions": conversions
        }
    })
}

/// `n` results with strictly decreasing cost.
pub fn ranked_results(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            result(
                &format!("Campaign {}", i),
                &format!("Group {}", i),
                100 - i as i64,
                1000,
                (n - i) as i64 * 1_000_000,
                1.0,
            )
        })
        .collect()
}

/// Serves fixed results and remembers the queries it was asked to run.
pub struct StubClient {
    body: String,
    pub queries: RefCell<Vec<String>>,
    pub calls: Cell<usize>,
}

impl StubClient {
    pub fn new(results: Vec<Value>) -> Self {
        Self {
            body: json!({ "results": results }).to_string(),
            queries: RefCell::new(Vec::new()),
            calls: Cell::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl ReportingClient for StubClient {
    fn search(&self, query: &ReportQuery) -> Result<ReportRows<'_>> {
        self.calls.set(self.calls.get() + 1);
        self.queries.borrow_mut().push(query.gaql().to_string());
        parse_search_response(&self.body)
    }
}

/// Fails every search with an API error.
pub struct FailingClient;

impl ReportingClient for FailingClient {
    fn search(&self, _query: &ReportQuery) -> Result<ReportRows<'_>> {
        Err(AdsReportError::Api {
            status: 401,
            code: Some("UNAUTHENTICATED".to_string()),
            message: "Request had invalid authentication credentials.".to_string(),
        })
    }
}

/// Render a report into a `String`.
pub fn render_to_string<C: ReportingClient>(
    report: &ads_report::TopAdGroupsReport<C>,
) -> Result<(String, ads_report::ReportSummary)> {
    let mut out = Vec::new();
    let summary = report.render(&mut out)?;
    Ok((String::from_utf8(out).unwrap(), summary))
}
