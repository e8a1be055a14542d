//! Top ad groups by spend, from the Google Ads reporting API.
//!
//! Runs one fixed GAQL query (last 30 days, ordered by cost, ten rows) and
//! prints each ad group's clicks, cost and conversions.
//!
//! # Quick start
//!
//! ```no_run
//! use ads_report::AdsReport;
//!
//! let report = AdsReport::builder().build().unwrap();
//! report.render(&mut std::io::stdout()).unwrap();
//! ```
//!
//! Any [`ReportingClient`] can drive the report directly, which is how the
//! tests substitute a stub for the live service:
//!
//! ```no_run
//! use ads_report::{FixtureClient, TopAdGroupsReport};
//!
//! let report = TopAdGroupsReport::new(FixtureClient::new("response.json")).unwrap();
//! let summary = report.render(&mut std::io::stdout()).unwrap();
//! println!("{} ad groups", summary.rows);
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod gaql;
pub mod models;
pub mod report;

pub use client::{FixtureClient, GoogleAdsClient, ReportRows, ReportingClient};
pub use config::{ClientConfig, Settings};
pub use error::{AdsReportError, Result};
pub use gaql::{GaqlBuilder, ReportQuery};
pub use models::{Micros, ReportRow};
pub use report::{format_row, ReportSummary, TopAdGroupsReport};

use std::io::Write;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// AdsReportBuilder
// ---------------------------------------------------------------------------

/// Builder for an [`AdsReport`].
///
/// Use [`AdsReport::builder()`] to obtain one, layer settings on it and call
/// [`build()`](AdsReportBuilder::build).
#[derive(Default)]
pub struct AdsReportBuilder {
    overrides: Settings,
    settings_file: Option<PathBuf>,
    fixture: Option<PathBuf>,
}

impl AdsReportBuilder {
    /// Read settings from this file instead of the default location.
    ///
    /// Unlike the default location, the file must exist.
    pub fn settings_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.settings_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Settings that take precedence over the settings file, typically from
    /// the environment and command line.
    pub fn overrides(mut self, settings: Settings) -> Self {
        self.overrides = settings;
        self
    }

    /// Replay a saved search response instead of calling the service.
    ///
    /// No credentials are needed in this mode.
    pub fn fixture<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.fixture = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn build(self) -> Result<AdsReport> {
        let client: Box<dyn ReportingClient> = match self.fixture {
            Some(path) => Box::new(FixtureClient::new(path)),
            None => {
                let file = match &self.settings_file {
                    Some(path) => Settings::load(path)?,
                    None => Settings::load_default()?,
                };
                let config = file.merge(self.overrides).resolve()?;
                Box::new(GoogleAdsClient::new(config)?)
            }
        };
        Ok(AdsReport {
            report: TopAdGroupsReport::new(client)?,
        })
    }
}

// ---------------------------------------------------------------------------
// AdsReport
// ---------------------------------------------------------------------------

/// The spend report wired to a configured client.
pub struct AdsReport {
    report: TopAdGroupsReport<Box<dyn ReportingClient>>,
}

impl AdsReport {
    pub fn builder() -> AdsReportBuilder {
        AdsReportBuilder::default()
    }

    pub fn query(&self) -> &ReportQuery {
        self.report.query()
    }

    /// Run the query and return its rows lazily.
    pub fn fetch(&self) -> Result<ReportRows<'_>> {
        self.report.fetch()
    }

    /// Run the query and write the formatted report to `out`.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<ReportSummary> {
        self.report.render(out)
    }
}
