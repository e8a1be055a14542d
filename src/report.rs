//! The top-ad-groups spend report: run the query, print three lines per row.

use std::io::Write;

use crate::client::{ReportRows, ReportingClient};
use crate::error::Result;
use crate::gaql::ReportQuery;
use crate::models::ReportRow;

/// Outcome of a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    /// Number of row groups written.
    pub rows: usize,
}

impl ReportSummary {
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

/// Fetches the top ad groups by cost through a [`ReportingClient`] and
/// formats them for the console.
pub struct TopAdGroupsReport<C> {
    client: C,
    query: ReportQuery,
}

impl<C: ReportingClient> TopAdGroupsReport<C> {
    pub fn new(client: C) -> Result<Self> {
        Ok(Self {
            client,
            query: ReportQuery::top_ad_groups_by_cost()?,
        })
    }

    pub fn query(&self) -> &ReportQuery {
        &self.query
    }

    /// Run the query and return its rows lazily.
    ///
    /// Rows keep the order the service returned and are capped at the
    /// query's limit even if the service sends more.
    pub fn fetch(&self) -> Result<ReportRows<'_>> {
        let rows = self.client.search(&self.query)?;
        Ok(Box::new(rows.take(self.query.limit())))
    }

    /// Write every row group to `out`.
    ///
    /// Stops at the first row that fails to decode; groups already written
    /// stay written.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<ReportSummary> {
        let mut rows = 0;
        for row in self.fetch()? {
            let row = row?;
            tracing::trace!(
                campaign = %row.campaign_name,
                ad_group = %row.ad_group_name,
                cost = row.cost.to_currency(),
                "writing row"
            );
            out.write_all(format_row(&row).as_bytes())?;
            rows += 1;
        }
        out.flush()?;

        if rows == 0 {
            tracing::info!("no ad groups had activity in the last 30 days");
        } else {
            tracing::debug!(rows, "report written");
        }
        Ok(ReportSummary { rows })
    }
}

/// Format one row group: name line, metrics line and `---`, each ending in
/// a newline.
pub fn format_row(row: &ReportRow) -> String {
    format!(
        "{} > {}\nClicks: {} | Cost: ${} | Conversions: {}\n---\n",
        row.campaign_name, row.ad_group_name, row.clicks, row.cost, row.conversions
    )
}
