//! Google Ads Query Language (GAQL) builder.
//!
//! GAQL has no parameter binding, so every value placed in a query is either
//! a field name, a named date range or a number. Builder methods return
//! `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use ads_report::gaql::{DateRange, GaqlBuilder, Order};
//! let gaql = GaqlBuilder::new("ad_group")
//!     .select(&["ad_group.name", "metrics.clicks"])
//!     .during(DateRange::Last7Days)
//!     .order_by("metrics.clicks", Order::Desc)
//!     .limit(5)
//!     .build()
//!     .unwrap();
//! assert!(gaql.ends_with("LIMIT 5"));
//! ```

use std::fmt;

use crate::config::REPORT_LIMIT;
use crate::error::{AdsReportError, Result};

/// Named date ranges accepted by `segments.date DURING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    Today,
    Yesterday,
    Last7Days,
    Last14Days,
    Last30Days,
    LastBusinessWeek,
    ThisMonth,
    LastMonth,
}

impl DateRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::Today => "TODAY",
            DateRange::Yesterday => "YESTERDAY",
            DateRange::Last7Days => "LAST_7_DAYS",
            DateRange::Last14Days => "LAST_14_DAYS",
            DateRange::Last30Days => "LAST_30_DAYS",
            DateRange::LastBusinessWeek => "LAST_BUSINESS_WEEK",
            DateRange::ThisMonth => "THIS_MONTH",
            DateRange::LastMonth => "LAST_MONTH",
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Asc => f.write_str("ASC"),
            Order::Desc => f.write_str("DESC"),
        }
    }
}

/// Builds GAQL query strings, one clause per line.
pub struct GaqlBuilder {
    select_fields: Vec<String>,
    from_resource: String,
    where_clauses: Vec<String>,
    order_by_fields: Vec<String>,
    limit_val: Option<usize>,
}

impl GaqlBuilder {
    /// Create a builder querying the given resource (e.g. `"ad_group"`).
    pub fn new(resource: &str) -> Self {
        Self {
            select_fields: Vec::new(),
            from_resource: resource.to_string(),
            where_clauses: Vec::new(),
            order_by_fields: Vec::new(),
            limit_val: None,
        }
    }

    /// Append fields to the SELECT clause.
    pub fn select(&mut self, fields: &[&str]) -> &mut Self {
        self.select_fields
            .extend(fields.iter().map(|f| f.to_string()));
        self
    }

    /// Add a raw WHERE condition, e.g. `"campaign.status = 'ENABLED'"`.
    pub fn where_clause(&mut self, condition: &str) -> &mut Self {
        self.where_clauses.push(condition.to_string());
        self
    }

    /// Restrict to a named date range: `segments.date DURING {range}`.
    pub fn during(&mut self, range: DateRange) -> &mut Self {
        self.where_clauses
            .push(format!("segments.date DURING {}", range));
        self
    }

    /// Add an ORDER BY field.
    pub fn order_by(&mut self, field: &str, order: Order) -> &mut Self {
        self.order_by_fields.push(format!("{} {}", field, order));
        self
    }

    pub fn limit(&mut self, n: usize) -> &mut Self {
        self.limit_val = Some(n);
        self
    }

    /// Build the final query string.
    ///
    /// Fails when no fields are selected or the limit is zero.
    pub fn build(&self) -> Result<String> {
        if self.select_fields.is_empty() {
            return Err(AdsReportError::InvalidArgument(
                "GAQL query must select at least one field".to_string(),
            ));
        }
        if self.limit_val == Some(0) {
            return Err(AdsReportError::InvalidArgument(
                "GAQL LIMIT must be greater than zero".to_string(),
            ));
        }

        let mut parts = vec![
            format!("SELECT {}", self.select_fields.join(", ")),
            format!("FROM {}", self.from_resource),
        ];

        if !self.where_clauses.is_empty() {
            parts.push(format!("WHERE {}", self.where_clauses.join(" AND ")));
        }

        if !self.order_by_fields.is_empty() {
            parts.push(format!("ORDER BY {}", self.order_by_fields.join(", ")));
        }

        if let Some(n) = self.limit_val {
            parts.push(format!("LIMIT {}", n));
        }

        Ok(parts.join("\n"))
    }
}

/// A built report query together with the row cap it promises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    gaql: String,
    limit: usize,
}

impl ReportQuery {
    /// Top ad groups by spend over the last 30 days.
    pub fn top_ad_groups_by_cost() -> Result<Self> {
        let limit = REPORT_LIMIT;
        let gaql = GaqlBuilder::new("ad_group")
            .select(&[
                "campaign.name",
                "ad_group.name",
                "metrics.clicks",
                "metrics.impressions",
                "metrics.cost_micros",
                "metrics.conversions",
            ])
            .during(DateRange::Last30Days)
            .order_by("metrics.cost_micros", Order::Desc)
            .limit(limit)
            .build()?;
        Ok(Self { gaql, limit })
    }

    pub fn gaql(&self) -> &str {
        &self.gaql
    }

    /// Maximum number of rows this query can return.
    pub fn limit(&self) -> usize {
        self.limit
    }
}
