use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AdsReportError, Result};
use crate::models::Micros;

// ---------------------------------------------------------------------------
// ReportRow — one ad group in the spend report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub campaign_name: String,
    pub ad_group_name: String,
    pub clicks: i64,
    pub impressions: i64,
    pub cost: Micros,
    pub conversions: f64,
}

impl ReportRow {
    /// Decode one entry of a search response's `results` array.
    ///
    /// The service omits metrics whose value is zero, so missing metrics
    /// decode as zero. Missing campaign or ad group names are an error.
    pub fn from_result(value: Value) -> Result<Self> {
        let raw: RawResult = serde_json::from_value(value)
            .map_err(|e| AdsReportError::InvalidRow(e.to_string()))?;

        let campaign_name = raw
            .campaign
            .and_then(|c| c.name)
            .ok_or_else(|| AdsReportError::InvalidRow("missing campaign.name".to_string()))?;
        let ad_group_name = raw
            .ad_group
            .and_then(|g| g.name)
            .ok_or_else(|| AdsReportError::InvalidRow("missing ad_group.name".to_string()))?;

        Ok(Self {
            campaign_name,
            ad_group_name,
            clicks: raw.metrics.clicks,
            impressions: raw.metrics.impressions,
            cost: Micros(raw.metrics.cost_micros),
            conversions: raw.metrics.conversions,
        })
    }
}

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResult {
    campaign: Option<NamedResource>,
    ad_group: Option<NamedResource>,
    #[serde(default)]
    metrics: RawMetrics,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawMetrics {
    #[serde(deserialize_with = "int64")]
    clicks: i64,
    #[serde(deserialize_with = "int64")]
    impressions: i64,
    #[serde(deserialize_with = "int64")]
    cost_micros: i64,
    #[serde(deserialize_with = "double")]
    conversions: f64,
}

/// int64 fields arrive as JSON strings in the REST encoding.
fn int64<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<i64, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0),
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| de::Error::custom(format!("{} is not a 64-bit integer", n))),
        Value::String(s) => s.parse().map_err(de::Error::custom),
        other => Err(de::Error::custom(format!("expected integer, got {}", other))),
    }
}

fn double<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f64, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0.0),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| de::Error::custom(format!("{} is not a number", n))),
        Value::String(s) => s.parse().map_err(de::Error::custom),
        other => Err(de::Error::custom(format!("expected number, got {}", other))),
    }
}
