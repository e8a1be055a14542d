//! Unit tests for the GAQL builder and the fixed report query.

use ads_report::gaql::{DateRange, GaqlBuilder, Order, ReportQuery};
use ads_report::AdsReportError;

// ---------------------------------------------------------------------------
// Basic construction
// ---------------------------------------------------------------------------

#[test]
fn select_from_only() {
    let gaql = GaqlBuilder::new("campaign")
        .select(&["campaign.name"])
        .build()
        .unwrap();
    assert_eq!(gaql, "SELECT campaign.name\nFROM campaign");
}

#[test]
fn select_appends_fields_in_order() {
    let gaql = GaqlBuilder::new("ad_group")
        .select(&["campaign.name"])
        .select(&["ad_group.name", "metrics.clicks"])
        .build()
        .unwrap();
    assert!(gaql.starts_with("SELECT campaign.name, ad_group.name, metrics.clicks\n"));
}

#[test]
fn no_fields_is_rejected() {
    let err = GaqlBuilder::new("ad_group").build().unwrap_err();
    assert!(matches!(err, AdsReportError::InvalidArgument(_)));
}

#[test]
fn zero_limit_is_rejected() {
    let err = GaqlBuilder::new("ad_group")
        .select(&["ad_group.name"])
        .limit(0)
        .build()
        .unwrap_err();
    assert!(matches!(err, AdsReportError::InvalidArgument(_)));
}

// ---------------------------------------------------------------------------
// WHERE / ORDER BY / LIMIT
// ---------------------------------------------------------------------------

#[test]
fn during_renders_named_range() {
    let gaql = GaqlBuilder::new("ad_group")
        .select(&["ad_group.name"])
        .during(DateRange::LastBusinessWeek)
        .build()
        .unwrap();
    assert!(gaql.contains("WHERE segments.date DURING LAST_BUSINESS_WEEK"));
}

#[test]
fn conditions_are_joined_with_and() {
    let gaql = GaqlBuilder::new("ad_group")
        .select(&["ad_group.name"])
        .where_clause("campaign.status = 'ENABLED'")
        .during(DateRange::Last7Days)
        .build()
        .unwrap();
    assert!(gaql.contains(
        "WHERE campaign.status = 'ENABLED' AND segments.date DURING LAST_7_DAYS"
    ));
}

#[test]
fn order_by_multiple_fields() {
    let gaql = GaqlBuilder::new("ad_group")
        .select(&["ad_group.name"])
        .order_by("metrics.cost_micros", Order::Desc)
        .order_by("ad_group.name", Order::Asc)
        .build()
        .unwrap();
    assert!(gaql.contains("ORDER BY metrics.cost_micros DESC, ad_group.name ASC"));
}

#[test]
fn clause_order_is_fixed() {
    let gaql = GaqlBuilder::new("ad_group")
        .limit(3)
        .order_by("metrics.clicks", Order::Desc)
        .during(DateRange::Today)
        .select(&["ad_group.name"])
        .build()
        .unwrap();
    let lines: Vec<&str> = gaql.lines().collect();
    assert_eq!(
        lines,
        vec![
            "SELECT ad_group.name",
            "FROM ad_group",
            "WHERE segments.date DURING TODAY",
            "ORDER BY metrics.clicks DESC",
            "LIMIT 3",
        ]
    );
}

// ---------------------------------------------------------------------------
// ReportQuery
// ---------------------------------------------------------------------------

#[test]
fn top_ad_groups_query_matches_report_definition() {
    let query = ReportQuery::top_ad_groups_by_cost().unwrap();
    assert_eq!(
        query.gaql(),
        "SELECT campaign.name, ad_group.name, metrics.clicks, metrics.impressions, \
         metrics.cost_micros, metrics.conversions\n\
         FROM ad_group\n\
         WHERE segments.date DURING LAST_30_DAYS\n\
         ORDER BY metrics.cost_micros DESC\n\
         LIMIT 10"
    );
    assert_eq!(query.limit(), 10);
}

#[test]
fn date_range_display() {
    assert_eq!(DateRange::Last30Days.to_string(), "LAST_30_DAYS");
    assert_eq!(DateRange::Yesterday.to_string(), "YESTERDAY");
}
