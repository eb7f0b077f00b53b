use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::delivery_speed::DeliverySpeed;
use crate::shared::indicators::IndicatorValue;
use crate::shared::metrics::{CategorySales, MonthlyRevenue, StateSales, StatusShare};

/// Request for the sales analytics dashboard.
/// Missing dates fall back to the configured default range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesAnalyticsRequest {
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Resolved period of a dashboard response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsPeriod {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    /// Year of `date_to`
    pub target_year: i32,
    pub comparison_year: i32,
}

/// Monthly revenue lines for the selected year and the year before
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevenueTrend {
    pub current: Vec<MonthlyRevenue>,
    pub previous: Vec<MonthlyRevenue>,
}

/// Full payload of the sales analytics dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesAnalyticsResponse {
    pub period: AnalyticsPeriod,
    /// `false` when the selected range contains no sales; every other
    /// field is then empty
    pub has_data: bool,
    /// KPI cards (revenue, monthly growth, AOV, orders, delivery, reviews)
    pub kpis: Vec<IndicatorValue>,
    pub revenue_trend: RevenueTrend,
    pub top_categories: Vec<CategorySales>,
    pub revenue_by_state: Vec<StateSales>,
    pub satisfaction_by_delivery: BTreeMap<DeliverySpeed, f64>,
    pub order_status_distribution: Vec<StatusShare>,
    pub avg_delivery_days: Option<f64>,
    pub avg_review_score: Option<f64>,
    /// e.g. "★★★★☆"
    pub review_stars: String,
}
