//! Raw metric endpoints, one per engine operation.

use axum::{extract::Query, http::StatusCode, Json};
use contracts::shared::metrics::*;
use serde::Deserialize;

use crate::shared::data::store::{get_store, DataStore};
use crate::shared::metrics;

#[derive(Deserialize)]
pub struct YearParams {
    pub year: i32,
}

#[derive(Deserialize)]
pub struct ComparisonParams {
    pub year: i32,
    /// Defaults to the year before `year`
    pub comparison_year: Option<i32>,
}

impl ComparisonParams {
    fn years(&self) -> (i32, i32) {
        (self.year, self.comparison_year.unwrap_or(self.year - 1))
    }
}

fn store() -> Result<&'static DataStore, StatusCode> {
    get_store().map_err(|e| {
        tracing::error!("Metrics: {e:#}");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// GET /api/metrics/revenue?year=2023&comparison_year=2022
pub async fn revenue(
    Query(params): Query<ComparisonParams>,
) -> Result<Json<RevenueMetrics>, StatusCode> {
    let (target, comparison) = params.years();
    Ok(Json(metrics::calculate_revenue_metrics(
        store()?.sales(),
        target,
        comparison,
    )))
}

/// GET /api/metrics/orders?year=2023&comparison_year=2022
pub async fn orders(
    Query(params): Query<ComparisonParams>,
) -> Result<Json<OrderMetrics>, StatusCode> {
    let (target, comparison) = params.years();
    Ok(Json(metrics::calculate_order_metrics(
        store()?.sales(),
        target,
        comparison,
    )))
}

/// GET /api/metrics/monthly_growth?year=2023
pub async fn monthly_growth(
    Query(params): Query<YearParams>,
) -> Result<Json<Vec<MonthlyGrowth>>, StatusCode> {
    Ok(Json(metrics::calculate_monthly_growth(
        store()?.sales(),
        params.year,
    )))
}

/// GET /api/metrics/monthly_trend?year=2023
pub async fn monthly_trend(
    Query(params): Query<YearParams>,
) -> Result<Json<Vec<MonthlyRevenue>>, StatusCode> {
    Ok(Json(metrics::get_monthly_revenue_trend(
        store()?.sales(),
        params.year,
    )))
}

/// GET /api/metrics/categories?year=2023
pub async fn categories(
    Query(params): Query<YearParams>,
) -> Result<Json<Vec<CategorySales>>, StatusCode> {
    let store = store()?;
    Ok(Json(metrics::calculate_product_category_sales(
        store.sales(),
        store.source().products(),
        params.year,
    )))
}

/// GET /api/metrics/states?year=2023
pub async fn states(
    Query(params): Query<YearParams>,
) -> Result<Json<Vec<StateSales>>, StatusCode> {
    let store = store()?;
    let source = store.source();
    Ok(Json(metrics::calculate_geographic_sales(
        store.sales(),
        source.orders(),
        source.customers(),
        params.year,
    )))
}

/// GET /api/metrics/delivery?year=2023
pub async fn delivery(
    Query(params): Query<YearParams>,
) -> Result<Json<DeliveryPerformance>, StatusCode> {
    let store = store()?;
    Ok(Json(metrics::calculate_delivery_performance(
        store.sales(),
        store.source().reviews(),
        params.year,
    )))
}

/// GET /api/metrics/status_distribution?year=2023
pub async fn status_distribution(
    Query(params): Query<YearParams>,
) -> Result<Json<Vec<StatusShare>>, StatusCode> {
    Ok(Json(metrics::calculate_order_status_distribution(
        store()?.source().orders(),
        params.year,
    )))
}
