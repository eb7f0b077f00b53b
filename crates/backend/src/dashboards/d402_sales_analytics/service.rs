use anyhow::{bail, Result};
use contracts::dashboards::d402_sales_analytics::dto::{
    AnalyticsPeriod, RevenueTrend, SalesAnalyticsRequest, SalesAnalyticsResponse,
};
use contracts::shared::indicators::{IndicatorContext, IndicatorId};
use std::collections::BTreeMap;

use crate::shared::config::DashboardConfig;
use crate::shared::data::store::DataStore;
use crate::shared::format::review_stars;
use crate::shared::indicators::compute::IndicatorData;
use crate::shared::indicators::metadata::build_catalog;
use crate::shared::indicators::registry::IndicatorRegistry;
use crate::shared::metrics::{
    calculate_delivery_performance, calculate_geographic_sales, calculate_order_status_distribution,
    calculate_product_category_sales, get_monthly_revenue_trend,
};

/// KPI cards in catalog order: every indicator of every set
fn kpi_ids() -> Vec<IndicatorId> {
    build_catalog()
        .sets
        .into_iter()
        .flat_map(|set| set.indicators)
        .collect()
}

/// Resolve the requested range against the configured defaults
fn resolve_context(
    request: &SalesAnalyticsRequest,
    config: &DashboardConfig,
) -> Result<IndicatorContext> {
    let date_from = request.start_date.unwrap_or(config.default_start_date);
    let date_to = request.end_date.unwrap_or(config.default_end_date);
    if date_from > date_to {
        bail!("start date {date_from} is after end date {date_to}");
    }
    Ok(IndicatorContext::new(date_from, date_to))
}

/// Build the sales analytics dashboard for the requested date range.
///
/// Year-over-year figures compare the year of the end date with the year
/// before it. Breakdowns and delivery figures cover the selected range only.
pub fn get_sales_analytics(
    request: SalesAnalyticsRequest,
    store: &DataStore,
    config: &DashboardConfig,
) -> Result<SalesAnalyticsResponse> {
    let ctx = resolve_context(&request, config)?;
    let (target_year, comparison_year) = (ctx.target_year(), ctx.comparison_year());
    let period = AnalyticsPeriod {
        date_from: ctx.date_from,
        date_to: ctx.date_to,
        target_year,
        comparison_year,
    };

    let source = store.source();
    let data = IndicatorData::new(store.sales(), source.reviews(), &ctx);

    if data.period.is_empty() {
        tracing::info!(
            "D402 Dashboard: no sales between {} and {}",
            ctx.date_from,
            ctx.date_to
        );
        return Ok(SalesAnalyticsResponse {
            period,
            has_data: false,
            kpis: Vec::new(),
            revenue_trend: RevenueTrend::default(),
            top_categories: Vec::new(),
            revenue_by_state: Vec::new(),
            satisfaction_by_delivery: BTreeMap::new(),
            order_status_distribution: Vec::new(),
            avg_delivery_days: None,
            avg_review_score: None,
            review_stars: review_stars(None),
        });
    }

    let kpis = IndicatorRegistry::new().compute(&kpi_ids(), &ctx, &data);

    let revenue_trend = RevenueTrend {
        current: get_monthly_revenue_trend(&data.period, target_year),
        previous: get_monthly_revenue_trend(&data.comparison, comparison_year),
    };

    let mut top_categories =
        calculate_product_category_sales(&data.period, source.products(), target_year);
    top_categories.truncate(config.top_categories);

    let revenue_by_state = calculate_geographic_sales(
        &data.period,
        source.orders(),
        source.customers(),
        target_year,
    );

    let delivery = calculate_delivery_performance(&data.period, source.reviews(), target_year);

    Ok(SalesAnalyticsResponse {
        period,
        has_data: true,
        kpis,
        revenue_trend,
        top_categories,
        revenue_by_state,
        satisfaction_by_delivery: delivery.delivery_categories_performance,
        order_status_distribution: calculate_order_status_distribution(
            source.orders(),
            target_year,
        ),
        avg_delivery_days: delivery.avg_delivery_days,
        avg_review_score: delivery.avg_review_score,
        review_stars: review_stars(delivery.avg_review_score),
    })
}

/// Purchase years present in the sales dataset, ascending
pub fn get_available_years(store: &DataStore) -> Vec<i32> {
    store.sales().years()
}
