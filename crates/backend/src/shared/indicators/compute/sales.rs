use contracts::shared::indicators::*;

use super::{change_subtitle, status_by_change, IndicatorData};
use crate::shared::format::format_currency;
use crate::shared::indicators::metadata::ids;
use crate::shared::metrics::aggregate::growth_percentage;
use crate::shared::metrics::{
    calculate_average_monthly_growth, calculate_order_metrics, calculate_revenue_metrics,
};

pub fn compute_sales_revenue(data: &IndicatorData<'_>, ctx: &IndicatorContext) -> IndicatorValue {
    let m = calculate_revenue_metrics(&data.comparison, ctx.target_year(), ctx.comparison_year());
    let change = m.revenue_growth_percentage;
    IndicatorValue {
        id: ids::sales_revenue(),
        value: Some(m.total_revenue_target),
        previous_value: Some(m.total_revenue_comparison),
        change_percent: Some(change),
        status: status_by_change(Some(change), true),
        subtitle: Some(versus(change, Some(m.total_revenue_comparison))),
    }
}

/// "↗ 12.34% vs $15K"
fn versus(change: f64, previous: Option<f64>) -> String {
    match previous {
        Some(previous) => format!("{} vs {}", change_subtitle(change), format_currency(previous)),
        None => change_subtitle(change),
    }
}

/// Mean month-over-month growth inside the selected range; the previous
/// value is the same figure for the whole comparison year.
///
/// `change_percent` is the relative change between the two figures like
/// every other indicator. Status and subtitle follow the sign of the
/// current growth itself.
pub fn compute_sales_monthly_growth(
    data: &IndicatorData<'_>,
    ctx: &IndicatorContext,
) -> IndicatorValue {
    let current = calculate_average_monthly_growth(&data.period, ctx.target_year());
    let previous = calculate_average_monthly_growth(&data.comparison, ctx.comparison_year());
    IndicatorValue {
        id: ids::sales_monthly_growth(),
        value: Some(current.unwrap_or(0.0)),
        previous_value: previous,
        change_percent: Some(growth_percentage(current, previous)),
        status: status_by_change(current, true),
        subtitle: Some(change_subtitle(current.unwrap_or(0.0))),
    }
}

pub fn compute_sales_avg_order_value(
    data: &IndicatorData<'_>,
    ctx: &IndicatorContext,
) -> IndicatorValue {
    let m = calculate_order_metrics(&data.comparison, ctx.target_year(), ctx.comparison_year());
    let change = m.aov_growth_percentage;
    IndicatorValue {
        id: ids::sales_avg_order_value(),
        value: m.avg_order_value_target,
        previous_value: m.avg_order_value_comparison,
        change_percent: Some(change),
        status: status_by_change(Some(change), true),
        subtitle: Some(versus(change, m.avg_order_value_comparison)),
    }
}

pub fn compute_sales_order_count(
    data: &IndicatorData<'_>,
    ctx: &IndicatorContext,
) -> IndicatorValue {
    let m = calculate_order_metrics(&data.comparison, ctx.target_year(), ctx.comparison_year());
    let change = m.orders_growth_percentage;
    IndicatorValue {
        id: ids::sales_order_count(),
        value: Some(m.total_orders_target as f64),
        previous_value: Some(m.total_orders_comparison as f64),
        change_percent: Some(change),
        status: status_by_change(Some(change), true),
        subtitle: Some(change_subtitle(change)),
    }
}
