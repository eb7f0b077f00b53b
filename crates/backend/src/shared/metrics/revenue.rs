use contracts::shared::metrics::{OrderMetrics, RevenueMetrics};
use std::collections::HashMap;

use super::aggregate::{group_sum, growth_percentage, growth_rate, mean};
use super::dataset::SalesDataset;

fn total_revenue(sales: &SalesDataset, year: i32) -> f64 {
    sales.in_year(year).map(|r| r.price).sum()
}

/// Per-order totals (sum of line-item prices) for one year
fn order_totals(sales: &SalesDataset, year: i32) -> HashMap<&str, f64> {
    group_sum(sales.in_year(year).map(|r| (r.order_id.as_str(), r.price)))
}

/// Revenue of `target_year` against `comparison_year`.
///
/// A comparison year without revenue yields a growth of 0 whatever the
/// target revenue is.
pub fn calculate_revenue_metrics(
    sales: &SalesDataset,
    target_year: i32,
    comparison_year: i32,
) -> RevenueMetrics {
    let total_revenue_target = total_revenue(sales, target_year);
    let total_revenue_comparison = total_revenue(sales, comparison_year);
    let revenue_growth_rate = growth_rate(total_revenue_target, total_revenue_comparison);

    RevenueMetrics {
        total_revenue_target,
        total_revenue_comparison,
        revenue_growth_rate,
        revenue_growth_percentage: revenue_growth_rate * 100.0,
    }
}

/// Average order value and distinct order counts for two years
pub fn calculate_order_metrics(
    sales: &SalesDataset,
    target_year: i32,
    comparison_year: i32,
) -> OrderMetrics {
    let target = order_totals(sales, target_year);
    let comparison = order_totals(sales, comparison_year);

    let avg_order_value_target = mean(target.values().copied());
    let avg_order_value_comparison = mean(comparison.values().copied());
    let total_orders_target = target.len();
    let total_orders_comparison = comparison.len();

    OrderMetrics {
        avg_order_value_target,
        avg_order_value_comparison,
        total_orders_target,
        total_orders_comparison,
        aov_growth_percentage: growth_percentage(
            avg_order_value_target,
            avg_order_value_comparison,
        ),
        orders_growth_percentage: growth_rate(
            total_orders_target as f64,
            total_orders_comparison as f64,
        ) * 100.0,
    }
}
