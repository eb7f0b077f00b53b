use contracts::shared::metrics::{MonthlyGrowth, MonthlyRevenue};
use std::collections::BTreeMap;

use super::aggregate::{group_sum, growth_rate, mean};
use super::dataset::SalesDataset;

/// Revenue per month of `year`, months ascending, only months with sales
fn revenue_by_month(sales: &SalesDataset, year: i32) -> BTreeMap<u32, f64> {
    group_sum(sales.in_year(year).map(|r| (r.purchase_month, r.price)))
        .into_iter()
        .collect()
}

/// Month-over-month revenue change within `year`.
///
/// Each month is compared with the previous month that had sales; the first
/// month has no growth value. A previous month with zero revenue gives 0.
pub fn calculate_monthly_growth(sales: &SalesDataset, year: i32) -> Vec<MonthlyGrowth> {
    let mut previous: Option<f64> = None;
    revenue_by_month(sales, year)
        .into_iter()
        .map(|(month, revenue)| {
            let growth = previous.map(|prev| growth_rate(revenue, prev));
            previous = Some(revenue);
            MonthlyGrowth {
                month,
                revenue,
                growth,
            }
        })
        .collect()
}

/// Mean month-over-month growth in percent, `None` with fewer than two
/// months of sales
pub fn calculate_average_monthly_growth(sales: &SalesDataset, year: i32) -> Option<f64> {
    mean(
        calculate_monthly_growth(sales, year)
            .into_iter()
            .filter_map(|m| m.growth),
    )
    .map(|avg| avg * 100.0)
}

/// Revenue per month for charting
pub fn get_monthly_revenue_trend(sales: &SalesDataset, year: i32) -> Vec<MonthlyRevenue> {
    revenue_by_month(sales, year)
        .into_iter()
        .map(|(month, price)| MonthlyRevenue { year, month, price })
        .collect()
}

/// Records of `year`, optionally narrowed to one month
pub fn filter_sales_data_by_period(
    sales: &SalesDataset,
    year: i32,
    month: Option<u32>,
) -> SalesDataset {
    sales.filtered(|r| r.purchase_year == year && month.map_or(true, |m| r.purchase_month == m))
}
