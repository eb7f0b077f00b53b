use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::delivery_speed::DeliverySpeed;
use crate::enums::order_status::OrderStatus;

// ---------------------------------------------------------------------------
// Year-over-year comparisons
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueMetrics {
    pub total_revenue_target: f64,
    pub total_revenue_comparison: f64,
    /// Decimal growth, 0 when the comparison revenue is 0
    pub revenue_growth_rate: f64,
    pub revenue_growth_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderMetrics {
    /// `None` when the year has no orders
    pub avg_order_value_target: Option<f64>,
    pub avg_order_value_comparison: Option<f64>,
    pub total_orders_target: usize,
    pub total_orders_comparison: usize,
    pub aov_growth_percentage: f64,
    pub orders_growth_percentage: f64,
}

// ---------------------------------------------------------------------------
// Time series
// ---------------------------------------------------------------------------

/// Month-over-month revenue change. `growth` is a decimal rate and is
/// `None` for the first month with sales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyGrowth {
    pub month: u32,
    pub revenue: f64,
    pub growth: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub year: i32,
    pub month: u32,
    /// Sum of line-item prices
    pub price: f64,
}

// ---------------------------------------------------------------------------
// Breakdowns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySales {
    pub product_category_name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSales {
    pub customer_state: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusShare {
    pub order_status: OrderStatus,
    /// Fraction in 0..=1
    pub share: f64,
}

// ---------------------------------------------------------------------------
// Delivery
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryPerformance {
    pub avg_delivery_days: Option<f64>,
    pub avg_review_score: Option<f64>,
    /// Mean review score per delivery bucket; buckets without reviews are absent
    pub delivery_categories_performance: BTreeMap<DeliverySpeed, f64>,
}
