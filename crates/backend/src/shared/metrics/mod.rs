//! Sales metrics engine.
//!
//! Stateless aggregations over a [`SalesDataset`] snapshot and the reference
//! tables. Nothing here performs I/O or mutates its inputs.

pub mod aggregate;
pub mod breakdown;
pub mod dataset;
pub mod delivery;
pub mod revenue;
pub mod status;
pub mod trend;

pub use breakdown::{calculate_geographic_sales, calculate_product_category_sales};
pub use dataset::{DeliveryEnrichment, SalesDataset};
pub use delivery::{calculate_delivery_performance, categorize_delivery_speed};
pub use revenue::{calculate_order_metrics, calculate_revenue_metrics};
pub use status::calculate_order_status_distribution;
pub use trend::{
    calculate_average_monthly_growth, calculate_monthly_growth, filter_sales_data_by_period,
    get_monthly_revenue_trend,
};

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{NaiveDate, NaiveDateTime};
    use contracts::projections::p910_sales_dataset::dto::SalesRecord;

    /// 10:00 on the given day
    pub fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    /// Line item purchased on the first day of the month
    pub fn item(
        order_id: &str,
        order_item_id: u32,
        product_id: &str,
        price: f64,
        year: i32,
        month: u32,
    ) -> SalesRecord {
        SalesRecord::new(order_id, order_item_id, product_id, price, at(year, month, 1))
    }

    /// Single-item order
    pub fn sale(order_id: &str, price: f64, year: i32, month: u32) -> SalesRecord {
        item(order_id, 1, "p1", price, year, month)
    }

    pub fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }
}
