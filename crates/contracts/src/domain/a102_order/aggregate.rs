use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::enums::order_status::OrderStatus;
use crate::shared::date_utils::whole_days_between;

/// Order header: one row per order, regardless of its line items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
    pub order_status: OrderStatus,
    pub order_purchase_timestamp: NaiveDateTime,
    pub order_delivered_customer_date: Option<NaiveDateTime>,
    /// Derived from `order_purchase_timestamp`
    pub purchase_year: i32,
}

impl Order {
    pub fn new(
        order_id: impl Into<String>,
        customer_id: impl Into<String>,
        order_status: OrderStatus,
        order_purchase_timestamp: NaiveDateTime,
        order_delivered_customer_date: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            customer_id: customer_id.into(),
            order_status,
            purchase_year: order_purchase_timestamp.year(),
            order_purchase_timestamp,
            order_delivered_customer_date,
        }
    }

    /// Whole days between purchase and delivery, rounded down; `None` if
    /// not delivered yet
    pub fn delivery_days(&self) -> Option<i64> {
        self.order_delivered_customer_date
            .map(|delivered| whole_days_between(self.order_purchase_timestamp, delivered))
    }
}
