use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::shared::date_utils::whole_days_between;

/// One line item of a sold order, denormalized with its order, product,
/// customer and review attributes (P910 sales dataset)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub order_id: String,
    pub order_item_id: u32,
    pub product_id: String,
    /// Line-item price
    pub price: f64,

    pub order_purchase_timestamp: NaiveDateTime,
    pub order_delivered_customer_date: Option<NaiveDateTime>,
    pub purchase_year: i32,
    pub purchase_month: u32,

    // Enrichment
    pub delivery_days: Option<i64>,
    /// Scores of every review of the order, in review-table order
    #[serde(default)]
    pub review_scores: Vec<u8>,
    pub product_category_name: Option<String>,
    pub customer_state: Option<String>,
}

impl SalesRecord {
    /// Create a bare line item; year and month are taken from the timestamp
    pub fn new(
        order_id: impl Into<String>,
        order_item_id: u32,
        product_id: impl Into<String>,
        price: f64,
        order_purchase_timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            order_item_id,
            product_id: product_id.into(),
            price,
            purchase_year: order_purchase_timestamp.year(),
            purchase_month: order_purchase_timestamp.month(),
            order_purchase_timestamp,
            order_delivered_customer_date: None,
            delivery_days: None,
            review_scores: Vec::new(),
            product_category_name: None,
            customer_state: None,
        }
    }

    /// Set the delivery date and the derived whole-day duration (rounded
    /// down, negative when delivered before purchase)
    pub fn delivered_at(mut self, delivered: NaiveDateTime) -> Self {
        self.order_delivered_customer_date = Some(delivered);
        self.delivery_days = Some(whole_days_between(self.order_purchase_timestamp, delivered));
        self
    }

    /// Attach one more review score of the order
    pub fn with_review_score(mut self, score: u8) -> Self {
        self.review_scores.push(score);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.product_category_name = Some(category.into());
        self
    }

    pub fn with_customer_state(mut self, state: impl Into<String>) -> Self {
        self.customer_state = Some(state.into());
        self
    }
}

/// Query for the raw sales dataset listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesPeriodQuery {
    pub year: i32,
    #[serde(default)]
    pub month: Option<u32>,
}
