use serde::{Deserialize, Serialize};

/// Customer review attached to an order. An order may have several reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub review_id: String,
    pub order_id: String,
    /// 1..=5
    pub review_score: u8,
}

impl Review {
    pub fn new(review_id: impl Into<String>, order_id: impl Into<String>, review_score: u8) -> Self {
        Self {
            review_id: review_id.into(),
            order_id: order_id.into(),
            review_score,
        }
    }
}
