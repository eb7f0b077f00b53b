use serde::{Deserialize, Serialize};

/// Customer reference row (customer_id -> state)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub customer_state: Option<String>,
}

impl Customer {
    pub fn new(customer_id: impl Into<String>, state: Option<&str>) -> Self {
        Self {
            customer_id: customer_id.into(),
            customer_state: state.map(str::to_string),
        }
    }
}
