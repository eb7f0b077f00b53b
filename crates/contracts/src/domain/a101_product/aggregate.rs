use serde::{Deserialize, Serialize};

/// Product reference row (product_id -> category)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    /// `None` when the catalogue has no category for the product
    pub product_category_name: Option<String>,
}

impl Product {
    pub fn new(product_id: impl Into<String>, category: Option<&str>) -> Self {
        Self {
            product_id: product_id.into(),
            product_category_name: category.map(str::to_string),
        }
    }
}
