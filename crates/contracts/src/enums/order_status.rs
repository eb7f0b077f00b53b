use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle status as recorded by the shop
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Approved,
    Invoiced,
    Processing,
    Shipped,
    Delivered,
    Canceled,
    Unavailable,
}

impl OrderStatus {
    /// Code used in source files and query strings
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Created => "created",
            OrderStatus::Approved => "approved",
            OrderStatus::Invoiced => "invoiced",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Canceled => "canceled",
            OrderStatus::Unavailable => "unavailable",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Created => "Created",
            OrderStatus::Approved => "Approved",
            OrderStatus::Invoiced => "Invoiced",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Canceled => "Canceled",
            OrderStatus::Unavailable => "Unavailable",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Created,
            OrderStatus::Approved,
            OrderStatus::Invoiced,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Canceled,
            OrderStatus::Unavailable,
        ]
    }

    /// Case-insensitive parse; `None` for unknown codes
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::all()
            .into_iter()
            .find(|status| status.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_roundtrips_all_statuses() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::from_code(" Delivered "), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::from_code("lost"), None);
    }

    #[test]
    fn test_serializes_as_lowercase_code() {
        let json = serde_json::to_string(&OrderStatus::Canceled).unwrap();
        assert_eq!(json, "\"canceled\"");
    }
}
