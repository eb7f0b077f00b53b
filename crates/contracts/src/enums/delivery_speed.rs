use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery duration bucket used to compare customer satisfaction.
///
/// Upper bounds are inclusive: 3 days is still `UpTo3Days`, 7 days is still
/// `From4To7Days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DeliverySpeed {
    #[serde(rename = "1-3 days")]
    UpTo3Days,
    #[serde(rename = "4-7 days")]
    From4To7Days,
    #[serde(rename = "8+ days")]
    EightPlusDays,
}

impl DeliverySpeed {
    pub fn from_days(days: i64) -> Self {
        if days <= 3 {
            DeliverySpeed::UpTo3Days
        } else if days <= 7 {
            DeliverySpeed::From4To7Days
        } else {
            DeliverySpeed::EightPlusDays
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliverySpeed::UpTo3Days => "1-3 days",
            DeliverySpeed::From4To7Days => "4-7 days",
            DeliverySpeed::EightPlusDays => "8+ days",
        }
    }

    pub fn all() -> Vec<DeliverySpeed> {
        vec![
            DeliverySpeed::UpTo3Days,
            DeliverySpeed::From4To7Days,
            DeliverySpeed::EightPlusDays,
        ]
    }
}

impl fmt::Display for DeliverySpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
