use contracts::domain::a104_review::aggregate::Review;
use contracts::shared::indicators::{IndicatorContext, IndicatorStatus};

use crate::shared::metrics::SalesDataset;

pub mod delivery;
pub mod sales;

/// Data an indicator is computed from, derived once per request
pub struct IndicatorData<'a> {
    /// Sales of the target and comparison years, whole years
    pub comparison: SalesDataset,
    /// Sales inside the context's date range
    pub period: SalesDataset,
    pub reviews: &'a [Review],
}

impl<'a> IndicatorData<'a> {
    pub fn new(sales: &SalesDataset, reviews: &'a [Review], ctx: &IndicatorContext) -> Self {
        let (target, comparison) = (ctx.target_year(), ctx.comparison_year());
        Self {
            comparison: sales
                .filtered(|r| r.purchase_year == target || r.purchase_year == comparison),
            period: sales.between(ctx.date_from, ctx.date_to),
            reviews,
        }
    }
}

/// Positive change is good unless `higher_is_good` is false
pub(crate) fn status_by_change(change: Option<f64>, higher_is_good: bool) -> IndicatorStatus {
    match change {
        Some(c) if c > 0.0 => {
            if higher_is_good {
                IndicatorStatus::Good
            } else {
                IndicatorStatus::Bad
            }
        }
        Some(c) if c < 0.0 => {
            if higher_is_good {
                IndicatorStatus::Bad
            } else {
                IndicatorStatus::Good
            }
        }
        _ => IndicatorStatus::Neutral,
    }
}

/// "↗ 12.34%"
pub(crate) fn change_subtitle(change: f64) -> String {
    format!("{} {:.2}%", crate::shared::format::trend_arrow(change), change)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_by_change() {
        assert_eq!(status_by_change(Some(3.0), true), IndicatorStatus::Good);
        assert_eq!(status_by_change(Some(-3.0), true), IndicatorStatus::Bad);
        assert_eq!(status_by_change(Some(3.0), false), IndicatorStatus::Bad);
        assert_eq!(status_by_change(Some(-3.0), false), IndicatorStatus::Good);
        assert_eq!(status_by_change(Some(0.0), true), IndicatorStatus::Neutral);
        assert_eq!(status_by_change(None, true), IndicatorStatus::Neutral);
    }

    #[test]
    fn test_change_subtitle() {
        assert_eq!(change_subtitle(12.346), "↗ 12.35%");
        assert_eq!(change_subtitle(0.0), "→ 0.00%");
    }
}
