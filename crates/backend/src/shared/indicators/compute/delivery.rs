use contracts::shared::indicators::*;

use super::{change_subtitle, status_by_change, IndicatorData};
use crate::shared::format::review_stars;
use crate::shared::indicators::metadata::ids;
use crate::shared::metrics::aggregate::growth_percentage;
use crate::shared::metrics::calculate_delivery_performance;

/// Average delivery days; shorter deliveries count as improvement
pub fn compute_delivery_avg_days(
    data: &IndicatorData<'_>,
    ctx: &IndicatorContext,
) -> IndicatorValue {
    let current = calculate_delivery_performance(&data.period, data.reviews, ctx.target_year());
    let previous =
        calculate_delivery_performance(&data.comparison, data.reviews, ctx.comparison_year());
    let change = growth_percentage(current.avg_delivery_days, previous.avg_delivery_days);
    IndicatorValue {
        id: ids::delivery_avg_days(),
        value: current.avg_delivery_days,
        previous_value: previous.avg_delivery_days,
        change_percent: Some(change),
        status: status_by_change(Some(change), false),
        subtitle: Some(change_subtitle(change)),
    }
}

pub fn compute_delivery_avg_review_score(
    data: &IndicatorData<'_>,
    ctx: &IndicatorContext,
) -> IndicatorValue {
    let current = calculate_delivery_performance(&data.period, data.reviews, ctx.target_year());
    let previous =
        calculate_delivery_performance(&data.comparison, data.reviews, ctx.comparison_year());
    let change = growth_percentage(current.avg_review_score, previous.avg_review_score);
    IndicatorValue {
        id: ids::delivery_avg_review_score(),
        value: current.avg_review_score,
        previous_value: previous.avg_review_score,
        change_percent: Some(change),
        status: status_by_change(Some(change), true),
        subtitle: Some(review_stars(current.avg_review_score)),
    }
}
