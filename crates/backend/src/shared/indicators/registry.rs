use contracts::shared::indicators::*;
use std::collections::HashMap;

use super::compute::{delivery, sales, IndicatorData};
use super::metadata::ids;

type ComputeFn = fn(&IndicatorData<'_>, &IndicatorContext) -> IndicatorValue;

/// Central registry: maps `IndicatorId` to its compute function.
pub struct IndicatorRegistry {
    fns: HashMap<String, ComputeFn>,
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorRegistry {
    pub fn new() -> Self {
        let mut fns: HashMap<String, ComputeFn> = HashMap::new();

        fns.insert(ids::sales_revenue().0, sales::compute_sales_revenue);
        fns.insert(ids::sales_monthly_growth().0, sales::compute_sales_monthly_growth);
        fns.insert(ids::sales_avg_order_value().0, sales::compute_sales_avg_order_value);
        fns.insert(ids::sales_order_count().0, sales::compute_sales_order_count);
        fns.insert(ids::delivery_avg_days().0, delivery::compute_delivery_avg_days);
        fns.insert(
            ids::delivery_avg_review_score().0,
            delivery::compute_delivery_avg_review_score,
        );

        Self { fns }
    }

    /// Compute a batch of indicators in request order. Unknown ids are
    /// skipped.
    pub fn compute(
        &self,
        ids: &[IndicatorId],
        ctx: &IndicatorContext,
        data: &IndicatorData<'_>,
    ) -> Vec<IndicatorValue> {
        let mut results = Vec::with_capacity(ids.len());

        for id in ids {
            match self.fns.get(&id.0) {
                Some(compute_fn) => results.push(compute_fn(data, ctx)),
                None => tracing::warn!("indicator {} not found in registry", id.0),
            }
        }

        results
    }
}
