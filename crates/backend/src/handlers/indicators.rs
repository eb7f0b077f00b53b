use axum::{http::StatusCode, Json};
use contracts::shared::indicators::*;

use crate::shared::data::store::get_store;
use crate::shared::indicators::compute::IndicatorData;
use crate::shared::indicators::{metadata, registry::IndicatorRegistry};

/// POST /api/indicators/compute
///
/// Batch-computes a set of indicators for the given context (period,
/// comparison year).
pub async fn compute_indicators(
    Json(req): Json<ComputeIndicatorsRequest>,
) -> Result<Json<ComputeIndicatorsResponse>, StatusCode> {
    tracing::info!(
        "Indicators: computing {} indicators for period {}..{}",
        req.indicator_ids.len(),
        req.context.date_from,
        req.context.date_to,
    );

    if req.context.date_from > req.context.date_to {
        tracing::warn!("Indicators: rejected inverted period");
        return Err(StatusCode::BAD_REQUEST);
    }

    let store = get_store().map_err(|e| {
        tracing::error!("Indicators: {e:#}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let data = IndicatorData::new(store.sales(), store.source().reviews(), &req.context);
    let values = IndicatorRegistry::new().compute(&req.indicator_ids, &req.context, &data);

    tracing::info!("Indicators: returning {} values", values.len());
    Ok(Json(ComputeIndicatorsResponse { values }))
}

/// GET /api/indicators/meta
///
/// Returns the full catalogue of available indicators and sets.
pub async fn get_indicator_catalog() -> Json<IndicatorCatalogResponse> {
    Json(metadata::build_catalog())
}
