use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d402_sales_analytics::dto::{
    SalesAnalyticsRequest, SalesAnalyticsResponse,
};

use crate::dashboards::d402_sales_analytics::service;
use crate::shared::config::get_config;
use crate::shared::data::store::get_store;

/// GET /api/d402/sales_analytics?start_date=2023-01-01&end_date=2023-12-31
pub async fn get_sales_analytics(
    Query(request): Query<SalesAnalyticsRequest>,
) -> Result<Json<SalesAnalyticsResponse>, StatusCode> {
    tracing::info!(
        "D402 Dashboard: Getting sales analytics for {:?}..{:?}",
        request.start_date,
        request.end_date
    );

    let (store, config) = match (get_store(), get_config()) {
        (Ok(store), Ok(config)) => (store, config),
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!("D402 Dashboard: {e:#}");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    match service::get_sales_analytics(request, store, &config.dashboard) {
        Ok(response) => {
            tracing::info!(
                "D402 Dashboard: Returning {} KPIs, {} categories, {} states",
                response.kpis.len(),
                response.top_categories.len(),
                response.revenue_by_state.len()
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::warn!("D402 Dashboard: Invalid request: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}

/// GET /api/d402/years
pub async fn get_available_years() -> Result<Json<Vec<i32>>, StatusCode> {
    match get_store() {
        Ok(store) => {
            let years = service::get_available_years(store);
            tracing::info!("D402 Dashboard: Returning {} available years", years.len());
            Ok(Json(years))
        }
        Err(e) => {
            tracing::error!("D402 Dashboard: Failed to get years: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
