use axum::{extract::Query, http::StatusCode, Json};
use contracts::projections::p910_sales_dataset::dto::{SalesPeriodQuery, SalesRecord};

use crate::projections::p910_sales_dataset::service;
use crate::shared::data::store::get_store;

/// GET /api/p910/sales_dataset?year=2023&month=4
pub async fn list(
    Query(query): Query<SalesPeriodQuery>,
) -> Result<Json<Vec<SalesRecord>>, StatusCode> {
    if query.month.is_some_and(|m| !(1..=12).contains(&m)) {
        return Err(StatusCode::BAD_REQUEST);
    }
    match get_store() {
        Ok(store) => Ok(Json(service::list_by_period(store, &query))),
        Err(e) => {
            tracing::error!("Failed to list sales dataset: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
