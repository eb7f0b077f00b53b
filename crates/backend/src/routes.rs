use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // PROJECTIONS
        // ========================================
        // P910 Sales Dataset
        .route(
            "/api/p910/sales_dataset",
            get(handlers::p910_sales_dataset::list),
        )
        // ========================================
        // DASHBOARDS
        // ========================================
        // D402 Sales Analytics Dashboard
        .route(
            "/api/d402/sales_analytics",
            get(handlers::d402_sales_analytics::get_sales_analytics),
        )
        .route(
            "/api/d402/years",
            get(handlers::d402_sales_analytics::get_available_years),
        )
        // ========================================
        // INDICATORS
        // ========================================
        .route(
            "/api/indicators/meta",
            get(handlers::indicators::get_indicator_catalog),
        )
        .route(
            "/api/indicators/compute",
            post(handlers::indicators::compute_indicators),
        )
        // ========================================
        // METRICS
        // ========================================
        .route("/api/metrics/revenue", get(handlers::metrics::revenue))
        .route("/api/metrics/orders", get(handlers::metrics::orders))
        .route(
            "/api/metrics/monthly_growth",
            get(handlers::metrics::monthly_growth),
        )
        .route(
            "/api/metrics/monthly_trend",
            get(handlers::metrics::monthly_trend),
        )
        .route("/api/metrics/categories", get(handlers::metrics::categories))
        .route("/api/metrics/states", get(handlers::metrics::states))
        .route("/api/metrics/delivery", get(handlers::metrics::delivery))
        .route(
            "/api/metrics/status_distribution",
            get(handlers::metrics::status_distribution),
        )
}
