// Projection handlers
pub mod p910_sales_dataset;

// Dashboard handlers
pub mod d402_sales_analytics;

// Metric and indicator handlers
pub mod indicators;
pub mod metrics;
