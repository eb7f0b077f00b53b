pub mod date_utils;
pub mod indicators;
pub mod metrics;
