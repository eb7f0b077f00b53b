use thiserror::Error;

/// Data validation and loading errors.
///
/// Numeric degeneracies (empty years, zero baselines) are never reported
/// here; they are handled inside the metric functions.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("missing column `{column}` in {table}")]
    MissingColumn { table: &'static str, column: String },

    #[error("invalid data in {table}, row {row}: {message}")]
    InvalidData {
        table: &'static str,
        row: usize,
        message: String,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {table}: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },
}

impl DataError {
    pub fn invalid(table: &'static str, row: usize, message: impl Into<String>) -> Self {
        DataError::InvalidData {
            table,
            row,
            message: message.into(),
        }
    }
}
