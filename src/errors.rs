use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchSummaryError {
    #[error("report error: {0}")]
    ReportError(String),
    #[error("summary not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl BenchSummaryError {
    pub fn report<T: Into<String>>(msg: T) -> Self {
        BenchSummaryError::ReportError(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        BenchSummaryError::NotFound(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        BenchSummaryError::InvalidInput(msg.into())
    }
}
