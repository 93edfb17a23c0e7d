/// Errors raised by domain-level checks, before anything reaches the store.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid query parameter: {0}")]
    InvalidParameter(String),
}
