#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("User {0} not found")]
    SubjectNotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
