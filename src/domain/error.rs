use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("value is not a valid email address: {0}")]
    InvalidEmail(String),

    #[error("field required: {0}")]
    EmptyField(&'static str),

    #[error("User ID already exists: {0}")]
    UserAlreadyExists(String),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Duplicate key")]
    DuplicateKey,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{0}")]
    UploadFailed(String),
}
