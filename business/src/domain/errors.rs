/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A write to durable storage failed.
    #[error("repository.persistence")]
    Persistence,
    /// Durable storage could not be read or reached.
    #[error("repository.database_error")]
    DatabaseError,
    /// A stored value could not be encoded or decoded.
    #[error("repository.serialization")]
    Serialization,
}

impl RepositoryError {
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
    pub fn serialization() -> Self {
        RepositoryError::Serialization
    }
}
