use thiserror::Error;

/// Failure reported by a [`crate::Storage`] backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("storage {op} failed: {message}")]
pub struct StorageError {
    pub op: &'static str,
    pub message: String,
}

impl StorageError {
    pub fn read(message: impl Into<String>) -> Self {
        StorageError { op: "read", message: message.into() }
    }
    pub fn write(message: impl Into<String>) -> Self {
        StorageError { op: "write", message: message.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("unknown municipality id '{0}'")]
    UnknownMunicipality(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },
    #[error("municipality '{0}' has fewer than 3 boundary points")]
    DegenerateBoundary(String),
    #[error("coordinate list has an odd number of values ({0})")]
    OddCoordinateCount(usize),
    #[error("invalid number '{0}' in coordinate list")]
    InvalidNumber(String),
    #[error("coordinate {0} outside supported bounds")]
    OutOfBounds(f32),
    #[error("too many {kind}: {got} > {max}")]
    TooMany { kind: &'static str, got: usize, max: usize },
    #[error("malformed catalog json: {0}")]
    Json(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
