use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Order id must not be empty")]
    EmptyOrderId,
    #[error("Order id {0} already exists")]
    DuplicateOrderId(String),
    #[error("Order has no items")]
    NoItems,
    #[error("Not a positive integer: {0:?}")]
    InvalidNumber(String),
    #[error("Index {index} out of range (1..={len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Store {path} is corrupt: {detail}")]
    CorruptStore { path: String, detail: String },
    #[error("Storage error: {0}")]
    Storage(String),
}
