use thiserror::Error;

use crate::domain::errors::DomainError;

/// Failures that end the console session.
///
/// Domain errors are normally reported to the operator and the menu keeps
/// running; only terminal I/O failures propagate out of the loop.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.to_string(), "Terminal I/O error: closed");
    }

    #[test]
    fn domain_error_is_transparent() {
        let err: AppError = DomainError::NoItems.into();
        assert_eq!(err.to_string(), "Order has no items");
        assert!(matches!(err, AppError::Domain(DomainError::NoItems)));
    }
}
