use thiserror::Error;

/// Error type used by service layer functions.
///
/// Each variant carries the message shown to the client.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The request was malformed.
    #[error("{0}")]
    Form(String),
    /// A referenced resource does not exist or was deleted.
    #[error("{0}")]
    NotFound(String),
    /// An unexpected internal error occurred.
    #[error("{0}")]
    Internal(String),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
