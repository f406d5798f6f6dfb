use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    // A required argument is missing or malformed, detected before the store is consulted.
    InvalidArgument {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    Cancelled {
        message: String,
    },
    DeadlineExceeded {
        message: String,
    },
    // Anything else going wrong inside the store; not expected in normal operation.
    Internal {
        message: String,
        reason_code: Option<String>,
    },
}

// ErrorKind lets callers branch on the failure without parsing messages
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Cancelled,
    DeadlineExceeded,
    Internal,
}

impl LibraryError {
    pub fn invalid_argument(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::InvalidArgument { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn cancelled(message: &str) -> LibraryError {
        LibraryError::Cancelled { message: message.to_string() }
    }

    pub fn deadline_exceeded(message: &str) -> LibraryError {
        LibraryError::DeadlineExceeded { message: message.to_string() }
    }

    pub fn internal(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Internal { message: message.to_string(), reason_code }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LibraryError::InvalidArgument { .. } => { ErrorKind::InvalidArgument }
            LibraryError::NotFound { .. } => { ErrorKind::NotFound }
            LibraryError::Cancelled { .. } => { ErrorKind::Cancelled }
            LibraryError::DeadlineExceeded { .. } => { ErrorKind::DeadlineExceeded }
            LibraryError::Internal { .. } => { ErrorKind::Internal }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::InvalidArgument { message, .. } => { message.as_str() }
            LibraryError::NotFound { message } => { message.as_str() }
            LibraryError::Cancelled { message } => { message.as_str() }
            LibraryError::DeadlineExceeded { message } => { message.as_str() }
            LibraryError::Internal { message, .. } => { message.as_str() }
        }
    }

    // Prefixes the message with the failing operation and its argument, keeping the variant
    // so the original kind still reaches the caller.
    pub fn context(self, operation: &str, arg: &str) -> LibraryError {
        let target = if arg.is_empty() { operation.to_string() } else { format!("{} {}", operation, arg) };
        let prefix = |message: String| format!("could not {}: {}", target, message);
        match self {
            LibraryError::InvalidArgument { message, reason_code } => {
                LibraryError::InvalidArgument { message: prefix(message), reason_code }
            }
            LibraryError::NotFound { message } => {
                LibraryError::NotFound { message: prefix(message) }
            }
            LibraryError::Cancelled { message } => {
                LibraryError::Cancelled { message: prefix(message) }
            }
            LibraryError::DeadlineExceeded { message } => {
                LibraryError::DeadlineExceeded { message: prefix(message) }
            }
            LibraryError::Internal { message, reason_code } => {
                LibraryError::Internal { message: prefix(message), reason_code }
            }
        }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::InvalidArgument { .. } => { false }
            LibraryError::NotFound { .. } => { false }
            LibraryError::Cancelled { .. } => { true }
            LibraryError::DeadlineExceeded { .. } => { true }
            LibraryError::Internal { .. } => { false }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::internal(
            format!("serde json parsing {:?}", err).as_str(), None)
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::InvalidArgument { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Cancelled { message } => {
                write!(f, "{}", message)
            }
            LibraryError::DeadlineExceeded { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Internal { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for Repository .
pub type LibraryResult<T> = Result<T, LibraryError>;
