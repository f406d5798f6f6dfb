use async_trait::async_trait;
use crate::core::context::RequestContext;
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    Cancelled {
        message: String,
    },
    Timeout {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    pub fn validation(message: &str) -> CommandError {
        CommandError::Validation { message: message.to_string(), reason_code: None }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, ctx: &RequestContext, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::InvalidArgument { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Cancelled { message } => {
                CommandError::Cancelled { message }
            }
            LibraryError::DeadlineExceeded { message } => {
                CommandError::Timeout { message }
            }
            LibraryError::Internal { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable: false }
            }
        }
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::Serialization { message: format!("{}", err) }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_convert_library_errors() {
        assert!(matches!(CommandError::from(LibraryError::invalid_argument("test", None)), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(LibraryError::not_found("test")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::cancelled("test")), CommandError::Cancelled { .. }));
        assert!(matches!(CommandError::from(LibraryError::deadline_exceeded("test")), CommandError::Timeout { .. }));
        assert!(matches!(CommandError::from(LibraryError::internal("test", None)), CommandError::Runtime { retryable: false, .. }));
    }

    #[tokio::test]
    async fn test_should_keep_message() {
        let err = CommandError::from(LibraryError::not_found("book not found for 7"));
        assert_eq!(CommandError::NotFound { message: "book not found for 7".to_string() }, err);
    }
}
