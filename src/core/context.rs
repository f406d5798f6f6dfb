use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use crate::core::library::{LibraryError, LibraryResult};

// RequestContext carries the caller's cancellation signal and optional deadline into the service.
#[derive(Debug, Clone)]
pub struct RequestContext {
    deadline: Option<Instant>,
    token: CancellationToken,
}

impl RequestContext {
    // A context that never expires and is only cancelled through its token.
    pub fn background() -> Self {
        Self {
            deadline: None,
            token: CancellationToken::new(),
        }
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            token: CancellationToken::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    // Cancels this context and every clone of it.
    pub fn cancel(&self) {
        self.token.cancel()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.map(|d| Instant::now() >= d).unwrap_or(false)
    }

    // Fails fast when the caller has already given up; cancellation wins over an expired deadline.
    pub fn check(&self, operation: &str) -> LibraryResult<()> {
        if self.is_cancelled() {
            return Err(LibraryError::cancelled(format!("{} cancelled by caller", operation).as_str()));
        }
        if self.is_expired() {
            return Err(LibraryError::deadline_exceeded(format!("{} deadline exceeded", operation).as_str()));
        }
        Ok(())
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::background()
    }
}
