// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Contracts for the external collaborators the core depends on but does not
//! implement: the code-generation service and the code-explanation service.
//!
//! Prompt templating, response schemas, and model selection all live behind
//! these traits; the core only sends a prompt plus an optional existing file
//! set and receives a file set back, or a failure, or a cancellation.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::model::ProjectFile;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Cooperative cancellation handle for an in-flight generation request.
///
/// Cancelling only raises a flag; it never interrupts the collaborator. The
/// token is captured when the request starts and checked again at the single
/// settlement point, so a success that arrives after cancellation is provably
/// discardable.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Failure reported by a collaborator, including a malformed response from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    message: String,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ServiceError {}

/// How a generation request settled when it did not produce a file set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The request was aborted on behalf of the user. Not a user-visible
    /// error; callers swallow it.
    Cancelled,
    Service(ServiceError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => f.write_str("generation cancelled"),
            Self::Service(source) => write!(f, "generation failed: {source}"),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cancelled => None,
            Self::Service(source) => Some(source),
        }
    }
}

/// The code-generation collaborator.
///
/// `existing_files` is `Some` for an edit request against the current file
/// set and `None` for a from-scratch generation; the caller decides which
/// mode applies. Implementations should watch `token` and abort early when it
/// is cancelled, but even an implementation that ignores it stays correct:
/// the studio re-checks the token at settlement and discards the result.
pub trait GenerationService: Send + Sync {
    fn generate(
        &self,
        prompt: &str,
        existing_files: Option<&[ProjectFile]>,
        token: CancelToken,
    ) -> BoxFuture<'static, Result<Vec<ProjectFile>, GenerateError>>;
}

/// The code-explanation collaborator.
pub trait ExplanationService: Send + Sync {
    fn explain(&self, code: &str, path: &str) -> BoxFuture<'static, Result<String, ServiceError>>;
}

#[cfg(test)]
mod tests {
    use super::{CancelToken, GenerateError, ServiceError};

    #[test]
    fn token_starts_live_and_stays_cancelled() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());

        let observer = token.clone();
        token.cancel();
        assert!(token.is_cancelled());
        assert!(observer.is_cancelled());
    }

    #[test]
    fn generate_error_display_includes_the_service_message() {
        let err = GenerateError::Service(ServiceError::new("quota exceeded"));
        assert_eq!(err.to_string(), "generation failed: quota exceeded");
        assert_eq!(GenerateError::Cancelled.to_string(), "generation cancelled");
    }
}
