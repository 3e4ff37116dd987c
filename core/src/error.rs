//! Error types for the blog data client.
//!
//! # Design
//! Callers only distinguish two outcomes: talking to the backend failed
//! (`FetchFailure`), or the in-memory store has no such post (`NotFound`).
//! A remote 404 is a `FetchFailure` like any other non-2xx status; the cause
//! keeps the status and body for debugging.

use std::fmt;

use thiserror::Error;

/// Errors returned by every `BlogStore` operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend could not be reached, answered with a non-2xx status, or
    /// sent a body that is not the expected JSON.
    #[error("failed to {action}: {cause}")]
    FetchFailure {
        action: Action,
        #[source]
        cause: FetchCause,
    },

    /// No post with this id exists in the in-memory store.
    #[error("blog {id} not found")]
    NotFound { id: u64 },
}

impl ApiError {
    pub fn fetch(action: Action, cause: FetchCause) -> Self {
        ApiError::FetchFailure { action, cause }
    }

    /// HTTP status of a failed fetch, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::FetchFailure {
                cause: FetchCause::Status { status, .. },
                ..
            } => Some(*status),
            _ => None,
        }
    }
}

/// The operation a `FetchFailure` belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ListBlogs,
    GetBlog,
    CreateBlog,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::ListBlogs => write!(f, "fetch blogs"),
            Action::GetBlog => write!(f, "fetch blog"),
            Action::CreateBlog => write!(f, "create blog"),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchCause {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("invalid request body: {0}")]
    Encode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failure_names_the_action() {
        let err = ApiError::fetch(
            Action::CreateBlog,
            FetchCause::Status {
                status: 500,
                body: "boom".to_string(),
            },
        );
        assert_eq!(err.to_string(), "failed to create blog: HTTP 500: boom");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn not_found_has_no_status() {
        let err = ApiError::NotFound { id: 999 };
        assert_eq!(err.to_string(), "blog 999 not found");
        assert_eq!(err.status(), None);
    }
}
