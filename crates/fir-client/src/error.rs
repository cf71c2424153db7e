//! Client error types.

use fir_core::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to the FIR Intelligence API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connection refused, DNS, TLS, reset).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status. `message` is the body's
    /// `error` field when present.
    #[error("{message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Server-provided message, or `HTTP error! status: N`.
        message: String,
    },

    /// A response body could not be decoded into the expected type.
    #[error("decode error: {0}")]
    Decode(String),

    /// Local file access failed (upload source, download target).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured base URL cannot address an HTTP server.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The analysis job reported failure. `message` is the server's text verbatim.
    #[error("{message}")]
    JobFailed {
        /// Server-side job identifier.
        job_id: String,
        /// Message reported by the job.
        message: String,
    },

    /// The analysis job was still pending when the polling ceiling elapsed.
    #[error("Analysis timed out after {elapsed_secs}s. Please try again.")]
    JobTimedOut {
        /// Server-side job identifier.
        job_id: String,
        /// Seconds elapsed since submission.
        elapsed_secs: u64,
    },

    /// Polling was cancelled by the caller. The remote job is left running.
    #[error("analysis polling cancelled for job {job_id}")]
    Cancelled {
        /// Server-side job identifier, empty if cancelled before submission completed.
        job_id: String,
    },

    /// Client-side data error (e.g., cyclic folder hierarchy).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ApiError {
    /// Whether the error is a transport hiccup worth another attempt.
    ///
    /// Only connect and timeout failures qualify. Server-reported errors never do.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(error) => error.is_connect() || error.is_timeout(),
            _ => false,
        }
    }

    /// HTTP status for [`ApiError::Api`] errors.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server reported the resource as missing.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_server_message_verbatim() {
        let err = ApiError::Api {
            status: 400,
            message: "Folder name is required".into(),
        };
        assert_eq!(err.to_string(), "Folder name is required");
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_transient());
    }

    #[test]
    fn timeout_and_job_failure_are_distinct() {
        let timed_out = ApiError::JobTimedOut {
            job_id: "j1".into(),
            elapsed_secs: 120,
        };
        let failed = ApiError::JobFailed {
            job_id: "j1".into(),
            message: "Unreadable scan".into(),
        };
        assert_eq!(
            timed_out.to_string(),
            "Analysis timed out after 120s. Please try again."
        );
        assert_eq!(failed.to_string(), "Unreadable scan");
    }

    #[test]
    fn not_found_detection() {
        let err = ApiError::Api {
            status: 404,
            message: "Document not found".into(),
        };
        assert!(err.is_not_found());
        assert!(!ApiError::Decode("x".into()).is_not_found());
    }
}
