// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Submit(SubmitError),
}

/// Specific error types for a failed form submission.
/// Used to provide user-friendly messages in the error toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The request did not complete within the configured timeout.
    Timeout,

    /// The endpoint could not be reached (DNS failure, refused connection).
    Unreachable(String),

    /// The endpoint answered with a non-success HTTP status.
    Status(u16),

    /// The HTTP client could not be constructed or the request could not
    /// be assembled.
    Request(String),

    /// Generic error with raw message
    Other(String),
}

impl SubmitError {
    /// Categorizes a transport error reported by the HTTP client.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            return SubmitError::Timeout;
        }

        if err.is_connect() {
            return SubmitError::Unreachable(err.to_string());
        }

        if err.is_builder() || err.is_request() {
            return SubmitError::Request(err.to_string());
        }

        SubmitError::Other(err.to_string())
    }

    /// Returns whether resubmitting without any change could succeed.
    /// All submission failures are local to one attempt, so this is
    /// currently always true; the method keeps the call sites honest.
    pub fn is_retryable(&self) -> bool {
        true
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Timeout => write!(f, "The request timed out. Please try again."),
            SubmitError::Unreachable(_) => {
                write!(f, "Could not reach the server. Check your connection.")
            }
            SubmitError::Status(code) => {
                write!(f, "The server rejected the message (HTTP {}).", code)
            }
            SubmitError::Request(msg) => write!(f, "Could not send the request: {}", msg),
            SubmitError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Submit(e) => write!(f, "Submission Error: {}", e),
        }
    }
}

impl From<SubmitError> for Error {
    fn from(err: SubmitError) -> Self {
        Error::Submit(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn submit_error_status_mentions_code() {
        let err = SubmitError::Status(422);
        assert!(format!("{}", err).contains("422"));
    }

    #[test]
    fn submit_error_timeout_suggests_retry() {
        let err = SubmitError::Timeout;
        assert!(format!("{}", err).contains("try again"));
        assert!(err.is_retryable());
    }

    #[test]
    fn submit_error_wraps_into_error() {
        let err: Error = SubmitError::Timeout.into();
        assert!(matches!(err, Error::Submit(SubmitError::Timeout)));
    }
}
