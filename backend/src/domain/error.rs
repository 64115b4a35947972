//! Domain-level error payload.
//!
//! Services return [`Error`] when a page cannot be assembled. Inbound
//! adapters translate the [`ErrorCode`] into a status code; the payload is
//! transport agnostic and serialises to `{code, message, traceId}`.

use serde::{Deserialize, Serialize};

use super::TraceId;

/// Failure category understood by every adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request could not be interpreted.
    InvalidRequest,
    /// Nothing is served at the requested location.
    NotFound,
    /// The catalogue store is unreachable.
    ServiceUnavailable,
    /// Anything else.
    InternalError,
}

/// Rejections raised while building an [`Error`] from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    #[error("error message must not be empty")]
    EmptyMessage,
    #[error("trace identifier `{value}` is not a UUID")]
    InvalidTraceId { value: String },
}

/// Domain error with an optional request correlation id.
///
/// Constructors pick up [`TraceId::current`], so errors raised while a
/// request is being served are correlated without extra plumbing.
///
/// # Examples
/// ```
/// use donut_shop::domain::{Error, ErrorCode};
///
/// let err = Error::service_unavailable("catalogue store offline");
/// assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
/// assert_eq!(err.to_string(), "catalogue store offline");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(try_from = "ErrorBody", into = "ErrorBody")]
#[error("{message}")]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<TraceId>,
}

const BLANK_MESSAGE_FALLBACK: &str = "unspecified error";

impl Error {
    /// Build an error in the current trace scope.
    ///
    /// A blank `message` is replaced with a generic one rather than
    /// rejected; use [`Error::try_new`] to treat it as a failure.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::try_new(code, message).unwrap_or_else(|_| Self {
            code,
            message: BLANK_MESSAGE_FALLBACK.to_owned(),
            trace_id: TraceId::current(),
        })
    }

    /// Build an error, rejecting blank messages.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            trace_id: TraceId::current(),
        })
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Correlation id captured at construction or attached later.
    pub fn trace_id(&self) -> Option<TraceId> {
        self.trace_id
    }

    /// Replace the correlation id.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Wire form of [`Error`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ErrorBody {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "trace_id")]
    trace_id: Option<String>,
}

impl From<Error> for ErrorBody {
    fn from(value: Error) -> Self {
        Self {
            code: value.code,
            message: value.message,
            trace_id: value.trace_id.map(|id| id.to_string()),
        }
    }
}

impl TryFrom<ErrorBody> for Error {
    type Error = ErrorValidationError;

    fn try_from(body: ErrorBody) -> Result<Self, Self::Error> {
        if body.message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        let trace_id = body
            .trace_id
            .map(|value| {
                value
                    .parse::<TraceId>()
                    .map_err(|_| ErrorValidationError::InvalidTraceId { value })
            })
            .transpose()?;
        Ok(Self {
            code: body.code,
            message: body.message,
            trace_id,
        })
    }
}
