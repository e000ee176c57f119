use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Timeout,
    Connect,
    AuthFailure,
    RateLimited,
    InvalidRequest,
    Server,
    EmptyResponse,
    Unknown,
}

impl ErrorKind {
    pub fn from_status(status: StatusCode) -> Self {
        match status.as_u16() {
            429 => Self::RateLimited,
            401 | 403 => Self::AuthFailure,
            400 | 422 => Self::InvalidRequest,
            500..=599 => Self::Server,
            _ => Self::Unknown,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout | Self::Connect | Self::RateLimited | Self::Server
        )
    }
}

/// Failure reported by an [`AssistantClient`](crate::AssistantClient).
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("request timed out after {secs}s")]
    Timeout { secs: u64 },
    #[error("could not reach assistant endpoint: {0}")]
    Connect(String),
    #[error("authentication failed ({status}): {message}")]
    AuthFailure { status: u16, message: String },
    #[error("rate limited by assistant endpoint: {message}")]
    RateLimited { message: String },
    #[error("request rejected ({status}): {message}")]
    InvalidRequest { status: u16, message: String },
    #[error("assistant endpoint error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("assistant returned no content")]
    EmptyResponse,
    #[error("{0}")]
    Unknown(String),
}

impl AssistantError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Connect(_) => ErrorKind::Connect,
            Self::AuthFailure { .. } => ErrorKind::AuthFailure,
            Self::RateLimited { .. } => ErrorKind::RateLimited,
            Self::InvalidRequest { .. } => ErrorKind::InvalidRequest,
            Self::Server { .. } => ErrorKind::Server,
            Self::EmptyResponse => ErrorKind::EmptyResponse,
            Self::Unknown(_) => ErrorKind::Unknown,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }

    /// Build the error for a non-success HTTP status.
    pub fn from_status(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let code = status.as_u16();
        match ErrorKind::from_status(status) {
            ErrorKind::RateLimited => Self::RateLimited { message },
            ErrorKind::AuthFailure => Self::AuthFailure {
                status: code,
                message,
            },
            ErrorKind::InvalidRequest => Self::InvalidRequest {
                status: code,
                message,
            },
            ErrorKind::Server => Self::Server {
                status: code,
                message,
            },
            _ => Self::Unknown(format!("unexpected status {status}: {message}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            ErrorKind::from_status(StatusCode::TOO_MANY_REQUESTS),
            ErrorKind::RateLimited
        );
        assert_eq!(
            ErrorKind::from_status(StatusCode::UNAUTHORIZED),
            ErrorKind::AuthFailure
        );
        assert_eq!(
            ErrorKind::from_status(StatusCode::FORBIDDEN),
            ErrorKind::AuthFailure
        );
        assert_eq!(
            ErrorKind::from_status(StatusCode::UNPROCESSABLE_ENTITY),
            ErrorKind::InvalidRequest
        );
        assert_eq!(
            ErrorKind::from_status(StatusCode::BAD_GATEWAY),
            ErrorKind::Server
        );
        assert_eq!(
            ErrorKind::from_status(StatusCode::IM_A_TEAPOT),
            ErrorKind::Unknown
        );
    }

    #[test]
    fn retryable_kinds() {
        assert!(AssistantError::Timeout { secs: 60 }.is_retryable());
        assert!(AssistantError::RateLimited {
            message: "slow down".into()
        }
        .is_retryable());
        assert!(!AssistantError::AuthFailure {
            status: 401,
            message: "bad token".into()
        }
        .is_retryable());
        assert!(!AssistantError::EmptyResponse.is_retryable());
    }

    #[test]
    fn from_status_keeps_message() {
        let err = AssistantError::from_status(StatusCode::UNAUTHORIZED, "invalid token");
        assert_eq!(err.kind(), ErrorKind::AuthFailure);
        assert_eq!(err.to_string(), "authentication failed (401): invalid token");
    }

    #[test]
    fn from_status_unknown_includes_status() {
        let err = AssistantError::from_status(StatusCode::NOT_FOUND, "no such model");
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("no such model"));
    }
}
