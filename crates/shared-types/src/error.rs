use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback text shown when an error carries no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Categorization of errors raised while talking to the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    Unauthorized,
    Forbidden,
    NotFound,
    BadRequest,
    Conflict,
    /// The request never produced a response (offline, DNS, CORS, timeout).
    Network,
    /// A response arrived but its body could not be understood.
    InvalidResponse,
    Server,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppErrorKind::Unauthorized => "Unauthorized",
            AppErrorKind::Forbidden => "Forbidden",
            AppErrorKind::NotFound => "NotFound",
            AppErrorKind::BadRequest => "BadRequest",
            AppErrorKind::Conflict => "Conflict",
            AppErrorKind::Network => "Network",
            AppErrorKind::InvalidResponse => "InvalidResponse",
            AppErrorKind::Server => "Server",
        };
        write!(f, "{name}")
    }
}

/// Structured error returned by every API call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InvalidResponse, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Server, message)
    }

    /// Classify a failed HTTP response by its status code.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = match status {
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            400 | 422 => AppErrorKind::BadRequest,
            409 => AppErrorKind::Conflict,
            _ => AppErrorKind::Server,
        };
        Self::new(kind, message)
    }

    /// Message suitable for inline display or a toast.
    pub fn friendly_message(&self) -> String {
        let trimmed = self.message.trim();
        if trimmed.is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// True when the backend rejected the caller's session.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self.kind,
            AppErrorKind::Unauthorized | AppErrorKind::Forbidden
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_mapping() {
        assert_eq!(AppError::from_status(401, "").kind, AppErrorKind::Unauthorized);
        assert_eq!(AppError::from_status(403, "").kind, AppErrorKind::Forbidden);
        assert_eq!(AppError::from_status(404, "").kind, AppErrorKind::NotFound);
        assert_eq!(AppError::from_status(400, "").kind, AppErrorKind::BadRequest);
        assert_eq!(AppError::from_status(422, "").kind, AppErrorKind::BadRequest);
        assert_eq!(AppError::from_status(409, "").kind, AppErrorKind::Conflict);
        assert_eq!(AppError::from_status(500, "").kind, AppErrorKind::Server);
        assert_eq!(AppError::from_status(503, "").kind, AppErrorKind::Server);
    }

    #[test]
    fn friendly_message_returns_trimmed_message() {
        let err = AppError::bad_request("  Cart is empty ");
        assert_eq!(err.friendly_message(), "Cart is empty");
    }

    #[test]
    fn friendly_message_falls_back_when_blank() {
        assert_eq!(AppError::server("").friendly_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(AppError::network("   ").friendly_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::unauthorized("Please login");
        assert_eq!(format!("{}", err), "Unauthorized: Please login");
    }

    #[test]
    fn auth_failures_are_detected() {
        assert!(AppError::unauthorized("x").is_auth_failure());
        assert!(AppError::from_status(403, "x").is_auth_failure());
        assert!(!AppError::network("x").is_auth_failure());
    }

    #[test]
    fn error_roundtrip_through_json() {
        let err = AppError::not_found("Bill not found");
        let json = serde_json::to_string(&err).unwrap();
        let parsed: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}
