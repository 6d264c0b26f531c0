use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Message used when the backend returns an empty, non-JSON body.
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid server response";

/// The backend's `{success, message, data}` response wrapper.
///
/// Older endpoints spell the flag `ok`; both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    #[serde(alias = "ok", default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// A failed envelope carrying only a message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    fn failure_error(&self) -> AppError {
        AppError::server(self.message.clone().unwrap_or_default())
    }

    /// Unwrap the payload of a successful envelope.
    pub fn into_data(self) -> Result<T, AppError> {
        if !self.success {
            return Err(self.failure_error());
        }
        self.data
            .ok_or_else(|| AppError::invalid_response("Response contained no data"))
    }

    /// Check the flag only, for endpoints whose payload is irrelevant.
    pub fn into_unit(self) -> Result<(), AppError> {
        if self.success {
            Ok(())
        } else {
            Err(self.failure_error())
        }
    }

    /// The success message, if the backend sent one.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

/// Decode a response body into an envelope without ever panicking.
///
/// A body that is not JSON at all becomes a failed envelope whose message is
/// the raw body text. JSON that does not match the expected payload shape is
/// an `InvalidResponse` error.
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<ApiEnvelope<T>, AppError> {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return Ok(ApiEnvelope::failure(non_json_message(body))),
    };
    serde_json::from_value(value)
        .map_err(|e| AppError::invalid_response(format!("Unexpected response shape: {e}")))
}

/// Decode an un-enveloped JSON object such as the session check response.
pub fn decode_bare<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|_| AppError::invalid_response(non_json_message(body)))
}

fn non_json_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        INVALID_RESPONSE_MESSAGE.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;
    use crate::Category;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_success_envelope_with_data() {
        let body = r#"{"success":true,"message":"Categories retrieved","data":[{"categoryId":1,"categoryName":"Dairy","description":"Milk"}]}"#;
        let env: ApiEnvelope<Vec<Category>> = decode_envelope(body).unwrap();
        let data = env.into_data().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].category_name, "Dairy");
    }

    #[test]
    fn accepts_ok_alias_for_flag() {
        let env: ApiEnvelope<serde_json::Value> = decode_envelope(r#"{"ok":true}"#).unwrap();
        assert!(env.success);
        assert!(env.into_unit().is_ok());
    }

    #[test]
    fn non_json_body_becomes_failed_envelope() {
        let env: ApiEnvelope<Vec<Category>> =
            decode_envelope("<html>Internal Server Error</html>").unwrap();
        assert!(!env.success);
        assert_eq!(
            env.message.as_deref(),
            Some("<html>Internal Server Error</html>")
        );
    }

    #[test]
    fn empty_body_uses_invalid_response_message() {
        let env: ApiEnvelope<Vec<Category>> = decode_envelope("").unwrap();
        let err = env.into_data().unwrap_err();
        assert_eq!(err.message, INVALID_RESPONSE_MESSAGE);
    }

    #[test]
    fn failed_envelope_surfaces_backend_message() {
        let body = r#"{"success":false,"message":"Unauthorized: Please login"}"#;
        let env: ApiEnvelope<Vec<Category>> = decode_envelope(body).unwrap();
        let err = env.into_data().unwrap_err();
        assert_eq!(err.message, "Unauthorized: Please login");
    }

    #[test]
    fn success_without_data_is_invalid_response() {
        let env: ApiEnvelope<Vec<Category>> = decode_envelope(r#"{"success":true}"#).unwrap();
        assert_eq!(env.into_data().unwrap_err().kind, AppErrorKind::InvalidResponse);
    }

    #[test]
    fn mismatched_payload_shape_is_invalid_response() {
        let body = r#"{"success":true,"data":"not a list"}"#;
        let err = decode_envelope::<Vec<Category>>(body).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidResponse);
    }

    #[test]
    fn decode_bare_rejects_text() {
        let err = decode_bare::<serde_json::Value>("Service Unavailable").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidResponse);
        assert_eq!(err.message, "Service Unavailable");
    }

    #[test]
    fn message_or_ignores_blank_messages() {
        let env: ApiEnvelope<()> = ApiEnvelope {
            success: true,
            message: Some("  ".into()),
            data: None,
        };
        assert_eq!(env.message_or("Done"), "Done");
    }
}
