use crate::client::{bare_from_response, ApiClient};
use shared_types::{
    AppError, LoginRequest, LoginResponse, RegisterRequest, SessionInfo, SessionUser,
};

/// Session operations the role router depends on.
///
/// Kept as a trait so the routing and logout flows can be exercised
/// against an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait SessionApi {
    /// Who is logged in, per `GET /api/auth/me`.
    async fn current_session(&self) -> Result<SessionInfo, AppError>;

    /// End the server-side session.
    async fn logout(&self) -> Result<(), AppError>;
}

impl SessionApi for ApiClient {
    async fn current_session(&self) -> Result<SessionInfo, AppError> {
        let (status, body) = self.get_raw("/api/auth/me").await?;
        bare_from_response(status, &body)
    }

    async fn logout(&self) -> Result<(), AppError> {
        self.post_unit("/api/auth/logout", &serde_json::json!({}))
            .await
            .map(|_| ())
    }
}

impl ApiClient {
    /// Log in and return the user the new session belongs to.
    pub async fn login(&self, request: &LoginRequest) -> Result<SessionUser, AppError> {
        let (status, body) = self.post_raw("/api/auth/login", request).await?;
        login_result(status, &body)
    }

    /// Create a customer account; returns the backend's confirmation text.
    pub async fn register(&self, request: &RegisterRequest) -> Result<String, AppError> {
        let message = self.post_unit("/api/auth/register", request).await?;
        if message.is_empty() {
            Ok("Registration successful. Please log in.".to_string())
        } else {
            Ok(message)
        }
    }
}

const LOGIN_FAILED_MESSAGE: &str = "Invalid username or password";

/// Interpret a login response. A rejected login keeps the backend's
/// message whatever the status code.
pub(crate) fn login_result(status: u16, body: &str) -> Result<SessionUser, AppError> {
    let response: LoginResponse = match shared_types::decode_bare(body) {
        Ok(response) => response,
        Err(_) => return bare_from_response(status, body),
    };
    if !response.success || !(200..300).contains(&status) {
        let message = response
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string());
        return Err(AppError::unauthorized(message));
    }
    response
        .into_user()
        .ok_or_else(|| AppError::invalid_response("Login response did not include a user"))
}
