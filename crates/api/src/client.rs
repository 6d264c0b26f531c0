use crate::config::{api_config, ApiConfig};
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{decode_bare, decode_envelope, AppError, ApiEnvelope};

/// Handle to the backend. Cloning is cheap; all clones share one
/// connection pool and, on native targets, one cookie jar.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

/// Clients are equal when they talk to the same backend.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .cookie_store(true)
            .timeout(std::time::Duration::from_secs(config.timeout_secs));
        let http = builder
            .build()
            .map_err(|e| AppError::network(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Client for the process-wide configuration.
    pub fn from_config() -> Result<Self, AppError> {
        Self::new(api_config())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `path` with one extra, percent-encoded path segment.
    pub fn url_with_segment(&self, path: &str, segment: &str) -> Result<String, AppError> {
        let mut url = Url::parse(&self.url(path))
            .map_err(|e| AppError::bad_request(format!("Invalid request URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| AppError::bad_request("Invalid request URL"))?
            .pop_if_empty()
            .push(segment);
        Ok(url.into())
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        tracing::debug!(%method, url, "API request");
        let builder = self.http.request(method, url);
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    /// Send and read the whole body; only transport failures are errors here.
    async fn execute(&self, builder: RequestBuilder) -> Result<(u16, String), AppError> {
        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        if !(200..300).contains(&status) {
            tracing::warn!(status, "API request failed");
        }
        Ok((status, body))
    }

    pub(crate) async fn get_raw(&self, path: &str) -> Result<(u16, String), AppError> {
        self.execute(self.request(Method::GET, &self.url(path))).await
    }

    pub(crate) async fn post_raw<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(u16, String), AppError> {
        self.execute(self.request(Method::POST, &self.url(path)).json(body))
            .await
    }

    /// GET an enveloped payload.
    pub(crate) async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let (status, body) = self.get_raw(path).await?;
        envelope_from_response::<T>(status, &body)?.into_data()
    }

    /// GET an enveloped payload from a URL built by the caller.
    pub(crate) async fn get_data_at<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let (status, body) = self.execute(self.request(Method::GET, url)).await?;
        envelope_from_response::<T>(status, &body)?.into_data()
    }

    /// POST a JSON body and return the enveloped payload.
    pub(crate) async fn post_data<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (status, text) = self.post_raw(path, body).await?;
        envelope_from_response::<T>(status, &text)?.into_data()
    }

    /// POST a JSON body; the envelope's payload is ignored.
    pub(crate) async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<String, AppError> {
        let (status, text) = self.post_raw(path, body).await?;
        let envelope = envelope_from_response::<serde_json::Value>(status, &text)?;
        let message = envelope.message_or("");
        envelope.into_unit().map(|_| message)
    }

    /// DELETE at a caller-built URL; the envelope's payload is ignored.
    pub(crate) async fn delete_unit_at(&self, url: &str) -> Result<(), AppError> {
        let (status, text) = self.execute(self.request(Method::DELETE, url)).await?;
        envelope_from_response::<serde_json::Value>(status, &text)?.into_unit()
    }
}

fn transport_error(e: reqwest::Error) -> AppError {
    if e.is_decode() {
        AppError::invalid_response(format!("Could not read server response: {e}"))
    } else {
        AppError::network(format!("Unable to reach the server: {e}"))
    }
}

/// Interpret a response as an envelope.
///
/// A non-2xx status is always an error classified by the status; the
/// envelope's message is used when the body has one.
pub fn envelope_from_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<ApiEnvelope<T>, AppError> {
    if (200..300).contains(&status) {
        return decode_envelope(body);
    }
    let message = decode_envelope::<serde_json::Value>(body)
        .map(|env| env.message_or(""))
        .unwrap_or_default();
    Err(AppError::from_status(status, status_message(status, message)))
}

/// Interpret a response as an un-enveloped JSON object.
pub fn bare_from_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, AppError> {
    if (200..300).contains(&status) {
        return decode_bare(body);
    }
    let message = decode_envelope::<serde_json::Value>(body)
        .map(|env| env.message_or(""))
        .unwrap_or_default();
    Err(AppError::from_status(status, status_message(status, message)))
}

fn status_message(status: u16, message: String) -> String {
    if message.trim().is_empty() {
        format!("Request failed with status {status}")
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{AppErrorKind, Category, SessionInfo};

    fn client() -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: "http://localhost:8081/syos".into(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn url_joins_base_and_path() {
        let c = client();
        assert_eq!(c.url("/api/auth/me"), "http://localhost:8081/syos/api/auth/me");
        assert_eq!(c.url("api/auth/me"), "http://localhost:8081/syos/api/auth/me");
    }

    #[test]
    fn url_with_segment_encodes() {
        let c = client();
        assert_eq!(
            c.url_with_segment("/api/cashier/bills", "BILL-0001").unwrap(),
            "http://localhost:8081/syos/api/cashier/bills/BILL-0001"
        );
        assert_eq!(
            c.url_with_segment("/api/customer/cart", "P 1/2").unwrap(),
            "http://localhost:8081/syos/api/customer/cart/P%201%2F2"
        );
    }

    #[test]
    fn ok_status_decodes_envelope() {
        let body = r#"{"success":true,"data":[{"categoryId":3,"categoryName":"Bakery"}]}"#;
        let data = envelope_from_response::<Vec<Category>>(200, body)
            .unwrap()
            .into_data()
            .unwrap();
        assert_eq!(data[0].category_id, 3);
    }

    #[test]
    fn error_status_uses_envelope_message() {
        let body = r#"{"success":false,"message":"Unauthorized: Please login"}"#;
        let err = envelope_from_response::<Vec<Category>>(401, body).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "Unauthorized: Please login");
    }

    #[test]
    fn error_status_with_text_body_uses_text() {
        let err = envelope_from_response::<Vec<Category>>(500, "Database down").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Server);
        assert_eq!(err.message, "Database down");
    }

    #[test]
    fn error_status_with_empty_body_reports_invalid_response() {
        let err = envelope_from_response::<Vec<Category>>(404, "").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "Invalid server response");
    }

    #[test]
    fn error_status_with_messageless_json_names_status() {
        let err = envelope_from_response::<Vec<Category>>(409, r#"{"success":false}"#).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Conflict);
        assert_eq!(err.message, "Request failed with status 409");
    }

    #[test]
    fn bare_response_decodes_session() {
        let info: SessionInfo =
            bare_from_response(200, r#"{"loggedIn":true,"username":"admin","roleId":1}"#).unwrap();
        assert!(info.logged_in);
        let err = bare_from_response::<SessionInfo>(401, r#"{"message":"No session"}"#).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "No session");
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_network_error() {
        let c = ApiClient::new(&ApiConfig {
            base_url: "http://127.0.0.1:9".into(),
            timeout_secs: 2,
        })
        .unwrap();
        let err = c.cashier_bills().await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Network);
    }
}
