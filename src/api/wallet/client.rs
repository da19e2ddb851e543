use reqwest::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use super::models::{ApiError, Balance, Transaction};
use tracing::{debug, warn};

/// Read side of the wallet backend, as seen by the renderers
pub trait WalletSource {
    /// GET /balance
    async fn fetch_balance(&self) -> Result<Balance, ApiError>;

    /// GET /transactions
    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, ApiError>;
}

/// HTTP client for the wallet backend
pub struct WalletApiClient {
    http_client: HttpClient,
    base_url: String,
}

impl WalletApiClient {
    /// Create a new client for the backend at `base_url`
    pub fn new(base_url: &str) -> Self {
        Self::with_http_client(base_url, HttpClient::new())
    }

    /// Create a client around a preconfigured reqwest client
    pub fn with_http_client(base_url: &str, http_client: HttpClient) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Map a non-success response to an error based on its status code
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();
        let body_text = body_text.trim().to_string();

        match status_code {
            404 => ApiError::NotFound(body_text),
            500..=599 => {
                warn!("Server error {}: {}", status_code, body_text);
                ApiError::ServerError(status_code, body_text)
            }
            _ => ApiError::HttpError(status_code, body_text),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.http_client
            .get(&url)
            .headers(Self::create_headers())
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        debug!("Response status for {}: {}", path, response.status());

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }
}

impl WalletSource for WalletApiClient {
    async fn fetch_balance(&self) -> Result<Balance, ApiError> {
        self.get_json::<Balance>("/balance").await
    }

    /// A `null` body is the backend's encoding of an empty list.
    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let transactions = self.get_json::<Option<Vec<Transaction>>>("/transactions").await?;
        Ok(transactions.unwrap_or_default())
    }
}
