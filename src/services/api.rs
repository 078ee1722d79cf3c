use crate::config::Config;
use crate::models::{
    analytics::CallAnalytics, call_log::CallLogRecord, dashboard::DashboardData, error::AppError,
};
use crate::services::timeout::with_timeout;
use serde::de::DeserializeOwned;
use std::future::Future;

// ENDPOINTS
const ANALYTICS_PATH: &str = "call_analytics";
const CALL_LOGS_PATH: &str = "all_call_extractions";
const API_KEY_HEADER: &str = "x-api-key";

// API CONFIGURATION
/// Configuration for the analytics backend client.
#[derive(Clone)]
pub struct ApiConfig {
    base_url: String,
    api_key: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Builds the configuration from the values baked in at compile time.
    pub fn from_build_env() -> Result<Self, AppError> {
        let mut builder = Self::builder();
        if let Some(url) = Config::API_BASE_URL {
            builder = builder.base_url(url);
        }
        if let Some(key) = Config::API_KEY {
            builder = builder.api_key(key);
        }
        builder.build()
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// URL of the summary/evolution/origin/sentiment bundle.
    pub fn analytics_url(&self) -> String {
        self.endpoint(ANALYTICS_PATH)
    }

    /// URL of the raw call extraction logs.
    pub fn call_logs_url(&self) -> String {
        self.endpoint(CALL_LOGS_PATH)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig`.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets the backend base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the static API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Builds the `ApiConfig`. Both the base URL and the key are required.
    pub fn build(self) -> Result<ApiConfig, AppError> {
        let base_url = self
            .base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AppError::ConfigError("API base URL is not set".to_string()))?;
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::ConfigError("API key is not set".to_string()))?;

        Ok(ApiConfig { base_url, api_key })
    }
}

// ANALYTICS CLIENT
/// HTTP client for the call analytics backend.
pub struct AnalyticsClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl AnalyticsClient {
    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the analytics bundle.
    pub async fn fetch_analytics(&self) -> Result<CallAnalytics, AppError> {
        self.fetch(&self.config.analytics_url()).await
    }

    /// Fetches every extracted call log. A `null` body means no calls yet.
    pub async fn fetch_call_logs(&self) -> Result<Vec<CallLogRecord>, AppError> {
        let logs: Option<Vec<CallLogRecord>> = self.fetch(&self.config.call_logs_url()).await?;
        Ok(logs.unwrap_or_default())
    }

    /// Fetches both resources concurrently and merges them.
    pub async fn fetch_dashboard(&self) -> Result<DashboardData, AppError> {
        join_and_merge(self.fetch_analytics(), self.fetch_call_logs()).await
    }

    /// Executes a single authenticated GET and decodes the JSON body.
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, self.config.api_key())
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response from {url}: {e}")))
    }

    /// Converts a transport failure into an `AppError`.
    ///
    /// Timeouts share `AppError::Timeout` with the dashboard deadline so the
    /// hook logs both the same way. Connection and request-building failures
    /// name the endpoint that failed.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        let endpoint = error
            .url()
            .map_or_else(|| "backend".to_string(), |url| url.path().to_string());

        if error.is_timeout() {
            AppError::Timeout(format!("{endpoint} did not respond"))
        } else if error.is_builder() || error.is_request() {
            AppError::ApiError(format!("Could not send request to {endpoint}: {error}"))
        } else {
            AppError::ApiError(format!("Network error on {endpoint}: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            401 | 403 => AppError::AuthError(format!("Authentication failed: {status}")),
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

/// Awaits the analytics and call-log requests together and merges them.
///
/// The first failure on either side fails the whole load and the other side
/// is dropped without being merged.
pub async fn join_and_merge<A, L>(analytics: A, logs: L) -> Result<DashboardData, AppError>
where
    A: Future<Output = Result<CallAnalytics, AppError>>,
    L: Future<Output = Result<Vec<CallLogRecord>, AppError>>,
{
    let (analytics, logs) = futures::future::try_join(analytics, logs).await?;
    DashboardData::merge(analytics, logs)
}

// CONVENIENCE FUNCTIONS
/// Loads the dashboard model with the build-time configuration, bounded by
/// `Config::FETCH_TIMEOUT_MS`.
pub async fn fetch_dashboard() -> Result<DashboardData, AppError> {
    let client = AnalyticsClient::with_config(ApiConfig::from_build_env()?)?;
    with_timeout(client.fetch_dashboard(), Config::FETCH_TIMEOUT_MS).await
}
