//! # API Client
//!
//! The single point of contact with the backend.
//!
//! ## Request Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          request(method, endpoint, body)                │
//! │                                                                         │
//! │  base_url + endpoint ──► send (cookies attached) ──┬──► transport error │
//! │                                                    │    NetworkUnreach. │
//! │                                                    ▼                    │
//! │                          1. Content-Type html/text?                     │
//! │                             404 → NotFound   5xx → ServerError          │
//! │                             401/403 → AuthRequired                      │
//! │                             else → UnexpectedContentType                │
//! │                             (body is never parsed)                      │
//! │                                                    │                    │
//! │                          2. status not 2xx?        ▼                    │
//! │                             BackendRejected { body.error | status text }│
//! │                                                    │                    │
//! │                          3. 2xx                    ▼                    │
//! │                             ""   → decode `{}`                          │
//! │                             JSON → decode T, else InvalidResponse       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Credentials are the backend's session cookie. The client keeps a cookie
//! jar and never attaches a token of its own.

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

// =============================================================================
// Request Body
// =============================================================================

/// Body of an outgoing request.
#[derive(Debug, Default)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// JSON body; sent with `Content-Type: application/json`.
    Json(serde_json::Value),
    /// Multipart body; reqwest sets the boundary header itself.
    Multipart(reqwest::multipart::Form),
}

impl RequestBody {
    /// Serializes `payload` into a JSON body.
    pub fn json<T: Serialize + ?Sized>(payload: &T) -> ApiResult<Self> {
        Ok(RequestBody::Json(serde_json::to_value(payload)?))
    }

    fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }
}

// =============================================================================
// ApiClient
// =============================================================================

/// HTTP client for the course marketplace backend.
///
/// Cheap to clone; clones share the connection pool and the cookie jar.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    log_requests: bool,
}

impl ApiClient {
    /// Builds a client from validated configuration.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .user_agent(config.api.user_agent.clone())
            .build()
            .map_err(|e| ApiError::InvalidConfig(format!("HTTP client: {}", e)))?;

        info!(base_url = %config.base_url(), environment = %config.runtime.environment, "API client ready");

        Ok(ApiClient {
            http,
            base_url: config.base_url().to_string(),
            log_requests: config.log_requests(),
        })
    }

    /// Base URL every endpoint is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a request and decodes the JSON response into `T`.
    ///
    /// `endpoint` is appended to the base URL as-is, query string included.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: RequestBody,
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let request_id = Uuid::new_v4();

        if self.log_requests {
            info!(%request_id, %method, %url, "API request");
        } else {
            debug!(%request_id, %method, %url, "API request");
        }

        let mut builder = self.http.request(method.clone(), &url);
        if !body.is_multipart() {
            builder = builder.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.body(value.to_string()),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        let result = self.execute(builder).await;
        if let Err(err) = &result {
            warn!(%request_id, %method, %url, kind = %err.kind(), error = %err, "API request failed");
        }
        result
    }

    async fn execute<T: DeserializeOwned>(&self, builder: reqwest::RequestBuilder) -> ApiResult<T> {
        let response = builder.send().await.map_err(network_error)?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        check_content_type(status, content_type.as_deref())?;

        let text = response.text().await.map_err(network_error)?;
        decode_body(status, &text)
    }
}

fn network_error(err: reqwest::Error) -> ApiError {
    ApiError::NetworkUnreachable(err.to_string())
}

// =============================================================================
// Response Classification
// =============================================================================

/// Returns true for content types that denote an error page.
pub fn is_error_page(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| {
            let ct = ct.to_ascii_lowercase();
            ct.contains("text/html") || ct.contains("text/plain")
        })
        .unwrap_or(false)
}

/// Classifies error pages by status, before the body is read.
pub fn check_content_type(status: StatusCode, content_type: Option<&str>) -> ApiResult<()> {
    if !is_error_page(content_type) {
        return Ok(());
    }

    Err(match status.as_u16() {
        404 => ApiError::NotFound,
        s if s >= 500 => ApiError::ServerError,
        401 | 403 => ApiError::AuthRequired,
        s => ApiError::UnexpectedContentType { status: s },
    })
}

/// Decodes a JSON (or empty) body according to `status`.
pub fn decode_body<T: DeserializeOwned>(status: StatusCode, text: &str) -> ApiResult<T> {
    if !status.is_success() {
        return Err(ApiError::BackendRejected {
            status: status.as_u16(),
            message: rejection_message(status, text),
        });
    }

    let source = if text.trim().is_empty() { "{}" } else { text };
    serde_json::from_str(source).map_err(|e| {
        error!(status = status.as_u16(), body = %text, "Failed to parse JSON response");
        ApiError::InvalidResponse(e.to_string())
    })
}

/// Message for a non-2xx JSON response.
fn rejection_message(status: StatusCode, text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(text)
        .ok()
        .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(str::to_owned))
        .filter(|message| !message.is_empty())
        .or_else(|| status.canonical_reason().map(str::to_owned))
        .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()))
}
