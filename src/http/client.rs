//! Low-level HTTP client — `AgromartHttp`.
//!
//! Generic verb helpers only; the per-endpoint catalogue lives in the domain
//! sub-clients. Every call performs exactly one network round-trip: no retry,
//! no caching, no deduplication of in-flight requests.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::envelope::{unwrap_payload, Envelope};
use crate::error::HttpError;

/// Fallback error message when a failed response carries no parseable envelope.
pub const FALLBACK_ERROR_MESSAGE: &str = "request failed";

/// Low-level HTTP client for the Agromart REST API.
///
/// Auth is cookie-based: the backend sets an HTTP-only session cookie on
/// login and the internal cookie store replays it on every later call.
/// Clones share the same cookie store, so one login covers all handles.
#[derive(Clone)]
pub struct AgromartHttp {
    base_url: String,
    client: Client,
}

impl AgromartHttp {
    pub fn new(base_url: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Verb helpers ─────────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.request(Method::GET, url, None::<&()>).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        self.request(Method::POST, url, body).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        self.request(Method::PUT, url, body).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.request(Method::DELETE, url, None::<&()>).await
    }

    // ── Core request path ────────────────────────────────────────────────

    /// Perform a request and unwrap the response envelope into `T`.
    pub async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let raw = self.do_request(method, url, body).await?;
        Ok(unwrap_payload(raw)?)
    }

    /// Perform a request and hand the **full envelope** to `transform`
    /// instead of applying the unwrap rule.
    pub async fn request_with<T, B, F>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        transform: F,
    ) -> Result<T, HttpError>
    where
        B: Serialize,
        F: FnOnce(Envelope) -> Result<T, serde_json::Error>,
    {
        let raw = self.do_request(method, url, body).await?;
        let envelope: Envelope = serde_json::from_value(raw)?;
        Ok(transform(envelope)?)
    }

    async fn do_request<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Value, HttpError> {
        tracing::debug!(%method, url, "api request");

        let mut req = self.client.request(method, url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let text = resp.text().await?;
            if text.is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&text)?);
        }

        let status_message = status
            .canonical_reason()
            .unwrap_or_default()
            .to_string();
        let payload: Option<Envelope> = resp.json().await.ok();
        let message = payload
            .as_ref()
            .map(|p| p.message.clone())
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());

        tracing::warn!(status = status.as_u16(), %message, "api error");

        Err(HttpError::Api {
            status: status.as_u16(),
            status_message,
            message,
            payload,
        })
    }
}
