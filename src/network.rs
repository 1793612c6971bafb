//! Network URL constants for the Agromart SDK.

/// Default REST API base URL.
///
/// Matches the backend's local development address; deployments behind a
/// reverse proxy override it via [`crate::client::AgromartClientBuilder`].
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";
