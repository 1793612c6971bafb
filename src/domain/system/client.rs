//! System sub-client — operational probes, no fixed response schema.

use serde_json::{Map, Value};

use crate::client::AgromartClient;
use crate::error::SdkError;

pub struct System<'a> {
    pub(crate) client: &'a AgromartClient,
}

impl<'a> System<'a> {
    pub async fn health(&self) -> Result<Value, SdkError> {
        let url = format!("{}/api/v1/health", self.client.http.base_url());
        Ok(self.client.http.get(&url).await?)
    }

    /// Per-dependency connectivity report keyed by component name.
    pub async fn connectivity(&self) -> Result<Map<String, Value>, SdkError> {
        let url = format!("{}/api/v1/connectivity", self.client.http.base_url());
        Ok(self.client.http.get(&url).await?)
    }
}
