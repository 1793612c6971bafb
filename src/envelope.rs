//! The uniform response envelope and its unwrap rule.
//!
//! Every backend endpoint is expected to respond with
//! `{"code": <i64>, "message": <string>, "data": <payload>}`. A handful of
//! legacy endpoints omit the `data` key; for those the whole body stands in
//! for the payload. [`unwrap_payload`] implements exactly that rule.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `{code, message, data}` wrapper around every backend response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T = Value> {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Extract the payload from a response body.
///
/// If the body is a JSON object carrying a `data` key, that key's value is
/// the payload. Any other body (including envelopes missing `data`) is
/// deserialized whole — compatibility with non-conforming endpoints.
pub fn unwrap_payload<T: DeserializeOwned>(body: Value) -> Result<T, serde_json::Error> {
    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            let data = map.remove("data").unwrap_or(Value::Null);
            serde_json::from_value(data)
        }
        other => serde_json::from_value(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_envelope_yields_data() {
        let body = json!({"code": 0, "message": "ok", "data": {"id": 7, "username": "u"}});
        let out: Value = unwrap_payload(body).unwrap();
        assert_eq!(out, json!({"id": 7, "username": "u"}));
    }

    #[test]
    fn null_data_yields_unit() {
        let body = json!({"code": 0, "message": "ok", "data": null});
        unwrap_payload::<()>(body).unwrap();
    }

    #[test]
    fn missing_data_returns_whole_body() {
        let body = json!({"code": 0, "message": "ok", "status": "UP"});
        let out: Value = unwrap_payload(body.clone()).unwrap();
        assert_eq!(out, body);
    }

    #[test]
    fn non_object_body_returned_unchanged() {
        let out: Vec<i64> = unwrap_payload(json!([1, 2, 3])).unwrap();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn envelope_parses_without_data_key() {
        let env: Envelope = serde_json::from_value(json!({"code": 404, "message": "not found"}))
            .unwrap();
        assert_eq!(env.code, 404);
        assert_eq!(env.message, "not found");
        assert!(env.data.is_none());
    }
}
