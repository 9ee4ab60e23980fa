// SPDX-License-Identifier: MIT
//
// QRANode: Client for the ANU Quantum Random Numbers API
//
// https://github.com/yourusername/qranode

//! Upstream response model
//!
//! The API replies with JSON shaped like:
//!
//! ```json
//! { "success": true, "type": "hex16", "length": "2", "data": ["2f2497d207a39d67", "dd537fa2b1c4c6b2"] }
//! ```
//!
//! Only the `success` flag is interpreted. A reply whose flag is missing or
//! falsy is reported as [`Error::Upstream`] carrying the whole body; any other
//! reply is kept exactly as the server sent it.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Successful reply from the upstream API
///
/// Wraps the parsed body unchanged. Accessors read the documented fields
/// without ever rejecting an unexpected shape.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct ApiResponse(Value);

/// One returned value: an integer for `uint*` types, a hex string for `hex*`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Datum {
    Integer(u64),
    Hex(String),
    /// Anything else the server put in `data`
    Other(Value),
}

impl Datum {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Datum::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_hex(&self) -> Option<&str> {
        match self {
            Datum::Hex(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&Value> for Datum {
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(n) => n
                .as_u64()
                .map(Datum::Integer)
                .unwrap_or_else(|| Datum::Other(value.clone())),
            Value::String(s) => Datum::Hex(s.clone()),
            other => Datum::Other(other.clone()),
        }
    }
}

impl ApiResponse {
    /// Parse a response body and gate it on the `success` flag
    ///
    /// Malformed JSON surfaces as [`Error::Json`] unchanged.
    pub fn from_body(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;

        if !is_truthy(value.get("success")) {
            return Err(Error::Upstream {
                body: value.to_string(),
            });
        }

        Ok(Self(value))
    }

    /// Whether the `success` flag is truthy
    pub fn success(&self) -> bool {
        is_truthy(self.0.get("success"))
    }

    /// Data type echoed back by the server
    pub fn data_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// Number of values; the live API sends a string, older docs show a number
    pub fn length(&self) -> Option<u64> {
        match self.0.get("length")? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64)),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Returned values; empty when `data` is missing or not an array
    pub fn data(&self) -> Vec<Datum> {
        self.0
            .get("data")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(Datum::from).collect())
            .unwrap_or_default()
    }

    /// Look up any other field of the reply
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// JSON truthiness: absent, `null`, `false`, `0` and `""` are all falsy
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_uint8_response() {
        let body = r#"{"success":true,"type":"uint8","length":"1","data":[42]}"#;
        let response = ApiResponse::from_body(body).unwrap();

        assert!(response.success());
        assert_eq!(response.data_type(), Some("uint8"));
        assert_eq!(response.length(), Some(1));
        assert_eq!(response.data(), vec![Datum::Integer(42)]);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"success": true, "type": "uint8", "length": "1", "data": [42]})
        );
    }

    #[test]
    fn test_hex_response() {
        let body = r#"{"success":true,"type":"hex16","length":2,"data":["2f2497d207a39d67","dd537fa2b1c4c6b2"]}"#;
        let response = ApiResponse::from_body(body).unwrap();

        assert_eq!(response.length(), Some(2));
        let data = response.data();
        assert_eq!(data[0].as_hex(), Some("2f2497d207a39d67"));
        assert_eq!(data[1].as_u64(), None);
    }

    #[test]
    fn test_unknown_fields_kept() {
        let body = r#"{"success":true,"type":"uint8","length":"1","data":[7],"quota":99}"#;
        let response = ApiResponse::from_body(body).unwrap();
        assert_eq!(response.get("quota"), Some(&json!(99)));
    }

    #[test]
    fn test_successful_reply_returned_verbatim() {
        let bodies = [
            r#"{"success":true,"type":"uint8","length":1.0,"data":[42]}"#,
            r#"{"success":true,"type":"uint8","length":"1","data":[42.0]}"#,
            r#"{"success":true,"type":"uint8","length":"1","data":[null]}"#,
            r#"{"success":true,"type":null,"length":"1","data":[1]}"#,
            r#"{"success":1,"type":"uint8","data":"not an array"}"#,
        ];
        for body in bodies {
            let response = ApiResponse::from_body(body).unwrap();
            let expected: Value = serde_json::from_str(body).unwrap();
            assert_eq!(response.as_value(), &expected, "{}", body);
            assert_eq!(serde_json::to_value(&response).unwrap(), expected);
        }

        let response = ApiResponse::from_body(bodies[0]).unwrap();
        assert_eq!(response.length(), Some(1));

        let response = ApiResponse::from_body(bodies[1]).unwrap();
        assert_eq!(response.data(), vec![Datum::Other(json!(42.0))]);

        let response = ApiResponse::from_body(bodies[2]).unwrap();
        assert_eq!(response.data(), vec![Datum::Other(Value::Null)]);

        let response = ApiResponse::from_body(bodies[3]).unwrap();
        assert_eq!(response.data_type(), None);

        let response = ApiResponse::from_body(bodies[4]).unwrap();
        assert!(response.success());
        assert_eq!(response.get("success"), Some(&json!(1)));
        assert!(response.data().is_empty());
    }

    #[test]
    fn test_failure_flag() {
        let body = r#"{"success":false,"message":"bad request"}"#;
        let err = ApiResponse::from_body(body).unwrap_err();
        match err {
            Error::Upstream { body } => {
                assert!(body.contains("\"success\":false"));
                assert!(body.contains("bad request"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_flag_is_failure() {
        let err = ApiResponse::from_body(r#"{"message":"Forbidden"}"#).unwrap_err();
        assert!(err.is_upstream_error());
        assert!(err.to_string().contains("Forbidden"));

        let err = ApiResponse::from_body("[1,2,3]").unwrap_err();
        assert!(err.is_upstream_error());
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&json!(null))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(""))));
        assert!(is_truthy(Some(&json!(1))));
        assert!(is_truthy(Some(&json!("yes"))));
        assert!(is_truthy(Some(&json!({}))));
    }

    #[test]
    fn test_invalid_json_propagates() {
        let err = ApiResponse::from_body("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
