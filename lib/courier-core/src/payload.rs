//! Request and response payloads.
//!
//! A [`Payload`] is the body of a request or response. The dispatch core
//! never serializes or parses payloads on its own; that is the job of
//! filters (or the caller). A structured [`Payload::Json`] value therefore
//! travels through the filter chain as-is until a filter renders it.

use bytes::Bytes;

use crate::Result;

/// Content type for request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    Json,
    /// Form URL-encoded content type (`application/x-www-form-urlencoded`).
    FormUrlEncoded,
    /// Plain text content type (`text/plain`).
    PlainText,
    /// Binary content type (`application/octet-stream`).
    OctetStream,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
            Self::PlainText => "text/plain",
            Self::OctetStream => "application/octet-stream",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request or response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Raw bytes, sent on the wire as-is.
    Bytes(Bytes),
    /// UTF-8 text, sent on the wire as its bytes.
    Text(String),
    /// A structured JSON value, not yet rendered.
    ///
    /// Rendering to bytes is a filter concern; see the JSON filter in the
    /// `courier` crate.
    Json(serde_json::Value),
}

impl Payload {
    /// An empty byte payload.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Bytes(Bytes::new())
    }

    /// Capture a serializable value as a structured JSON payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as JSON.
    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// Returns `true` if the payload carries no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bytes(bytes) => bytes.is_empty(),
            Self::Text(text) => text.is_empty(),
            Self::Json(value) => value.is_null(),
        }
    }

    /// The structured JSON value, if this payload holds one.
    #[must_use]
    pub const fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Render the payload as wire bytes.
    ///
    /// A leftover [`Payload::Json`] value is serialized here as a fallback;
    /// the JSON request filter normally renders it (and sets the content
    /// type) before the transport is reached.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_bytes(&self) -> Result<Bytes> {
        match self {
            Self::Bytes(bytes) => Ok(bytes.clone()),
            Self::Text(text) => Ok(Bytes::copy_from_slice(text.as_bytes())),
            Self::Json(value) => to_json(value),
        }
    }

    /// Read the payload as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not valid UTF-8.
    pub fn text(&self) -> Result<String> {
        match self {
            Self::Bytes(bytes) => Ok(String::from_utf8(bytes.to_vec())?),
            Self::Text(text) => Ok(text.clone()),
            Self::Json(value) => Ok(value.to_string()),
        }
    }

    /// Parse the payload as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn parse_json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        match self {
            Self::Bytes(bytes) => from_json(bytes),
            Self::Text(text) => from_json(text.as_bytes()),
            Self::Json(value) => serde_path_to_error::deserialize(value.clone()).map_err(|e| {
                crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
            }),
        }
    }
}

impl Default for Payload {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Bytes> for Payload {
    fn from(bytes: Bytes) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(Bytes::from(bytes))
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use courier_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct User { name: String }
///
/// let user = User { name: "Alice".to_string() };
/// let bytes = to_json(&user).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"name":"Alice"}"#);
/// ```
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so that a failed deserialization names the
/// exact field that broke (e.g., "user.address.city").
///
/// # Errors
///
/// Returns an error if JSON deserialization fails.
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_as_str() {
        assert_eq!(ContentType::Json.as_str(), "application/json");
        assert_eq!(
            ContentType::FormUrlEncoded.as_str(),
            "application/x-www-form-urlencoded"
        );
        assert_eq!(ContentType::PlainText.as_str(), "text/plain");
        assert_eq!(ContentType::OctetStream.as_str(), "application/octet-stream");
    }

    #[test]
    fn payload_text_round_trip() {
        let payload = Payload::from("foobar");
        assert_eq!(payload.text().expect("text"), "foobar");
        assert_eq!(payload.to_bytes().expect("bytes").as_ref(), b"foobar");
        assert!(!payload.is_empty());
    }

    #[test]
    fn payload_empty() {
        assert!(Payload::empty().is_empty());
        assert!(Payload::from("").is_empty());
        assert!(Payload::Json(serde_json::Value::Null).is_empty());
    }

    #[test]
    fn payload_json_capture() {
        #[derive(serde::Serialize)]
        struct User {
            name: String,
        }

        let payload = Payload::json(&User {
            name: "Alice".to_string(),
        })
        .expect("capture");

        assert_eq!(payload.as_json(), Some(&serde_json::json!({"name": "Alice"})));
        assert_eq!(payload.to_bytes().expect("bytes").as_ref(), br#"{"name":"Alice"}"#);
    }

    #[test]
    fn payload_parse_json_from_bytes() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct User {
            name: String,
        }

        let payload = Payload::from(r#"{"name":"Alice"}"#);
        let user: User = payload.parse_json().expect("parse");
        assert_eq!(
            user,
            User {
                name: "Alice".to_string()
            }
        );
    }

    #[test]
    fn payload_parse_json_from_value() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct User {
            name: String,
        }

        let payload = Payload::Json(serde_json::json!({"name": "Bob"}));
        let user: User = payload.parse_json().expect("parse");
        assert_eq!(
            user,
            User {
                name: "Bob".to_string()
            }
        );
    }

    #[test]
    fn payload_text_rejects_invalid_utf8() {
        let payload = Payload::from(vec![0xff, 0xfe]);
        assert!(payload.text().is_err());
    }

    #[test]
    fn from_json_missing_field_error_with_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Address {
            #[allow(dead_code)]
            city: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct User {
            #[allow(dead_code)]
            address: Address,
        }

        let bytes = br#"{"address":{}}"#;
        let result: Result<User> = from_json(bytes);

        let err = result.expect_err("should fail");
        let msg = err.to_string();
        assert!(msg.contains("address"), "expected path in error: {msg}");
        assert!(msg.contains("city"), "expected field in error: {msg}");
    }
}
