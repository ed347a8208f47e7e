//! Authentication filters.
//!
//! The dispatch core ships no authentication scheme; these filters inject an
//! `Authorization` header into every outgoing request.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use courier_core::Filter;

/// A filter that adds `Authorization: Bearer <token>` to every request.
///
/// # Example
///
/// ```no_run
/// use courier::{Client, HyperTransport, filters};
///
/// let mut client = Client::new(HyperTransport::new());
/// client.register(filters::bearer_auth("my-secret-token"));
/// ```
#[must_use]
pub fn bearer_auth(token: impl Into<String>) -> Filter {
    let value = format!("Bearer {}", token.into());
    Filter::new().on_request(move |req| Ok(req.with_header("Authorization", value.clone())))
}

/// A filter that adds `Authorization: Basic <base64>` to every request.
#[must_use]
pub fn basic_auth(username: impl AsRef<str>, password: impl AsRef<str>) -> Filter {
    let credentials = BASE64.encode(format!("{}:{}", username.as_ref(), password.as_ref()));
    let value = format!("Basic {credentials}");
    Filter::new().on_request(move |req| Ok(req.with_header("Authorization", value.clone())))
}
