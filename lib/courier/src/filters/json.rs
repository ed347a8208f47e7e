//! JSON codec filter.

use courier_core::{ContentType, Filter, Payload, Response, to_json};

/// A filter that renders structured JSON bodies on the way out and parses
/// JSON responses on the way back.
///
/// The request handler serializes a [`Payload::Json`] body to bytes and sets
/// `Content-Type: application/json`; other body kinds pass through. The
/// response handler parses the body back into [`Payload::Json`] when the
/// response declares a JSON content type and the body is non-empty.
///
/// # Example
///
/// ```no_run
/// use courier::{Client, HyperTransport, filters};
/// use serde_json::json;
///
/// # async fn demo() -> courier::Result<()> {
/// let mut client = Client::new(HyperTransport::new());
/// client.register(filters::json());
///
/// let response = client
///     .target("https://api.example.com")
///     .path("/users")
///     .post(json!({"name": "Alice"}))
///     .await?;
/// let created: serde_json::Value = response.json()?;
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn json() -> Filter {
    Filter::new()
        .on_request(|mut req| match req.take_body() {
            Some(Payload::Json(value)) => {
                let bytes = to_json(&value)?;
                Ok(req
                    .with_header("Content-Type", ContentType::Json.as_str())
                    .with_body(Payload::Bytes(bytes)))
            }
            Some(other) => Ok(req.with_body(other)),
            None => Ok(req),
        })
        .on_response(|res, _sent, _original| async move {
            let is_json = res
                .header("content-type")
                .is_some_and(|ct| ct.contains("json"));
            if !is_json || res.body().is_empty() {
                return Ok(res);
            }

            let (status, headers, body) = res.into_parts();
            let value: serde_json::Value = body.parse_json()?;
            Ok(Response::new(status, headers, Payload::Json(value)))
        })
}
