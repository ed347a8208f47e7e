//! Status-interpretation filter.

use courier_core::{Error, Filter};

/// A filter that turns non-2xx responses into [`Error::Http`].
///
/// The dispatch core never interprets status codes; without this filter a
/// 404 or 500 is returned as an ordinary response. Register this when
/// callers prefer `Err` for HTTP-level failures. Filters registered *before*
/// this one never see the failing response (it runs earlier in the reverse
/// fold and aborts the chain).
#[must_use]
pub fn error_for_status() -> Filter {
    Filter::new().on_response(|res, _sent, _original| async move {
        if res.is_success() {
            return Ok(res);
        }

        let (status, _headers, body) = res.into_parts();
        let message = http::StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or("unrecognized status");
        let bytes = body.to_bytes().unwrap_or_default();

        Err(Error::http_with_body(status, message, bytes))
    })
}
