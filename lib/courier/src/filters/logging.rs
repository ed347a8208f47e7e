//! Request/response logging filter using `tracing`.

use courier_core::Filter;
use tracing::{debug, info, warn};

/// Log level for the logging filter.
#[derive(Debug, Clone, Copy, Default)]
pub enum LogLevel {
    /// Log at debug level (request details, including headers).
    Debug,
    /// Log at info level (summary only).
    #[default]
    Info,
}

/// A filter that logs every request and its outcome at info level.
///
/// The request handler logs the outgoing method and location; the response
/// handler logs the status, warning on non-2xx. Like everything else about
/// the chain, placement matters: register it first so it sees the original
/// request and the final (fully filtered) response.
#[must_use]
pub fn logging() -> Filter {
    logging_with_level(LogLevel::Info)
}

/// A [`logging`] filter with an explicit request log level.
///
/// [`LogLevel::Debug`] additionally logs the request headers. Response
/// outcomes are always logged at info (or warn for non-2xx), whatever the
/// request level.
#[must_use]
pub fn logging_with_level(level: LogLevel) -> Filter {
    Filter::new()
        .on_request(move |req| {
            match level {
                LogLevel::Debug => {
                    debug!(
                        method = %req.method(),
                        target = req.target().unwrap_or(""),
                        path = req.path().unwrap_or(""),
                        headers = ?req.headers(),
                        "sending request"
                    );
                }
                LogLevel::Info => {
                    info!(
                        method = %req.method(),
                        target = req.target().unwrap_or(""),
                        path = req.path().unwrap_or(""),
                        "sending request"
                    );
                }
            }
            Ok(req)
        })
        .on_response(|res, sent, _original| async move {
            let status = res.status();
            if res.is_success() {
                info!(status, method = %sent.method(), "request completed");
            } else {
                warn!(status, method = %sent.method(), "request failed with HTTP error");
            }
            Ok(res)
        })
}
