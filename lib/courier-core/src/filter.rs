//! Request/response filters.
//!
//! A [`Filter`] carries up to two capabilities: a request handler that
//! rewrites the outgoing descriptor, and a response handler that rewrites
//! the incoming response. Either may be absent; a filter with neither is
//! legal and is a no-op in both phases.
//!
//! # Example
//!
//! ```
//! use courier_core::Filter;
//!
//! let trace = Filter::new()
//!     .on_request(|req| Ok(req.with_header("X-Request-Id", "42")))
//!     .on_response(|res, _sent, _original| async move { Ok(res) });
//! assert!(trace.handles_request());
//! assert!(trace.handles_response());
//! ```

use std::future::Future;
use std::pin::Pin;

use crate::{Request, Response, Result};

/// Boxed future returned by response handlers.
pub type ResponseFuture = Pin<Box<dyn Future<Output = Result<Response>> + Send>>;

/// A request-phase handler: consumes the descriptor, returns the rewritten
/// descriptor. Returning `Err` aborts the send.
pub type RequestHandler = Box<dyn Fn(Request) -> Result<Request> + Send + Sync>;

/// A response-phase handler. Receives the response plus the *sent*
/// descriptor (after the request fold) and the *original* descriptor (as
/// dispatched by the builder), both by value. May be asynchronous.
pub type ResponseHandler = Box<dyn Fn(Response, Request, Request) -> ResponseFuture + Send + Sync>;

/// A request and/or response transformer registered on a client.
#[derive(Default)]
pub struct Filter {
    request: Option<RequestHandler>,
    response: Option<ResponseHandler>,
}

impl Filter {
    /// Creates a filter with no capabilities.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request handler, replacing any previous one.
    #[must_use]
    pub fn on_request<F>(mut self, handler: F) -> Self
    where
        F: Fn(Request) -> Result<Request> + Send + Sync + 'static,
    {
        self.request = Some(Box::new(handler));
        self
    }

    /// Sets the response handler, replacing any previous one.
    ///
    /// Plain `async` closures work directly; the future is boxed here.
    #[must_use]
    pub fn on_response<F, Fut>(mut self, handler: F) -> Self
    where
        F: Fn(Response, Request, Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response>> + Send + 'static,
    {
        self.response = Some(Box::new(move |response, sent, original| {
            Box::pin(handler(response, sent, original))
        }));
        self
    }

    /// Returns `true` if this filter has a request capability.
    #[must_use]
    pub const fn handles_request(&self) -> bool {
        self.request.is_some()
    }

    /// Returns `true` if this filter has a response capability.
    #[must_use]
    pub const fn handles_response(&self) -> bool {
        self.response.is_some()
    }

    pub(crate) fn request_handler(&self) -> Option<&RequestHandler> {
        self.request.as_ref()
    }

    pub(crate) fn response_handler(&self) -> Option<&ResponseHandler> {
        self.response.as_ref()
    }
}

impl std::fmt::Debug for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("request", &self.request.is_some())
            .field("response", &self.response.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Method;

    #[test]
    fn filter_without_capabilities_is_legal() {
        let filter = Filter::new();
        assert!(!filter.handles_request());
        assert!(!filter.handles_response());
    }

    #[test]
    fn filter_capability_flags() {
        let filter = Filter::new().on_request(Ok);
        assert!(filter.handles_request());
        assert!(!filter.handles_response());

        let filter = Filter::new().on_response(|res, _sent, _original| async move { Ok(res) });
        assert!(!filter.handles_request());
        assert!(filter.handles_response());
    }

    #[test]
    fn request_handler_rewrites_descriptor() {
        let filter = Filter::new().on_request(|req| Ok(req.with_header("X-Tag", "v")));
        let handler = filter.request_handler().expect("handler");

        let request = handler(Request::new(Method::Get)).expect("rewrite");
        assert_eq!(request.header("X-Tag"), Some("v"));
    }

    #[test]
    fn filter_debug_shows_capabilities() {
        let filter = Filter::new().on_request(Ok);
        let debug = format!("{filter:?}");
        assert!(debug.contains("request: true"));
        assert!(debug.contains("response: false"));
    }
}
