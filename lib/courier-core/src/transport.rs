//! The transport collaborator.
//!
//! The dispatch core does not know how to talk to the network. It hands a
//! fully rendered URL and a [`FetchOptions`] to whatever implements
//! [`Transport`] and awaits the answer, exactly once per send. Timeouts,
//! cancellation, pooling and TLS all live behind this boundary.

use std::collections::HashMap;
use std::future::Future;

use crate::{Method, Payload, Request, Response, Result};

/// Transport options derived from the effective request descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOptions {
    /// HTTP method.
    pub method: Method,
    /// Request headers (empty mapping if the descriptor had none).
    pub headers: HashMap<String, String>,
    /// Request body, if any. Rendering to wire bytes is up to the transport.
    pub body: Option<Payload>,
}

impl FetchOptions {
    /// Derives transport options from a descriptor.
    #[must_use]
    pub fn for_request(request: &Request) -> Self {
        Self {
            method: request.method(),
            headers: request.headers().cloned().unwrap_or_default(),
            body: request.body().cloned(),
        }
    }
}

/// The network-call primitive the dispatch core depends on.
///
/// Implementations must treat the call as opaque: given a URL and options,
/// produce a response or an error. A returned `Ok` response flows into the
/// response-filter fold regardless of its status code; a returned `Err`
/// bypasses response filters entirely and reaches the `send` caller as-is.
pub trait Transport: Send + Sync {
    /// Execute the network call.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any reason:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts (if the transport supports them)
    /// - Invalid URL or request
    fn fetch(
        &self,
        url: &str,
        options: FetchOptions,
    ) -> impl Future<Output = Result<Response>> + Send;
}
