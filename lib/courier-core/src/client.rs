//! The filter-chain client.
//!
//! [`Client`] owns the ordered filter list and is the single point of truth
//! for dispatch: the same [`Client::send`] call folds request filters,
//! renders the URL, invokes the transport, and folds response filters.
//!
//! Ordering is the contract. Request handlers run in registration order;
//! response handlers run in *reverse* registration order, so the filter
//! registered last wraps the innermost request transformation and sees the
//! response first. The response fold is strictly sequential: each step is
//! awaited to completion before the next begins.

use crate::{FetchOptions, Filter, Request, RequestBuilder, Response, Result, Transport};

/// A request client: owns the filter chain and the transport.
///
/// Concurrent `send` calls on a shared client are safe and independent; they
/// only read the filter list. Registration takes `&mut self`, so all filters
/// are in place before the client is shared.
pub struct Client<T> {
    transport: T,
    filters: Vec<Filter>,
}

impl<T> Client<T> {
    /// Creates a client with no filters over the given transport.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self {
            transport,
            filters: Vec::new(),
        }
    }

    /// Appends a filter to the chain.
    ///
    /// Registration order is significant and preserved. Duplicates are
    /// allowed, filters are never removed, and a filter with no capability
    /// at all is accepted (it is a pass-through in both phases).
    pub fn register(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    /// The registered filters, in registration order.
    #[must_use]
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// The transport this client dispatches through.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> Client<T> {
    /// Returns a fresh builder bound to this client, with the given target
    /// already set (trailing slashes stripped).
    #[must_use]
    pub fn target(&self, target: impl AsRef<str>) -> RequestBuilder<'_, T> {
        RequestBuilder::new(self).target(target)
    }

    /// Sends a request through the filter chain.
    ///
    /// 1. The original descriptor is folded through every request handler in
    ///    registration order; the result is the *effective* descriptor.
    /// 2. The URL is rendered from the effective descriptor.
    /// 3. The transport is invoked, and awaited exactly once.
    /// 4. The response is folded through every response handler in reverse
    ///    registration order, awaiting each step before the next.
    ///
    /// Any handler or transport error aborts immediately and propagates
    /// unchanged. In particular, a transport error bypasses the response
    /// fold entirely: response handlers only ever see a delivered response.
    ///
    /// # Errors
    ///
    /// Returns an error if a filter rejects the request or response, if the
    /// query cannot be encoded, or if the transport fails.
    pub async fn send(&self, original: Request) -> Result<Response> {
        let mut request = original.clone();
        for filter in &self.filters {
            if let Some(handler) = filter.request_handler() {
                request = handler(request)?;
            }
        }

        let url = request.url()?;
        let options = FetchOptions::for_request(&request);
        let mut response = self.transport.fetch(&url, options).await?;

        for filter in self.filters.iter().rev() {
            if let Some(handler) = filter.response_handler() {
                response = handler(response, request.clone(), original.clone()).await?;
            }
        }

        Ok(response)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("transport", &self.transport)
            .field("filters", &self.filters.len())
            .finish()
    }
}
