//! Filter-chain HTTP client with an immutable fluent request builder.
//!
//! Requests are assembled through chained, copy-on-write builder calls and
//! dispatched through a client-owned filter chain: request filters run in
//! registration order, response filters in reverse, and the same `send` call
//! builds the URL and drives the transport.
//!
//! # Example
//!
//! ```no_run
//! use courier::{Client, HyperTransport, filters};
//! use serde_json::json;
//!
//! # async fn demo() -> courier::Result<()> {
//! let mut client = Client::new(HyperTransport::new());
//! client.register(filters::logging());
//! client.register(filters::json());
//!
//! let response = client
//!     .target("https://api.example.com")
//!     .path("/users")
//!     .query([("page", 1)])
//!     .post(json!({"name": "Alice"}))
//!     .await?;
//! let created: serde_json::Value = response.json()?;
//! # Ok(())
//! # }
//! ```

mod config;
pub mod filters;
pub mod prelude;
mod transport;

pub use config::{TransportConfig, TransportConfigBuilder};
pub use transport::HyperTransport;

// Re-export core types
pub use courier_core::{
    Client, ContentType, Error, FetchOptions, Filter, Method, Payload, Request, RequestBuilder,
    RequestHandler, Response, ResponseFuture, ResponseHandler, Result, Transport, encode_query,
    from_json, to_json,
};

// Re-export http types for status codes and headers
pub use courier_core::{StatusCode, header};
