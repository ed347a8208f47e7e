//! Core types for the courier filter-chain HTTP client.
//!
//! This crate provides the dispatch core and nothing else - no networking:
//! - [`Request`] - immutable request descriptor
//! - [`RequestBuilder`] - copy-on-write fluent builder
//! - [`Filter`] - request/response transformers with explicit capabilities
//! - [`Client`] - owns the filter chain and dispatches through a [`Transport`]
//! - [`Transport`] - the injected network-call primitive
//! - [`Payload`] and [`Response`] - bodies and responses
//! - [`Error`] and [`Result`] - error handling
//!
//! The `courier` crate supplies a hyper-based [`Transport`] and a set of
//! ready-made filters.

mod builder;
mod client;
mod error;
mod filter;
mod method;
mod payload;
pub mod prelude;
mod query;
mod request;
mod response;
mod transport;

pub use builder::RequestBuilder;
pub use client::Client;
pub use error::{Error, Result};
pub use filter::{Filter, RequestHandler, ResponseFuture, ResponseHandler};
pub use method::Method;
pub use payload::{ContentType, Payload, from_json, to_json};
pub use query::encode_query;
pub use request::Request;
pub use response::Response;
pub use transport::{FetchOptions, Transport};

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
