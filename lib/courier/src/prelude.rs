//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types, functions, and
//! filters for easy glob importing:
//!
//! ```ignore
//! use courier::prelude::*;
//! ```

pub use crate::{
    Client, ContentType, Error, FetchOptions, Filter, HyperTransport, Method, Payload, Request,
    RequestBuilder, Response, Result, StatusCode, Transport, TransportConfig, filters, from_json,
    header, to_json,
};
pub use serde::{Deserialize, Serialize};
