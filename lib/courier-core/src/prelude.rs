//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use courier_core::prelude::*;
//! ```

pub use crate::{
    Client, ContentType, Error, FetchOptions, Filter, Method, Payload, Request, RequestBuilder,
    Response, Result, StatusCode, Transport, from_json, header, to_json,
};
