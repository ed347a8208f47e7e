//! Ready-made filters.
//!
//! The dispatch core deliberately does nothing beyond building the URL and
//! calling the transport; everything else - serialization, logging, auth,
//! status interpretation - is a filter. This module ships the common ones as
//! plain [`Filter`](courier_core::Filter) values, registered like any other:
//!
//! ```no_run
//! use courier::{Client, HyperTransport, filters};
//!
//! let mut client = Client::new(HyperTransport::new());
//! client.register(filters::logging());
//! client.register(filters::bearer_auth("my-secret-token"));
//! client.register(filters::json());
//! ```
//!
//! Registration order matters: request handlers run top-down, response
//! handlers bottom-up.

mod auth;
mod json;
mod logging;
mod status;

pub use auth::{basic_auth, bearer_auth};
pub use json::json;
pub use logging::{LogLevel, logging, logging_with_level};
pub use status::error_for_status;
