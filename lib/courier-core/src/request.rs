//! The immutable request descriptor.
//!
//! A [`Request`] is a plain value: once built it is never mutated in place
//! by the dispatch machinery. Request filters consume a descriptor and
//! return a new one, so the owned-transform helpers here (`with_header`,
//! `with_body`, ...) operate on values the filter already owns.

use std::collections::{BTreeMap, HashMap};

use crate::{Method, Payload, Result, encode_query};

/// An accumulated request: method, target, path, query, headers, and body.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: Method,
    target: Option<String>,
    path: Option<String>,
    query: Option<BTreeMap<String, String>>,
    headers: Option<HashMap<String, String>>,
    body: Option<Payload>,
}

impl Request {
    /// Creates an empty descriptor for the given method.
    #[must_use]
    pub const fn new(method: Method) -> Self {
        Self {
            method,
            target: None,
            path: None,
            query: None,
            headers: None,
            body: None,
        }
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Base origin/host, if set.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Encoded path, if set.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Query mapping, if set.
    #[must_use]
    pub const fn query(&self) -> Option<&BTreeMap<String, String>> {
        self.query.as_ref()
    }

    /// Header mapping, if set.
    #[must_use]
    pub const fn headers(&self) -> Option<&HashMap<String, String>> {
        self.headers.as_ref()
    }

    /// Single header value by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.as_ref().and_then(|headers| {
            headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str())
        })
    }

    /// Request body, if set.
    #[must_use]
    pub const fn body(&self) -> Option<&Payload> {
        self.body.as_ref()
    }

    /// Replaces the method.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Replaces the target. No normalization happens here; the builder is
    /// responsible for stripping trailing slashes.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Replaces the path. No normalization or encoding happens here; the
    /// builder is responsible for both.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Replaces the whole query mapping.
    #[must_use]
    pub fn with_query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Replaces the whole header mapping.
    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Sets a single header, creating the header mapping if absent.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Replaces the body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Payload>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Takes the body out of the descriptor, leaving `None`.
    pub fn take_body(&mut self) -> Option<Payload> {
        self.body.take()
    }

    /// Mutable access to the headers, creating the mapping if absent.
    pub fn headers_mut(&mut self) -> &mut HashMap<String, String> {
        self.headers.get_or_insert_with(HashMap::new)
    }

    /// Renders the URL for this descriptor.
    ///
    /// The URL is `target` (empty string if absent) and `path` (empty string
    /// if absent) joined by a single slash. A present, non-empty query
    /// mapping is appended as `?` plus its encoded form; an empty mapping is
    /// treated as no query at all.
    ///
    /// # Errors
    ///
    /// Returns an error if query encoding fails.
    pub fn url(&self) -> Result<String> {
        let target = self.target.as_deref().unwrap_or("");
        let path = self.path.as_deref().unwrap_or("");
        let mut url = format!("{target}/{path}");

        if let Some(query) = &self.query
            && !query.is_empty()
        {
            url.push('?');
            url.push_str(&encode_query(query)?);
        }

        Ok(url)
    }
}
