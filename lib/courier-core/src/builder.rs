//! The immutable fluent request builder.
//!
//! Every attribute method takes `&self` and returns a brand-new builder
//! holding a copy of the descriptor with exactly one attribute replaced.
//! Earlier builders stay valid and can keep issuing requests, so a partially
//! configured builder can be shared as a template:
//!
//! ```no_run
//! # use courier_core::{Client, FetchOptions, Response, Result, Transport};
//! # #[derive(Default)] struct Stub;
//! # impl Transport for Stub {
//! #     async fn fetch(&self, _url: &str, _options: FetchOptions) -> Result<Response> {
//! #         unimplemented!()
//! #     }
//! # }
//! # async fn demo() -> Result<()> {
//! # let client = Client::new(Stub);
//! let api = client.target("https://api.example.com");
//! let users = api.path("/users").get().await?;
//! let health = api.path("/health").get().await?; // `api` is untouched
//! # Ok(())
//! # }
//! ```

use std::collections::{BTreeMap, HashMap};

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::{Client, Method, Payload, Request, Response, Result, Transport};

/// Characters percent-encoded in path segments. Everything a URI leaves
/// meaningful in a path (`/`, `:`, `@`, `&`, `=`, ...) passes through.
const PATH_ENCODE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'\\');

/// Strips a single leading and/or trailing slash, then percent-encodes.
fn encode_path(path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    utf8_percent_encode(path, PATH_ENCODE).to_string()
}

/// A copy-on-write accumulator of request attributes, bound to the client
/// that created it.
pub struct RequestBuilder<'c, T> {
    client: &'c Client<T>,
    request: Request,
}

impl<'c, T: Transport> RequestBuilder<'c, T> {
    pub(crate) const fn new(client: &'c Client<T>) -> Self {
        Self {
            client,
            request: Request::new(Method::Get),
        }
    }

    fn replace(&self, request: Request) -> Self {
        Self {
            client: self.client,
            request,
        }
    }

    /// Sets the target origin/host, stripping any trailing slashes.
    #[must_use]
    pub fn target(&self, target: impl AsRef<str>) -> Self {
        let target = target.as_ref().trim_end_matches('/');
        self.replace(self.request.clone().with_target(target))
    }

    /// Sets the path, replacing any previous one entirely.
    ///
    /// A single leading and/or trailing slash is stripped, and the rest is
    /// percent-encoded, so `path("/a/")` and `path("a")` are equivalent.
    #[must_use]
    pub fn path(&self, path: impl AsRef<str>) -> Self {
        self.replace(self.request.clone().with_path(encode_path(path.as_ref())))
    }

    /// Sets the query mapping, replacing any previous one entirely (no
    /// per-key merging). Values are captured via their `Display` form; the
    /// encoder serializes them in its own canonical order at dispatch time.
    #[must_use]
    pub fn query<K, V>(&self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        let query: BTreeMap<String, String> = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.to_string()))
            .collect();
        self.replace(self.request.clone().with_query(query))
    }

    /// Sets the header mapping, replacing any previous one entirely (no
    /// per-key merging).
    #[must_use]
    pub fn headers<K, V>(&self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let headers: HashMap<String, String> = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self.replace(self.request.clone().with_headers(headers))
    }

    /// Stages a body, replacing any previous one.
    ///
    /// `get()` and `delete()` dispatch whatever body is staged here;
    /// `post(body)` and `put(body)` override it.
    #[must_use]
    pub fn body(&self, body: impl Into<Payload>) -> Self {
        self.replace(self.request.clone().with_body(body))
    }

    /// The descriptor accumulated so far.
    #[must_use]
    pub const fn request(&self) -> &Request {
        &self.request
    }

    /// Sends a GET request with the accumulated attributes.
    pub async fn get(&self) -> Result<Response> {
        self.dispatch(Method::Get, None).await
    }

    /// Sends a POST request with the given body.
    pub async fn post(&self, body: impl Into<Payload>) -> Result<Response> {
        self.dispatch(Method::Post, Some(body.into())).await
    }

    /// Sends a PUT request with the given body.
    pub async fn put(&self, body: impl Into<Payload>) -> Result<Response> {
        self.dispatch(Method::Put, Some(body.into())).await
    }

    /// Sends a DELETE request with the accumulated attributes.
    pub async fn delete(&self) -> Result<Response> {
        self.dispatch(Method::Delete, None).await
    }

    /// Finalizes the descriptor and hands it to the owning client. The
    /// builder itself is untouched and can dispatch again.
    async fn dispatch(&self, method: Method, body: Option<Payload>) -> Result<Response> {
        let mut request = self.request.clone().with_method(method);
        if let Some(body) = body {
            request = request.with_body(body);
        }
        if request.headers().is_none() {
            request = request.with_headers(HashMap::new());
        }
        self.client.send(request).await
    }
}

impl<T> Clone for RequestBuilder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client,
            request: self.request.clone(),
        }
    }
}

impl<T> std::fmt::Debug for RequestBuilder<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}
