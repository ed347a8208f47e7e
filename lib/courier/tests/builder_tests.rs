//! Integration tests for the request builder against a live mock server.

use std::time::Duration;

use courier::{Client, HyperTransport, Payload, TransportConfig};
use wiremock::matchers::path;
use wiremock::{Mock, MockServer, Respond, ResponseTemplate};

fn client() -> Client<HyperTransport> {
    Client::new(HyperTransport::new())
}

/// Replies with the request method, lowercased.
struct EchoMethod;

impl Respond for EchoMethod {
    fn respond(&self, request: &wiremock::Request) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_string(request.method.to_string().to_lowercase())
    }
}

/// Replies with the request path and query string.
struct EchoUri;

impl Respond for EchoUri {
    fn respond(&self, request: &wiremock::Request) -> ResponseTemplate {
        let mut uri = request.url.path().to_string();
        if let Some(query) = request.url.query() {
            uri.push('?');
            uri.push_str(query);
        }
        ResponseTemplate::new(200).set_body_string(uri)
    }
}

/// Replies with the request body, mirroring its content type.
struct EchoBody;

impl Respond for EchoBody {
    fn respond(&self, request: &wiremock::Request) -> ResponseTemplate {
        let content_type = request
            .headers
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .unwrap_or("text/plain")
            .to_string();
        ResponseTemplate::new(200)
            .insert_header("content-type", content_type.as_str())
            .set_body_bytes(request.body.clone())
    }
}

/// Mirrors the `X-Echo` request header into an `X-Echo-Reply` response header.
struct EchoHeaders;

impl Respond for EchoHeaders {
    fn respond(&self, request: &wiremock::Request) -> ResponseTemplate {
        let echo = request
            .headers
            .get("x-echo")
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();
        ResponseTemplate::new(200).insert_header("X-Echo-Reply", echo.as_str())
    }
}

async fn echo_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(path("/echo/uri"))
        .respond_with(EchoUri)
        .mount(&server)
        .await;
    Mock::given(path("/echo/body"))
        .respond_with(EchoBody)
        .mount(&server)
        .await;
    Mock::given(path("/echo/headers"))
        .respond_with(EchoHeaders)
        .mount(&server)
        .await;
    Mock::given(path("/"))
        .respond_with(EchoMethod)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn get_sends_a_get_request() {
    let server = echo_server().await;

    let client = client();
    let response = client.target(server.uri()).get().await.expect("send");

    assert_eq!(response.text().expect("text"), "get");
}

#[tokio::test]
async fn post_sends_a_post_request() {
    let server = echo_server().await;

    let client = client();
    let response = client
        .target(server.uri())
        .post(Payload::empty())
        .await
        .expect("send");

    assert_eq!(response.text().expect("text"), "post");
}

#[tokio::test]
async fn put_sends_a_put_request() {
    let server = echo_server().await;

    let client = client();
    let response = client
        .target(server.uri())
        .put(Payload::empty())
        .await
        .expect("send");

    assert_eq!(response.text().expect("text"), "put");
}

#[tokio::test]
async fn delete_sends_a_delete_request() {
    let server = echo_server().await;

    let client = client();
    let response = client.target(server.uri()).delete().await.expect("send");

    assert_eq!(response.text().expect("text"), "delete");
}

#[tokio::test]
async fn query_sets_query_parameters() {
    let server = echo_server().await;

    let client = client();
    let response = client
        .target(server.uri())
        .path("/echo/uri")
        .query([("foo", "bar")])
        .get()
        .await
        .expect("send");

    assert_eq!(response.text().expect("text"), "/echo/uri?foo=bar");
}

#[tokio::test]
async fn post_sends_a_request_body() {
    let server = echo_server().await;

    let client = client();
    let response = client
        .target(server.uri())
        .path("/echo/body")
        .post("foobar")
        .await
        .expect("send");

    assert_eq!(response.text().expect("text"), "foobar");
}

#[tokio::test]
async fn put_sends_a_request_body() {
    let server = echo_server().await;

    let client = client();
    let response = client
        .target(server.uri())
        .path("/echo/body")
        .put("foobar")
        .await
        .expect("send");

    assert_eq!(response.text().expect("text"), "foobar");
}

#[tokio::test]
async fn delete_sends_a_staged_request_body() {
    let server = echo_server().await;

    let client = client();
    let response = client
        .target(server.uri())
        .path("/echo/body")
        .body("foobar")
        .delete()
        .await
        .expect("send");

    assert_eq!(response.text().expect("text"), "foobar");
}

#[tokio::test]
async fn headers_set_request_headers() {
    let server = echo_server().await;

    let client = client();
    let response = client
        .target(server.uri())
        .path("/echo/headers")
        .headers([("X-Echo", "foobar")])
        .get()
        .await
        .expect("send");

    assert_eq!(response.header("X-Echo-Reply"), Some("foobar"));
}

#[tokio::test]
async fn trailing_slashes_are_normalized() {
    let server = echo_server().await;

    let client = client();
    let response = client
        .target(format!("{}///", server.uri()))
        .path("/echo/uri/")
        .get()
        .await
        .expect("send");

    assert_eq!(response.text().expect("text"), "/echo/uri");
}

#[tokio::test]
async fn builder_is_a_reusable_template() {
    let server = echo_server().await;

    let client = client();
    let api = client.target(server.uri());
    let uri = api.path("/echo/uri");

    // Attribute calls replace wholesale and leave earlier builders intact.
    let response = uri.query([("a", 1)]).get().await.expect("send");
    assert_eq!(response.text().expect("text"), "/echo/uri?a=1");

    let response = uri.get().await.expect("send");
    assert_eq!(response.text().expect("text"), "/echo/uri");

    // The same builder can dispatch again.
    let response = uri.get().await.expect("send");
    assert_eq!(response.text().expect("text"), "/echo/uri");
}

#[tokio::test]
async fn transport_times_out() {
    let server = MockServer::start().await;
    Mock::given(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let transport = HyperTransport::with_config(
        TransportConfig::builder()
            .timeout(Duration::from_millis(100))
            .build(),
    );
    let client = Client::new(transport);

    let err = client
        .target(server.uri())
        .path("/slow")
        .get()
        .await
        .expect_err("should time out");

    assert!(err.is_timeout());
}
