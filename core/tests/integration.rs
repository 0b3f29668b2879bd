//! Request helpers against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every verb over real
//! HTTP through the default `ureq` transport. The `/echo` route reports what
//! actually went over the wire, so URL, query, and body encoding are checked
//! end-to-end.

use std::net::SocketAddr;
use std::time::Duration;

use easyhttp_core::{
    Client, Error, Params, RequestConfig, Response, ResponseKind, TargetDescriptor,
};
use mock_server::{Echo, INDEX_HTML};

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn target(addr: SocketAddr, path: &str) -> TargetDescriptor {
    TargetDescriptor::new(addr.ip().to_string())
        .port(addr.port())
        .path(path)
}

fn echo(response: &Response) -> Echo {
    assert_eq!(response.kind(), ResponseKind::Ok, "body: {}", response.body());
    response.json().unwrap()
}

#[test]
fn get_ok_and_not_found() {
    let addr = start_server();

    let response = easyhttp_core::get(format!("http://{addr}/"), None).unwrap();
    assert_eq!(response.kind(), ResponseKind::Ok);
    assert_eq!(response.status(), 200);
    assert_eq!(response.body(), INDEX_HTML);
    assert_eq!(response.content_type(), Some("text/html"));

    let response = easyhttp_core::get(format!("http://{addr}/ponies_and_pirates"), None).unwrap();
    assert_eq!(response.kind(), ResponseKind::NotFound);
    assert_eq!(response.status(), 404);
}

#[test]
fn get_with_descriptor_sends_query() {
    let addr = start_server();
    let params = Params::new().with("search", "rust").with("limit", 200);

    let response = easyhttp_core::get(target(addr, "/echo"), Some(&params)).unwrap();
    let seen = echo(&response);
    assert_eq!(seen.method, "GET");
    assert_eq!(seen.query.as_deref(), Some("search=rust&limit=200"));
}

#[test]
fn get_sends_basic_auth() {
    let addr = start_server();
    let desc = target(addr, "/echo").credentials("archiver", "test");

    let seen = echo(&easyhttp_core::get(desc, None).unwrap());
    assert_eq!(seen.authorization.as_deref(), Some("Basic YXJjaGl2ZXI6dGVzdA=="));
}

#[test]
fn post_sends_form_fields() {
    let addr = start_server();

    let params = Params::from([("q", "derek"), ("r", "matt")]);
    let seen = echo(&easyhttp_core::post(target(addr, "/echo"), &params).unwrap());
    assert_eq!(seen.method, "POST");
    assert_eq!(seen.body, "q=derek&r=matt");
    assert_eq!(
        seen.content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    assert!(seen.query.is_none());

    let params = Params::new().with("q", ["derek", "matt"]);
    let seen = echo(&easyhttp_core::post(target(addr, "/echo"), &params).unwrap());
    assert_eq!(seen.body, "q=derek,matt");
}

#[test]
fn put_sends_stringified_scalar() {
    let addr = start_server();

    let seen = echo(&easyhttp_core::put(target(addr, "/echo"), &Params::new().with("q", 1)).unwrap());
    assert_eq!(seen.method, "PUT");
    assert_eq!(seen.body, "q=1");
}

#[test]
fn delete_sends_query() {
    let addr = start_server();

    let params = Params::new().with("id", 9);
    let seen = echo(&easyhttp_core::delete(target(addr, "/echo"), Some(&params)).unwrap());
    assert_eq!(seen.method, "DELETE");
    assert_eq!(seen.query.as_deref(), Some("id=9"));
}

#[test]
fn error_statuses_are_responses() {
    let addr = start_server();
    let client = Client::new();

    let response = client.get(target(addr, "/status/500"), None).unwrap();
    assert_eq!(response.kind(), ResponseKind::InternalServerError);
    assert!(response.is_server_error());

    let response = client.post(target(addr, "/status/418"), &Params::new()).unwrap();
    assert_eq!(response.kind(), ResponseKind::Other(418));
    assert_eq!(response.body(), "status 418");
}

#[test]
fn config_headers_reach_server() {
    let addr = start_server();
    let client = Client::with_config(
        RequestConfig::default()
            .with_timeout(Some(Duration::from_secs(5)))
            .with_user_agent("integration/1"),
    );

    let seen = echo(&client.get(target(addr, "/echo"), None).unwrap());
    assert_eq!(seen.user_agent.as_deref(), Some("integration/1"));
}

#[test]
fn refused_connection_is_transport_error() {
    // Nothing listens on the port once this listener is dropped.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let err = easyhttp_core::get(TargetDescriptor::new("127.0.0.1").port(port), None).unwrap_err();
    assert!(matches!(err, Error::Transport { .. }));
}

#[test]
fn unescaped_query_is_rejected_before_sending() {
    let addr = start_server();
    let params = Params::new().with("search", "MSU vs UNC").with("limit", 200);

    let err = easyhttp_core::get(target(addr, "/echo"), Some(&params)).unwrap_err();
    assert!(matches!(err, Error::InvalidTarget(_)), "{err}");
}
