//! The blocking client seam.
//!
//! # Design
//! `Transport` is the only place network I/O happens. The default
//! implementation drives `ureq`, which owns connection reuse, TLS, and
//! timeouts. Status codes are never turned into errors here; 4xx and 5xx
//! come back as `RawResponse` like any other status.

use std::time::Duration;

use log::warn;

use crate::error::{Error, Result};
use crate::http::{HttpMethod, HttpRequest, RawResponse, FORM_CONTENT_TYPE};

/// Executes a fully built request and returns the raw exchange result.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<RawResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<RawResponse> {
        (**self).execute(request)
    }
}

/// `Transport` backed by a `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

/// Errors raised while turning the request into an `http::Request`, before
/// any connection is attempted.
fn is_construction_error(err: &ureq::Error) -> bool {
    matches!(err, ureq::Error::Http(_) | ureq::Error::BadUri(_))
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<RawResponse> {
        let url = request.url.as_str();
        let headers = request.headers.as_slice();
        let body = request.body.as_ref().map(|form| form.encode());

        let result = match request.method {
            HttpMethod::Get => with_headers(self.agent.get(url), headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(url), headers).call(),
            HttpMethod::Post | HttpMethod::Put => {
                let builder = match request.method {
                    HttpMethod::Put => self.agent.put(url),
                    _ => self.agent.post(url),
                };
                let builder = with_headers(builder, headers);
                match body {
                    Some(body) => builder.content_type(FORM_CONTENT_TYPE).send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| {
            if is_construction_error(&e) {
                return Error::InvalidTarget(format!("cannot send to {url}: {e}"));
            }
            warn!("{} {url} failed: {e}", request.method);
            Error::transport(url, e)
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| Error::transport(url, e))?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refused_connection_is_a_transport_error() {
        // Bind then drop to get a port nobody is listening on.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: format!("http://127.0.0.1:{port}/"),
            headers: Vec::new(),
            body: None,
        };
        let err = UreqTransport::new(Some(Duration::from_secs(5)))
            .execute(&request)
            .unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
    }

    #[test]
    fn unsendable_url_is_an_invalid_target() {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: "http://127.0.0.1:1?search=MSU vs UNC&limit=200".to_string(),
            headers: Vec::new(),
            body: None,
        };
        let err = UreqTransport::new(Some(Duration::from_secs(5)))
            .execute(&request)
            .unwrap_err();
        match err {
            Error::InvalidTarget(msg) => assert!(msg.contains("MSU vs UNC"), "{msg}"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
