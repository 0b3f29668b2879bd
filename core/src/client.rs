//! Verb dispatch.
//!
//! # Design
//! `Client` holds a `RequestConfig` and a `Transport` and carries no other
//! state between calls. Every verb is split into a `build_*` method that
//! produces an `HttpRequest` and `send`, which executes it and classifies
//! the result. The module-level `get`/`post`/`put`/`delete` functions run
//! the same path through a default client.

use log::debug;

use crate::config::RequestConfig;
use crate::error::Result;
use crate::http::{find_header, FormBody, HttpMethod, HttpRequest};
use crate::params::{body_fields, Params};
use crate::response::Response;
use crate::target::{build_url, Query, Target};
use crate::transport::{Transport, UreqTransport};

/// Blocking request helper over a `Transport`.
#[derive(Debug, Clone)]
pub struct Client<T = UreqTransport> {
    config: RequestConfig,
    transport: T,
}

impl Client<UreqTransport> {
    pub fn new() -> Self {
        Self::with_config(RequestConfig::default())
    }

    pub fn with_config(config: RequestConfig) -> Self {
        let transport = UreqTransport::new(config.timeout);
        Self { config, transport }
    }
}

impl Default for Client<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(config: RequestConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    pub fn build_get(&self, target: impl Into<Target>, params: Option<&Params>) -> Result<HttpRequest> {
        self.build_with_query(HttpMethod::Get, target.into(), params)
    }

    pub fn build_delete(&self, target: impl Into<Target>, params: Option<&Params>) -> Result<HttpRequest> {
        self.build_with_query(HttpMethod::Delete, target.into(), params)
    }

    pub fn build_post(&self, target: impl Into<Target>, params: &Params) -> Result<HttpRequest> {
        self.build_with_body(HttpMethod::Post, target.into(), params)
    }

    pub fn build_put(&self, target: impl Into<Target>, params: &Params) -> Result<HttpRequest> {
        self.build_with_body(HttpMethod::Put, target.into(), params)
    }

    fn build_with_query(
        &self,
        method: HttpMethod,
        target: Target,
        params: Option<&Params>,
    ) -> Result<HttpRequest> {
        let query = params.cloned().map(Query::Params);
        Ok(HttpRequest {
            method,
            url: build_url(&target, query.as_ref())?,
            headers: self.headers_for(&target),
            body: None,
        })
    }

    fn build_with_body(&self, method: HttpMethod, target: Target, params: &Params) -> Result<HttpRequest> {
        Ok(HttpRequest {
            method,
            url: build_url(&target, None)?,
            headers: self.headers_for(&target),
            body: Some(FormBody {
                fields: body_fields(params),
            }),
        })
    }

    fn headers_for(&self, target: &Target) -> Vec<(String, String)> {
        let mut headers = Vec::with_capacity(self.config.headers.len() + 2);
        if find_header(&self.config.headers, "user-agent").is_none() {
            headers.push(("User-Agent".to_string(), self.config.user_agent.clone()));
        }
        headers.extend(self.config.headers.iter().cloned());
        if let Some(auth) = target.basic_auth() {
            headers.push(("Authorization".to_string(), auth));
        }
        headers
    }

    /// Execute `request` and classify the outcome. Error statuses are
    /// returned as `Ok(Response)`.
    pub fn send(&self, request: &HttpRequest) -> Result<Response> {
        debug!(
            "{} {} ({} body fields)",
            request.method,
            request.url,
            request.body.as_ref().map_or(0, |b| b.fields.len())
        );
        let response = Response::from(self.transport.execute(request)?);
        debug!("{} {} -> {:?}", request.method, request.url, response.kind());
        Ok(response)
    }

    pub fn get(&self, target: impl Into<Target>, params: Option<&Params>) -> Result<Response> {
        self.send(&self.build_get(target, params)?)
    }

    pub fn post(&self, target: impl Into<Target>, params: &Params) -> Result<Response> {
        self.send(&self.build_post(target, params)?)
    }

    pub fn put(&self, target: impl Into<Target>, params: &Params) -> Result<Response> {
        self.send(&self.build_put(target, params)?)
    }

    pub fn delete(&self, target: impl Into<Target>, params: Option<&Params>) -> Result<Response> {
        self.send(&self.build_delete(target, params)?)
    }
}

/// GET `target` with `params` appended as the query string.
pub fn get(target: impl Into<Target>, params: Option<&Params>) -> Result<Response> {
    Client::new().get(target, params)
}

/// POST `params` to `target` as form fields.
pub fn post(target: impl Into<Target>, params: &Params) -> Result<Response> {
    Client::new().post(target, params)
}

/// PUT `params` to `target` as form fields.
pub fn put(target: impl Into<Target>, params: &Params) -> Result<Response> {
    Client::new().put(target, params)
}

pub fn delete(target: impl Into<Target>, params: Option<&Params>) -> Result<Response> {
    Client::new().delete(target, params)
}
