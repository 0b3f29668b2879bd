//! Request targets and URL assembly.

use std::borrow::Cow;
use std::net::Ipv6Addr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::params::{build_query_string, Params};

/// Structured alternative to a raw URL string.
///
/// Deserializes from a config table such as
/// `{ "host": "example.com", "port": 8080, "path": "/api" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDescriptor {
    #[serde(default)]
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl TargetDescriptor {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// `http://{host}[:{port}]{path}`.
    fn base_url(&self) -> Result<String> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(Error::InvalidTarget("host is missing".to_string()));
        }
        let host = authority_host(host)?;

        let mut url = format!("http://{host}");
        if let Some(port) = self.port {
            url.push_str(&format!(":{port}"));
        }
        if let Some(path) = self.path.as_deref().filter(|p| !p.is_empty()) {
            if !path.starts_with('/') {
                url.push('/');
            }
            url.push_str(path);
        }
        Ok(url)
    }

    /// Value for an `Authorization` header, present when a username is set.
    pub fn basic_auth(&self) -> Option<String> {
        let username = self.username.as_deref()?;
        let password = self.password.as_deref().unwrap_or("");
        Some(format!(
            "Basic {}",
            STANDARD.encode(format!("{username}:{password}"))
        ))
    }
}

/// Host as it appears in the URL authority. Bare IPv6 literals are
/// bracketed; a port or userinfo smuggled into the host is rejected.
fn authority_host(host: &str) -> Result<Cow<'_, str>> {
    if host.parse::<Ipv6Addr>().is_ok() {
        return Ok(Cow::Owned(format!("[{host}]")));
    }
    if let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        if inner.parse::<Ipv6Addr>().is_ok() {
            return Ok(Cow::Borrowed(host));
        }
    }
    if host.contains(['/', '?', '#', '@', ':', '[', ']'])
        || host.chars().any(char::is_whitespace)
    {
        return Err(Error::InvalidTarget(format!("malformed host {host:?}")));
    }
    Ok(Cow::Borrowed(host))
}

/// What a request is aimed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Used verbatim.
    Url(String),
    Descriptor(TargetDescriptor),
}

impl Target {
    /// The URL without any query appended.
    pub fn base_url(&self) -> Result<String> {
        match self {
            Target::Url(url) => Ok(url.clone()),
            Target::Descriptor(desc) => desc.base_url(),
        }
    }

    pub fn basic_auth(&self) -> Option<String> {
        match self {
            Target::Url(_) => None,
            Target::Descriptor(desc) => desc.basic_auth(),
        }
    }
}

impl From<&str> for Target {
    fn from(url: &str) -> Self {
        Target::Url(url.to_string())
    }
}

impl From<String> for Target {
    fn from(url: String) -> Self {
        Target::Url(url)
    }
}

impl From<&String> for Target {
    fn from(url: &String) -> Self {
        Target::Url(url.clone())
    }
}

impl From<TargetDescriptor> for Target {
    fn from(desc: TargetDescriptor) -> Self {
        Target::Descriptor(desc)
    }
}

/// Query component passed to `build_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Appended literally, including any leading `?`.
    Encoded(String),
    /// Appended as `?` plus the encoded pairs; nothing when empty.
    Params(Params),
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Query::Encoded(s.to_string())
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Query::Encoded(s)
    }
}

impl From<Params> for Query {
    fn from(params: Params) -> Self {
        Query::Params(params)
    }
}

/// Build an absolute URL from `target`, appending `query` when given.
pub fn build_url(target: &Target, query: Option<&Query>) -> Result<String> {
    let mut url = target.base_url()?;
    match query {
        Some(Query::Encoded(encoded)) => url.push_str(encoded),
        Some(Query::Params(params)) if !params.is_empty() => {
            url.push('?');
            url.push_str(&build_query_string(params));
        }
        Some(Query::Params(_)) | None => {}
    }
    Ok(url)
}
