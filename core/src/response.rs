//! Status-keyed response wrappers.
//!
//! # Design
//! `ResponseKind` is a closed enum: every named status has its own variant
//! and anything else lands in `Other(status)`, so a `match` over it is
//! exhaustive and classification can never fail.

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http::{find_header, RawResponse};

macro_rules! response_kinds {
    ($($variant:ident = $code:literal,)*) => {
        /// Variant tag derived from an HTTP status code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ResponseKind {
            $($variant,)*
            /// Any status without a named variant.
            Other(u16),
        }

        impl ResponseKind {
            /// Total mapping from status code to variant.
            pub fn from_status(status: u16) -> Self {
                match status {
                    $($code => ResponseKind::$variant,)*
                    other => ResponseKind::Other(other),
                }
            }

            pub fn status(&self) -> u16 {
                match self {
                    $(ResponseKind::$variant => $code,)*
                    ResponseKind::Other(status) => *status,
                }
            }
        }
    };
}

response_kinds! {
    Continue = 100,
    SwitchingProtocols = 101,
    Ok = 200,
    Created = 201,
    Accepted = 202,
    NonAuthoritativeInformation = 203,
    NoContent = 204,
    ResetContent = 205,
    PartialContent = 206,
    MultipleChoices = 300,
    MovedPermanently = 301,
    Found = 302,
    SeeOther = 303,
    NotModified = 304,
    UseProxy = 305,
    TemporaryRedirect = 307,
    PermanentRedirect = 308,
    BadRequest = 400,
    Unauthorized = 401,
    PaymentRequired = 402,
    Forbidden = 403,
    NotFound = 404,
    MethodNotAllowed = 405,
    NotAcceptable = 406,
    ProxyAuthenticationRequired = 407,
    RequestTimeout = 408,
    Conflict = 409,
    Gone = 410,
    LengthRequired = 411,
    PreconditionFailed = 412,
    PayloadTooLarge = 413,
    UriTooLong = 414,
    UnsupportedMediaType = 415,
    RangeNotSatisfiable = 416,
    ExpectationFailed = 417,
    UnprocessableEntity = 422,
    TooManyRequests = 429,
    InternalServerError = 500,
    NotImplemented = 501,
    BadGateway = 502,
    ServiceUnavailable = 503,
    GatewayTimeout = 504,
    HttpVersionNotSupported = 505,
}

impl ResponseKind {
    pub fn is_informational(&self) -> bool {
        (100..200).contains(&self.status())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status())
    }

    pub fn is_redirection(&self) -> bool {
        (300..400).contains(&self.status())
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status())
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status())
    }
}

/// Outcome of a completed HTTP exchange. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    kind: ResponseKind,
    status: u16,
    body: String,
    headers: Vec<(String, String)>,
}

/// Wrap a status code and body in the matching response variant.
pub fn classify(status: u16, body: impl Into<String>) -> Response {
    Response {
        kind: ResponseKind::from_status(status),
        status,
        body: body.into(),
        headers: Vec::new(),
    }
}

impl Response {
    pub fn kind(&self) -> ResponseKind {
        self.kind
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_body(self) -> String {
        self.body
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    pub fn content_length(&self) -> Option<u64> {
        self.header("content-length")?.trim().parse().ok()
    }

    pub fn is_informational(&self) -> bool {
        self.kind.is_informational()
    }

    pub fn is_success(&self) -> bool {
        self.kind.is_success()
    }

    pub fn is_redirection(&self) -> bool {
        self.kind.is_redirection()
    }

    pub fn is_client_error(&self) -> bool {
        self.kind.is_client_error()
    }

    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

impl From<RawResponse> for Response {
    fn from(raw: RawResponse) -> Self {
        Response {
            headers: raw.headers,
            ..classify(raw.status, raw.body)
        }
    }
}
