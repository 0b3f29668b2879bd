//! Blocking HTTP request helpers.
//!
//! # Overview
//! Builds URLs from raw strings or `{host, port, path}` descriptors, encodes
//! parameter mappings as query strings or form fields, and issues
//! GET/POST/PUT/DELETE requests through a blocking client. Every completed
//! exchange comes back as a `Response` tagged by status code, including
//! 4xx and 5xx.
//!
//! # Design
//! - `Client` is stateless apart from its config and transport.
//! - Each verb is split into `build_*` (produces a plain-data `HttpRequest`)
//!   and `send` (executes and classifies), so the I/O boundary is explicit.
//! - `Transport` is the seam to the underlying client (`ureq` by default).
//! - Neither the query nor the form encoder percent-escapes.
//!
//! ```no_run
//! use easyhttp_core::{Params, ResponseKind, TargetDescriptor};
//!
//! let target = TargetDescriptor::new("localhost").port(3000).path("/search");
//! let response = easyhttp_core::get(target, Some(&Params::new().with("q", "rust")))?;
//! if response.kind() == ResponseKind::NotFound {
//!     println!("nothing at {}", response.status());
//! }
//! # Ok::<(), easyhttp_core::Error>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod params;
pub mod response;
pub mod target;
pub mod transport;

pub use client::{delete, get, post, put, Client};
pub use config::RequestConfig;
pub use error::{Error, Result};
pub use http::{FormBody, HttpMethod, HttpRequest, RawResponse};
pub use params::{body_fields, build_query_string, BodyField, ParamValue, Params};
pub use response::{classify, Response, ResponseKind};
pub use target::{build_url, Query, Target, TargetDescriptor};
pub use transport::{Transport, UreqTransport};
