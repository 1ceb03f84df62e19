//! Transport layer for the server.
//!
//! A single HTTP/1.1 listener bound to an IPv4 wildcard address. It goes
//! through three stages: constructed ([`HttpTransport`]), initialized with
//! its options applied, socket bound and routes attached ([`BoundTransport`]),
//! then serving until the process is terminated.

pub mod config;
mod error;
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use self::http::{BoundTransport, HttpTransport};
