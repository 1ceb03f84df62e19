//! HTTP transport implementation.
//!
//! HTTP/1.1 listener serving the endpoint route table. Request bodies are
//! raw; there is no content negotiation and no authentication.

use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::ChemServer;
use crate::domains::endpoints::{EndpointRegistry, build_router};
use crate::domains::toolkit::Toolkit;

/// HTTP transport handler, before initialization.
pub struct HttpTransport {
    config: HttpConfig,
}

/// An initialized transport: options applied, socket bound, routes attached.
pub struct BoundTransport {
    listener: TcpListener,
    app: Router,
    local_addr: SocketAddr,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Bind the listener and attach the route table for `server`.
    pub async fn init<T: Toolkit>(self, server: ChemServer<T>) -> TransportResult<BoundTransport> {
        let addr = self.address();
        info!("Starting transport: {}", self.config.description());

        let app = build_router(server).layer(TraceLayer::new_for_http());

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;
        let local_addr = listener.local_addr()?;

        info!("Ready - listening on {}", local_addr);
        for endpoint in EndpointRegistry::all() {
            info!("  → {:<4} {}", endpoint.method, endpoint.path);
        }

        Ok(BoundTransport {
            listener,
            app,
            local_addr,
        })
    }
}

impl BoundTransport {
    /// The address actually bound (useful when port 0 was requested).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve requests until the process is terminated.
    pub async fn serve(self) -> TransportResult<()> {
        axum::serve(self.listener, self.app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}
