//! Command-line interface.

use clap::Parser;

use super::transport::config::{DEFAULT_PORT, DEFAULT_THREADS};

/// Stateless HTTP API over the RDKit cheminformatics toolkit.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "server", version, about, long_about = None)]
pub struct Cli {
    /// Port to listen on (all IPv4 interfaces).
    #[arg(value_name = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Number of worker threads serving requests.
    #[arg(value_name = "THREADS", default_value_t = DEFAULT_THREADS)]
    pub threads: usize,
}
