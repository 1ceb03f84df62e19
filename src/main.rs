//! Server Entry Point
//!
//! Parses the command line, initializes logging, builds a runtime with the
//! requested number of workers, loads RDKit and the PAINS catalog, then
//! serves HTTP until the process is killed.

use anyhow::Result;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use chem_api_server::core::{ChemServer, Cli, Config, HttpTransport};
use chem_api_server::domains::toolkit::RdkitToolkit;

/// Line written to stdout once the server is ready for traffic.
const STARTED_BANNER: &str = "Pistache RDKit API started";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);
    config.validate()?;

    init_logging(&config.logging.level);

    // Handlers hand toolkit work to the blocking pool, so both pools share
    // the configured size.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.transport.threads)
        .max_blocking_threads(config.transport.threads)
        .enable_all()
        .build()?;

    runtime.block_on(run(config))
}

async fn run(config: Config) -> Result<()> {
    let toolkit = RdkitToolkit::new()?;
    let server = ChemServer::new(config.clone(), toolkit)?;
    info!("Starting {} v{}", server.name(), server.version());

    let transport = HttpTransport::new(config.transport).init(server).await?;
    println!("{}", STARTED_BANNER);

    transport.serve().await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Diagnostics go to stderr; stdout only carries the startup banner.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
