//! anomview-server: run the dev host.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use anomview_server::{serve, ServerConfig};

#[derive(Parser)]
#[command(
    name = "anomview-server",
    about = "Serve the anomview frontend and forward its API calls",
    version,
    author
)]
struct Cli {
    /// Host to bind to
    #[arg(long, env = "ANOMVIEW_HOST", default_value = "127.0.0.1")]
    host: String,
    /// Port to bind to
    #[arg(long, short, env = "ANOMVIEW_PORT", default_value_t = 8000)]
    port: u16,
    /// Base URL of the analysis service
    #[arg(long, env = "ANOMVIEW_SERVICE_URL", default_value = "http://localhost:5002")]
    service_url: String,
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        ServerConfig {
            host: cli.host,
            port: cli.port,
            service_url: cli.service_url,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    serve(cli.into()).await
}
