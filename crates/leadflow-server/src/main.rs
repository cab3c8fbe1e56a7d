//! Binary entrypoint for the leadflow intake server.
//!
//! Reads configuration from environment variables:
//! - `PORT`: Server listen port (default: "3000")
//! - `LEADS_FILE`: JSON store path (default: "leads.json")
//! - `RUST_LOG`: tracing filter (default: "info")

use std::process;

use leadflow_server::config::ServerConfig;
use leadflow_server::router::serve;
use leadflow_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{}", err);
            process::exit(2);
        }
    };

    let state = AppState::new(&config.leads_file);
    let addr = config.bind_addr();

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind {}: {}", addr, err);
            process::exit(1);
        }
    };

    tracing::info!("leadflow server running on port {}", config.port);
    tracing::info!("Leads endpoint: http://localhost:{}/api/leads", config.port);
    tracing::info!("Calendly webhook: http://localhost:{}/api/calendly-webhook", config.port);
    tracing::info!("Storing leads in {}", config.leads_file.display());

    if let Err(err) = serve(listener, state).await {
        tracing::error!("server error: {}", err);
        process::exit(1);
    }
}
