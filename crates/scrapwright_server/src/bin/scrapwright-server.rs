//! Scrapwright server - designs objects from scrap wood inventories.
//!
//! Serves the generation endpoint and a health probe until Ctrl-C or SIGTERM.

use clap::Parser;
use scrapwright_models::GeminiClient;
use scrapwright_server::{
    CredentialSource, EnvCredentials, GenerationService, LogFormat, ServerConfig, create_router,
    init_tracing,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Command-line arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "scrapwright-server")]
#[command(about = "Scrapwright - 3D assembly designs from scrap wood")]
#[command(version)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "SCRAPWRIGHT_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on, e.g. 127.0.0.1:3000
    #[arg(long, env = "SCRAPWRIGHT_BIND_ADDR")]
    bind_addr: Option<String>,

    /// Provider model identifier
    #[arg(long, env = "SCRAPWRIGHT_MODEL")]
    model: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Validate configuration and exit
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_format);

    info!("Starting Scrapwright server");

    let config = match &args.config {
        Some(path) => {
            info!(config_file = ?path, "Loading configuration");
            ServerConfig::from_file(path)?
        }
        None => ServerConfig::default(),
    }
    .with_overrides(args.bind_addr, args.model);
    config.validate()?;
    let addr = config.socket_addr()?;

    let credentials = EnvCredentials::new(config.api_key_var());
    if credentials.api_key().is_none() {
        warn!(
            var = credentials.var(),
            "API key not set - generation requests will fail until it is configured"
        );
    }

    info!(
        bind_addr = %addr,
        route = %config.route(),
        model = %config.model(),
        provider = %config.provider_base_url(),
        "Configuration loaded"
    );

    if args.dry_run {
        info!("DRY RUN MODE - configuration is valid, exiting");
        return Ok(());
    }

    let provider = GeminiClient::new(config.model(), config.provider_base_url());
    let service = GenerationService::new(Arc::new(provider), Arc::new(credentials));
    let app = create_router(service, config.route());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down Scrapwright server...");
}
