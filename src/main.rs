//! quote-server - quote-request intake with a single-writer CSV log

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quote_server::api::{create_router, AppState};
use quote_server::config::{Config, DEFAULT_BODY_LIMIT_BYTES};
use quote_server::record::ValidationLimits;
use quote_server::sequencer::{Sequencer, SequencerConfig};
use quote_server::storage::CsvLogFile;
use quote_server::traits::LogStorage;

#[derive(Parser, Debug)]
#[command(name = "quote-server")]
#[command(about = "Quote-request intake server with an append-only CSV log")]
struct Args {
    /// Host to bind to
    #[arg(long, env = "QUOTE_SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind to
    #[arg(long, env = "QUOTE_SERVER_PORT", default_value = "2999")]
    port: u16,

    /// Path to the CSV quote log
    #[arg(long, env = "QUOTE_LOG_PATH", default_value = "./database/teklif.csv")]
    log_path: PathBuf,

    /// Log level
    #[arg(long, env = "QUOTE_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Maximum characters per submission field
    #[arg(long, env = "QUOTE_MAX_FIELD_CHARS", default_value = "2000")]
    max_field_chars: usize,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            host: args.host,
            port: args.port,
            log_path: args.log_path,
            log_level: args.log_level,
            limits: ValidationLimits {
                max_field_chars: args.max_field_chars,
            },
            sequencer: SequencerConfig::from_env(),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from(Args::parse());

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting quote-server v{}", env!("CARGO_PKG_VERSION"));

    config.sequencer.validate()?;

    let log = CsvLogFile::new(&config.log_path);
    log.initialize()
        .with_context(|| format!("failed to initialize {}", config.log_path.display()))?;
    let storage: Arc<dyn LogStorage> = Arc::new(log);

    let (sequencer, handle) = Sequencer::new(Arc::clone(&storage), config.sequencer.clone());
    let sequencer_task = tokio::spawn(sequencer.run());

    let state = Arc::new(AppState {
        sequencer: handle,
        storage,
        limits: config.limits,
        body_limit_bytes: config.body_limit_bytes,
    });
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;

    tracing::info!(
        addr = %config.bind_addr(),
        log_path = %config.log_path.display(),
        "Listening; health check at /api/health"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // The router (and with it the last SequencerHandle) is gone; wait for
    // the rows that were already accepted.
    sequencer_task.await?;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
