//! Working-hours website (v1)
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │                 office-hours                  │
//!                     │                                              │
//!   Client Request    │  ┌──────────┐   ┌──────────┐   ┌──────────┐  │
//!   ──────────────────┼─▶│ request  │──▶│  public  │──▶│   gate   │  │
//!                     │  │ id/trace │   │  assets  │   │ Mon-Fri  │  │
//!                     │  └──────────┘   └────┬─────┘   │  9 - 17  │  │
//!                     │                      │ hit     └────┬─────┘  │
//!   Client Response   │                      ▼              ▼        │
//!   ◀─────────────────┼──────────────── static file   page / denial │
//!                     │                                              │
//!                     │   config · observability · lifecycle         │
//!                     └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

use office_hours::config::{load_config, validate_config, ConfigError, SiteConfig};
use office_hours::lifecycle::signals;
use office_hours::observability::{logging, metrics};
use office_hours::{HttpServer, SystemClock};

#[derive(Parser)]
#[command(name = "office-hours")]
#[command(about = "Static site that only opens during working hours", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => {
            let config = SiteConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            config
        }
    };

    logging::init(&config.observability);

    tracing::info!("office-hours v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        days = ?config.access_window.days,
        open_hour = config.access_window.open_hour,
        close_hour = config.access_window.close_hour,
        public_dir = %config.site.public_dir.display(),
        views_dir = %config.site.views_dir.display(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Server is running"
    );

    let server = HttpServer::new(config, Arc::new(SystemClock));
    server.run(listener, signals::wait_for_shutdown()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
