//! Vitrine terminal dashboard
//!
//! Loads the overview once, then keeps the active view fresh until Ctrl-C.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrine::config::{with_startup_logging, LoggingConfig};
use vitrine::prelude::*;
use vitrine::RefreshScheduler;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Store admin dashboard in the terminal")]
struct Args {
    /// Config file (default: search the usual locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL, overrides the config file
    #[arg(long)]
    api_url: Option<String>,

    /// View to open after the first load (overview, products, clients, orders)
    #[arg(short, long)]
    view: Option<String>,

    /// Render once and exit
    #[arg(long)]
    once: bool,
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("vitrine={}", logging.level)));

    let registry = tracing_subscriber::registry().with(filter);

    // Panels go to stdout, so logs stay on stderr
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = with_startup_logging(|| match &args.config {
        Some(path) => Config::load_with_env(path),
        None => Ok(Config::load_default()),
    })?;
    if let Some(url) = args.api_url {
        config.api.base_url = url;
    }

    init_logging(&config.logging);
    tracing::info!("Vitrine v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Backend: {}", config.api.base_url);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(config, args.view, args.once))
}

async fn run(
    config: Config,
    view: Option<String>,
    once: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let transport = HttpTransport::new(&config.api)?;
    let dashboard = DashboardClient::new(
        DashboardApi::new(transport),
        TerminalCharts::default(),
        Targets::terminal(),
    );

    dashboard.start().await;

    if let Some(id) = view {
        dashboard.select_view(&id).await;
    }

    if once || !config.refresh.enabled {
        return Ok(());
    }

    let scheduler = RefreshScheduler::new(config.refresh.interval());
    tracing::info!(
        "Refreshing every {}s, press Ctrl-C to quit",
        scheduler.period().as_secs()
    );

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };
    scheduler.run(&dashboard, shutdown).await;

    tracing::info!("Vitrine shutdown complete");
    Ok(())
}
