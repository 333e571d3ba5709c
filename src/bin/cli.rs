//! Vitrine CLI
//!
//! One-shot queries against the store backend:
//! - Summary statistics and sales charts
//! - Product, client and order listings
//! - Order detail
//! - Default config generation

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use vitrine::config::{generate_default_config, with_startup_logging, Config};
use vitrine::error::LoadError;
use vitrine::render::{
    category_chart, monthly_chart, render_clients, render_order_detail, render_orders,
    render_products, render_stats,
};
use vitrine::terminal;
use vitrine::{ChartSlot, DashboardApi, HttpTransport};

#[derive(Parser)]
#[command(name = "vitrine-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query the store backend from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (default: from config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summary statistics
    Stats {
        /// Also print sales by category and by month
        #[arg(short, long)]
        charts: bool,
    },

    /// List products
    Products,

    /// List clients
    Clients,

    /// List orders
    Orders,

    /// Show one order with its items
    Order {
        /// Order id
        id: u64,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if let Commands::Config { output } = &cli.command {
        let config = generate_default_config();

        match output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &config)?;
                println!("Config written to {:?}", path);
            }
            None => {
                print!("{}", config);
            }
        }
        return Ok(());
    }

    let mut config = with_startup_logging(Config::load_default);
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    let base_url = config.api.base_url.clone();
    let api = DashboardApi::new(HttpTransport::new(&config.api)?);

    match cli.command {
        Commands::Stats { charts } => {
            let stats = api.stats().await.unwrap_or_else(|e| fail(&base_url, e));

            if json && !charts {
                print_json(&stats)?;
                return Ok(());
            }

            let (categories, months) = if charts {
                let (categories, months) =
                    futures_util::join!(api.sales_by_category(), api.monthly_sales());
                (
                    categories.unwrap_or_else(|e| fail(&base_url, e)),
                    months.unwrap_or_else(|e| fail(&base_url, e)),
                )
            } else {
                (Vec::new(), Vec::new())
            };

            if json {
                print_json(&serde_json::json!({
                    "stats": stats,
                    "sales_by_category": categories,
                    "monthly_sales": months,
                }))?;
            } else {
                print!("{}", terminal::format_stats(&render_stats(&stats)));
                if charts {
                    println!();
                    print!(
                        "{}",
                        terminal::format_chart(ChartSlot::Category, &category_chart(&categories))
                    );
                    println!();
                    print!(
                        "{}",
                        terminal::format_chart(ChartSlot::Monthly, &monthly_chart(&months))
                    );
                }
            }
        }

        Commands::Products => {
            let products = api.products().await.unwrap_or_else(|e| fail(&base_url, e));
            if json {
                print_json(&products)?;
            } else {
                print!("{}", terminal::format_products(&render_products(&products)));
            }
        }

        Commands::Clients => {
            let clients = api.clients().await.unwrap_or_else(|e| fail(&base_url, e));
            if json {
                print_json(&clients)?;
            } else {
                print!("{}", terminal::format_clients(&render_clients(&clients)));
            }
        }

        Commands::Orders => {
            let orders = api.orders().await.unwrap_or_else(|e| fail(&base_url, e));
            if json {
                print_json(&orders)?;
            } else {
                print!("{}", terminal::format_orders(&render_orders(&orders)));
            }
        }

        Commands::Order { id } => {
            let order = api.order(id).await.unwrap_or_else(|e| fail(&base_url, e));
            if json {
                print_json(&order)?;
            } else {
                print!("{}", terminal::format_order_detail(&render_order_detail(&order)));
            }
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

fn print_json<S: Serialize + ?Sized>(value: &S) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn fail(base_url: &str, error: LoadError) -> ! {
    match &error {
        LoadError::Status { status: 404, .. } => {
            eprintln!("Not found: {}", error);
        }
        e if e.is_network() => {
            eprintln!("Cannot connect to the store API at {}", base_url);
            eprintln!("Error: {}", error);
            eprintln!();
            eprintln!("Check the backend is running or pass --api-url.");
        }
        e => {
            eprintln!("Request failed: {}", e);
        }
    }
    std::process::exit(1);
}
