//! # Vitrine
//!
//! E-commerce admin dashboard client. Fetches store summaries from the backend
//! API and turns them into stats cards, tables, badges and charts, with a
//! periodic refresh of whichever view is active.
//!
//! ## Modules
//!
//! - [`api`]: Endpoint paths, the [`Transport`] seam and typed fetches
//! - [`model`]: Payloads returned by the backend
//! - [`format`]: pt-BR currency and date formatting
//! - [`badge`]: Status/type/stock badge lookups
//! - [`render`]: Pure renderers producing display models and chart configs
//! - [`view`]: View router and navigation surface
//! - [`charts`]: Chart slots with dispose-before-replace
//! - [`loader`]: Request generations
//! - [`dashboard`]: The [`DashboardClient`] controller
//! - [`scheduler`]: Refresh interval and dispatch
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vitrine::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let transport = HttpTransport::new(&config.api)?;
//!
//!     let dashboard = DashboardClient::new(
//!         DashboardApi::new(transport),
//!         TerminalCharts::default(),
//!         Targets::terminal(),
//!     );
//!
//!     dashboard.start().await;
//!     dashboard.select_view("orders").await;
//!     dashboard.show_order(7).await;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod badge;
pub mod charts;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod loader;
pub mod model;
pub mod render;
pub mod scheduler;
pub mod view;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod http;
#[cfg(feature = "native")]
pub mod terminal;

pub use api::{paths, DashboardApi, Transport};
pub use badge::Badge;
pub use charts::{ChartBackend, ChartSlot, ChartSlots};
pub use dashboard::{DashboardClient, Targets};
pub use error::{LoadError, LoadResult};
pub use loader::{Generations, Loader, Ticket};
pub use model::{
    CategorySales, Client, MonthlySales, Order, OrderDetail, OrderItem, Product, Stats,
    StatusCount,
};
pub use render::{
    ChartConfig, ChartKind, ClientRow, Notifier, OrderDetailView, OrderItemRow, OrderRow,
    ProductRow, RenderTarget, StatsCards,
};
pub use scheduler::{RefreshScheduler, REFRESH_INTERVAL};
pub use view::{View, ViewRouter, ViewSurface};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
#[cfg(feature = "native")]
pub use http::HttpTransport;
#[cfg(feature = "native")]
pub use terminal::TerminalCharts;

/// Common imports for front ends
pub mod prelude {
    pub use crate::api::{DashboardApi, Transport};
    pub use crate::charts::{ChartBackend, ChartSlot};
    pub use crate::dashboard::{DashboardClient, Targets};
    pub use crate::error::LoadError;
    pub use crate::render::{Notifier, RenderTarget};
    pub use crate::view::{View, ViewSurface};

    #[cfg(feature = "native")]
    pub use crate::config::Config;
    #[cfg(feature = "native")]
    pub use crate::http::HttpTransport;
    #[cfg(feature = "native")]
    pub use crate::terminal::TerminalCharts;
}
