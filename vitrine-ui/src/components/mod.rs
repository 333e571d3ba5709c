//! UI Components
//!
//! Leptos components for the dashboard panels.

pub mod chart;
pub mod loading;
pub mod nav;
pub mod order_modal;
pub mod stats;
pub mod tables;
pub mod toast;

pub use chart::{CanvasCharts, ChartCanvas};
pub use loading::Loading;
pub use nav::Nav;
pub use order_modal::OrderModal;
pub use stats::StatsPanel;
pub use tables::{ClientsTable, OrdersTable, ProductsTable};
pub use toast::Toast;
