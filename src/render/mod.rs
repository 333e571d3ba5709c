//! Renderers
//!
//! Pure functions from backend payloads to display models. Front ends receive
//! those models through [`RenderTarget`]s, so fetching and presentation never
//! touch each other.
//!
//! - **stats**: the four overview cards plus the per-status tally
//! - **tables**: product, client and order rows
//! - **detail**: the order-detail overlay
//! - **chart**: doughnut and line chart configurations

mod chart;
mod detail;
mod stats;
mod tables;

pub use chart::{category_chart, monthly_chart, ChartConfig, ChartKind};
pub use detail::{render_order_detail, OrderDetailView, OrderItemRow};
pub use stats::{
    render_stats, StatsCards, StatusTally, TOTAL_CLIENTS_ID, TOTAL_ORDERS_ID, TOTAL_PRODUCTS_ID,
    TOTAL_REVENUE_ID,
};
pub use tables::{
    render_clients, render_orders, render_products, ClientRow, OrderRow, ProductRow,
};

/// Something that can display a model
///
/// A target that is not mounted simply ignores the call.
pub trait RenderTarget<M: ?Sized> {
    fn render(&mut self, model: &M);
}

impl<M: ?Sized, F> RenderTarget<M> for F
where
    F: FnMut(&M),
{
    fn render(&mut self, model: &M) {
        self(model)
    }
}

/// User-visible error notifications
pub trait Notifier {
    fn error(&mut self, message: &str);
}
