//! Overview stats cards

use serde::Serialize;

use crate::badge::{self, Badge};
use crate::format::format_currency;
use crate::model::Stats;

/// Display ids of the four overview cards
pub const TOTAL_CLIENTS_ID: &str = "total-clientes";
pub const TOTAL_PRODUCTS_ID: &str = "total-produtos";
pub const TOTAL_ORDERS_ID: &str = "total-pedidos";
pub const TOTAL_REVENUE_ID: &str = "receita-total";

/// Text for each overview card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsCards {
    pub total_clients: String,
    pub total_products: String,
    pub total_orders: String,
    pub total_revenue: String,
    /// Only present when the backend reports it
    pub total_suppliers: Option<String>,
    pub by_status: Vec<StatusTally>,
}

/// One entry of the orders-per-status breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusTally {
    pub status: String,
    pub count: String,
    pub badge: Badge,
}

impl StatsCards {
    /// `(display id, text)` pairs in card order
    pub fn cards(&self) -> [(&'static str, &str); 4] {
        [
            (TOTAL_CLIENTS_ID, self.total_clients.as_str()),
            (TOTAL_PRODUCTS_ID, self.total_products.as_str()),
            (TOTAL_ORDERS_ID, self.total_orders.as_str()),
            (TOTAL_REVENUE_ID, self.total_revenue.as_str()),
        ]
    }
}

/// Map a stats payload onto the overview cards
pub fn render_stats(stats: &Stats) -> StatsCards {
    StatsCards {
        total_clients: stats.total_clientes.to_string(),
        total_products: stats.total_produtos.to_string(),
        total_orders: stats.total_pedidos.to_string(),
        total_revenue: format_currency(stats.receita_total),
        total_suppliers: stats.total_fornecedores.map(|n| n.to_string()),
        by_status: stats
            .pedidos_por_status
            .iter()
            .map(|s| StatusTally {
                status: s.status.clone(),
                count: s.total.to_string(),
                badge: badge::order_status(&s.status),
            })
            .collect(),
    }
}
