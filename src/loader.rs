//! Request generations
//!
//! Every loader numbers its requests. A response is applied only if nothing
//! newer was issued for the same loader while it was in flight, so a slow
//! early response can never overwrite a fresher one.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// The independent loaders of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Loader {
    Stats,
    CategoryChart,
    MonthlyChart,
    Products,
    Clients,
    Orders,
    OrderDetail,
}

impl Loader {
    /// What the user is told when this loader fails
    pub fn failure_message(self) -> &'static str {
        match self {
            Loader::Stats => "Erro ao carregar estatísticas",
            Loader::CategoryChart | Loader::MonthlyChart => "Erro ao carregar gráficos",
            Loader::Products => "Erro ao carregar produtos",
            Loader::Clients => "Erro ao carregar clientes",
            Loader::Orders => "Erro ao carregar pedidos",
            Loader::OrderDetail => "Erro ao carregar detalhes do pedido",
        }
    }
}

impl fmt::Display for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Loader::Stats => "stats",
            Loader::CategoryChart => "category_chart",
            Loader::MonthlyChart => "monthly_chart",
            Loader::Products => "products",
            Loader::Clients => "clients",
            Loader::Orders => "orders",
            Loader::OrderDetail => "order_detail",
        };
        f.write_str(name)
    }
}

/// Proof that a request was issued, and when
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub loader: Loader,
    pub generation: u64,
}

/// Latest issued generation per loader
#[derive(Debug, Default)]
pub struct Generations {
    latest: HashMap<Loader, u64>,
}

impl Generations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket for `loader`
    pub fn issue(&mut self, loader: Loader) -> Ticket {
        let generation = self.latest.entry(loader).or_insert(0);
        *generation += 1;
        Ticket {
            loader,
            generation: *generation,
        }
    }

    /// Whether `ticket` is still the newest for its loader
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get(&ticket.loader).copied() == Some(ticket.generation)
    }
}
