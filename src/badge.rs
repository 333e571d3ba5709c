//! Badge lookups
//!
//! Every lookup here is total: unknown inputs land on a fallback badge.

use serde::Serialize;

/// Stock below this count is flagged
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Visual category of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    Primary,
    Info,
    Success,
    Warning,
    Danger,
    Secondary,
}

impl Badge {
    /// CSS class used by the browser dashboard
    pub fn css_class(self) -> &'static str {
        match self {
            Badge::Primary => "bg-primary",
            Badge::Info => "bg-info",
            Badge::Success => "bg-success",
            Badge::Warning => "bg-warning",
            Badge::Danger => "bg-danger",
            Badge::Secondary => "bg-secondary",
        }
    }

    /// ANSI colour code used by the terminal dashboard
    pub fn ansi_color(self) -> u8 {
        match self {
            Badge::Primary => 34,
            Badge::Info => 36,
            Badge::Success => 32,
            Badge::Warning => 33,
            Badge::Danger => 31,
            Badge::Secondary => 90,
        }
    }
}

/// Badge for an order status
pub fn order_status(status: &str) -> Badge {
    match status {
        "Pendente" => Badge::Warning,
        "Processando" => Badge::Info,
        "Enviado" => Badge::Primary,
        "Entregue" => Badge::Success,
        "Cancelado" => Badge::Danger,
        _ => Badge::Secondary,
    }
}

/// Badge for a client type (`PF` individual, anything else business)
pub fn client_type(kind: &str) -> Badge {
    match kind {
        "PF" => Badge::Primary,
        _ => Badge::Info,
    }
}

/// Badge for a stock level
pub fn stock_level(stock: i64) -> Badge {
    if stock < LOW_STOCK_THRESHOLD {
        Badge::Danger
    } else {
        Badge::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_known() {
        assert_eq!(order_status("Pendente"), Badge::Warning);
        assert_eq!(order_status("Processando"), Badge::Info);
        assert_eq!(order_status("Enviado"), Badge::Primary);
        assert_eq!(order_status("Entregue"), Badge::Success);
        assert_eq!(order_status("Cancelado"), Badge::Danger);
    }

    #[test]
    fn test_order_status_fallback() {
        for status in ["", "entregue", "Devolvido", "???"] {
            assert_eq!(order_status(status), Badge::Secondary);
        }
    }

    #[test]
    fn test_client_type() {
        assert_eq!(client_type("PF"), Badge::Primary);
        assert_eq!(client_type("PJ"), Badge::Info);
        assert_eq!(client_type(""), Badge::Info);
    }

    #[test]
    fn test_stock_level_threshold() {
        assert_eq!(stock_level(0), Badge::Danger);
        assert_eq!(stock_level(9), Badge::Danger);
        assert_eq!(stock_level(10), Badge::Success);
        assert_eq!(stock_level(-1), Badge::Danger);
    }

    #[test]
    fn test_css_class() {
        assert_eq!(order_status("Entregue").css_class(), "bg-success");
        assert_eq!(order_status("x").css_class(), "bg-secondary");
    }
}
