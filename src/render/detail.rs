//! Order-detail overlay

use serde::Serialize;

use crate::badge::{self, Badge};
use crate::format::{format_currency, format_date, or_not_available};
use crate::model::OrderDetail;

/// Everything the order overlay shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetailView {
    pub id: u64,
    /// Overlay title, e.g. `Pedido #7`
    pub title: String,

    // Customer column
    pub customer: String,
    pub email: String,
    pub phone: String,

    // Order column
    pub date: String,
    pub status: String,
    pub status_badge: Badge,
    pub total: String,

    pub items: Vec<OrderItemRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItemRow {
    pub product: String,
    pub quantity: u32,
    pub unit_price: String,
    pub subtotal: String,
    /// Subtotal exactly as sent by the backend
    pub subtotal_value: f64,
}

pub fn render_order_detail(order: &OrderDetail) -> OrderDetailView {
    OrderDetailView {
        id: order.id,
        title: format!("Pedido #{}", order.id),
        customer: order.cliente.clone(),
        email: order.email.clone(),
        phone: or_not_available(order.telefone.as_deref()),
        date: format_date(&order.data_pedido),
        status: order.status.clone(),
        status_badge: badge::order_status(&order.status),
        total: format_currency(order.total),
        items: order
            .itens
            .iter()
            .map(|item| OrderItemRow {
                product: item.produto.clone(),
                quantity: item.quantidade,
                unit_price: format_currency(item.preco_unitario),
                subtotal: format_currency(item.subtotal),
                subtotal_value: item.subtotal,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderItem;

    #[test]
    fn test_two_item_order() {
        let order = OrderDetail {
            id: 7,
            cliente: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            telefone: None,
            data_pedido: "2024-03-05".to_string(),
            status: "Entregue".to_string(),
            total: 174.9,
            itens: vec![
                OrderItem {
                    produto: "Caneca".to_string(),
                    quantidade: 2,
                    preco_unitario: 25.0,
                    subtotal: 50.0,
                },
                OrderItem {
                    produto: "Camiseta".to_string(),
                    quantidade: 1,
                    preco_unitario: 124.9,
                    subtotal: 124.9,
                },
            ],
        };

        let view = render_order_detail(&order);
        assert_eq!(view.title, "Pedido #7");
        assert_eq!(view.phone, "N/A");
        assert_eq!(view.date, "05/03/2024");
        assert_eq!(view.status_badge, Badge::Success);
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].subtotal, "R$\u{a0}50,00");
        assert_eq!(view.items[1].subtotal_value, 124.9);
        assert_eq!(view.items[1].unit_price, "R$\u{a0}124,90");
    }

    #[test]
    fn test_order_without_items() {
        let view = render_order_detail(&OrderDetail::default());
        assert!(view.items.is_empty());
        assert_eq!(view.title, "Pedido #0");
    }
}
