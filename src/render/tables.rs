//! Listing tables
//!
//! One row per record, each computed on its own.

use serde::Serialize;

use crate::badge::{self, Badge};
use crate::format::{format_currency, format_date, or_not_available};
use crate::model::{Client, Order, Product};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    pub stock_badge: Badge,
    pub supplier: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientRow {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub kind: String,
    pub kind_badge: Badge,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRow {
    /// Raw id, used by the view-details action
    pub id: u64,
    /// Display id, e.g. `#7`
    pub label: String,
    pub customer: String,
    pub date: String,
    pub total: String,
    pub status: String,
    pub status_badge: Badge,
}

pub fn render_products(products: &[Product]) -> Vec<ProductRow> {
    products
        .iter()
        .map(|p| ProductRow {
            name: p.nome.clone(),
            category: p.categoria.clone(),
            price: format_currency(p.preco),
            stock: p.estoque.to_string(),
            stock_badge: badge::stock_level(p.estoque),
            supplier: p.fornecedor.clone(),
        })
        .collect()
}

pub fn render_clients(clients: &[Client]) -> Vec<ClientRow> {
    clients
        .iter()
        .map(|c| ClientRow {
            name: c.nome.clone(),
            email: c.email.clone(),
            phone: or_not_available(c.telefone.as_deref()),
            kind: c.tipo.clone(),
            kind_badge: badge::client_type(&c.tipo),
            city: or_not_available(c.cidade.as_deref()),
        })
        .collect()
}

pub fn render_orders(orders: &[Order]) -> Vec<OrderRow> {
    orders
        .iter()
        .map(|o| OrderRow {
            id: o.id,
            label: format!("#{}", o.id),
            customer: o.cliente.clone(),
            date: format_date(&o.data_pedido),
            total: format_currency(o.total),
            status: o.status.clone(),
            status_badge: badge::order_status(&o.status),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(nome: &str, estoque: i64) -> Product {
        Product {
            nome: nome.to_string(),
            categoria: "Eletrônicos".to_string(),
            preco: 1299.0,
            estoque,
            fornecedor: "TechBR".to_string(),
        }
    }

    #[test]
    fn test_products_one_row_per_record() {
        let rows = render_products(&[product("Fone", 3), product("Mouse", 25)]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Fone");
        assert_eq!(rows[0].price, "R$\u{a0}1.299,00");
        assert_eq!(rows[0].stock, "3");
        assert_eq!(rows[0].stock_badge, Badge::Danger);
        assert_eq!(rows[1].stock_badge, Badge::Success);
        assert_eq!(rows[1].supplier, "TechBR");
    }

    #[test]
    fn test_clients_optional_fields() {
        let clients: Vec<Client> = serde_json::from_str(
            r#"[
                {"nome": "Ana", "email": "ana@example.com", "telefone": "11 99999-0000", "tipo": "PF", "cidade": "Recife"},
                {"nome": "Loja X", "email": "x@example.com", "telefone": "", "tipo": "PJ"}
            ]"#,
        )
        .unwrap();

        let rows = render_clients(&clients);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].phone, "11 99999-0000");
        assert_eq!(rows[0].city, "Recife");
        assert_eq!(rows[0].kind_badge, Badge::Primary);
        assert_eq!(rows[1].phone, "N/A");
        assert_eq!(rows[1].city, "N/A");
        assert_eq!(rows[1].kind_badge, Badge::Info);
    }

    #[test]
    fn test_orders() {
        let orders = vec![Order {
            id: 7,
            cliente: "Ana".to_string(),
            data_pedido: "2024-03-05 10:00:00".to_string(),
            total: 150.5,
            status: "Processando".to_string(),
        }];

        let rows = render_orders(&orders);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "#7");
        assert_eq!(rows[0].date, "05/03/2024");
        assert_eq!(rows[0].total, "R$\u{a0}150,50");
        assert_eq!(rows[0].status_badge, Badge::Info);
    }

    #[test]
    fn test_empty_lists() {
        assert!(render_products(&[]).is_empty());
        assert!(render_clients(&[]).is_empty());
        assert!(render_orders(&[]).is_empty());
    }
}
