//! Backend payloads
//!
//! Shapes returned by the store API. Decoding is lenient: a missing or `null`
//! field falls back to its default so a partial payload still renders.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat `null` the same as an absent field
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Aggregate store statistics (`/api/stats`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Stats {
    #[serde(default, deserialize_with = "lenient")]
    pub total_clientes: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub total_produtos: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub total_pedidos: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub receita_total: f64,
    #[serde(default)]
    pub total_fornecedores: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub pedidos_por_status: Vec<StatusCount>,
}

/// Number of orders in a given status
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StatusCount {
    #[serde(default, deserialize_with = "lenient")]
    pub status: String,
    #[serde(default, alias = "count", deserialize_with = "lenient")]
    pub total: u64,
}

/// One slice of the category doughnut (`/api/sales-by-category`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CategorySales {
    #[serde(default, deserialize_with = "lenient")]
    pub categoria: String,
    #[serde(default, alias = "receita", deserialize_with = "lenient")]
    pub total_vendas: f64,
}

/// One point of the monthly series (`/api/monthly-sales`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MonthlySales {
    /// Month label as sent by the backend, e.g. `2024-03`
    #[serde(default, deserialize_with = "lenient")]
    pub mes: String,
    #[serde(default, alias = "receita_total", deserialize_with = "lenient")]
    pub total_vendas: f64,
}

/// Product listing row (`/api/products`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Product {
    #[serde(default, deserialize_with = "lenient")]
    pub nome: String,
    #[serde(default, deserialize_with = "lenient")]
    pub categoria: String,
    #[serde(default, deserialize_with = "lenient")]
    pub preco: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub estoque: i64,
    #[serde(default, deserialize_with = "lenient")]
    pub fornecedor: String,
}

/// Client listing row (`/api/clients`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Client {
    #[serde(default, deserialize_with = "lenient")]
    pub nome: String,
    #[serde(default, deserialize_with = "lenient")]
    pub email: String,
    #[serde(default)]
    pub telefone: Option<String>,
    /// `PF` (pessoa física) or `PJ` (pessoa jurídica)
    #[serde(default, deserialize_with = "lenient")]
    pub tipo: String,
    #[serde(default)]
    pub cidade: Option<String>,
}

/// Order listing row (`/api/orders`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Order {
    #[serde(default, deserialize_with = "lenient")]
    pub id: u64,
    #[serde(default, alias = "cliente_nome", deserialize_with = "lenient")]
    pub cliente: String,
    #[serde(default, deserialize_with = "lenient")]
    pub data_pedido: String,
    #[serde(default, deserialize_with = "lenient")]
    pub total: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub status: String,
}

/// Full order with customer contact and line items (`/api/orders/{id}`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OrderDetail {
    #[serde(default, deserialize_with = "lenient")]
    pub id: u64,
    #[serde(default, alias = "cliente_nome", deserialize_with = "lenient")]
    pub cliente: String,
    #[serde(default, alias = "cliente_email", deserialize_with = "lenient")]
    pub email: String,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub data_pedido: String,
    #[serde(default, deserialize_with = "lenient")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient")]
    pub total: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub itens: Vec<OrderItem>,
}

/// A line item inside an order
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OrderItem {
    #[serde(default, alias = "produto_nome", deserialize_with = "lenient")]
    pub produto: String,
    #[serde(default, deserialize_with = "lenient")]
    pub quantidade: u32,
    #[serde(default, deserialize_with = "lenient")]
    pub preco_unitario: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub subtotal: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_missing_and_null_fields() {
        let stats: Stats =
            serde_json::from_str(r#"{"total_clientes": 12, "total_pedidos": null}"#).unwrap();
        assert_eq!(stats.total_clientes, 12);
        assert_eq!(stats.total_produtos, 0);
        assert_eq!(stats.total_pedidos, 0);
        assert_eq!(stats.receita_total, 0.0);
        assert!(stats.total_fornecedores.is_none());
        assert!(stats.pedidos_por_status.is_empty());
    }

    #[test]
    fn test_stats_status_breakdown() {
        let stats: Stats = serde_json::from_str(
            r#"{"pedidos_por_status": [{"status": "Entregue", "count": 3}]}"#,
        )
        .unwrap();
        assert_eq!(
            stats.pedidos_por_status,
            vec![StatusCount {
                status: "Entregue".to_string(),
                total: 3
            }]
        );
    }

    #[test]
    fn test_order_detail_backend_aliases() {
        let order: OrderDetail = serde_json::from_str(
            r#"{
                "id": 7,
                "cliente_nome": "Ana",
                "cliente_email": "ana@example.com",
                "data_pedido": "2024-03-05",
                "status": "Enviado",
                "total": 150.0,
                "itens": [{"produto_nome": "Caneca", "quantidade": 2, "preco_unitario": 25.0, "subtotal": 50.0}]
            }"#,
        )
        .unwrap();
        assert_eq!(order.cliente, "Ana");
        assert_eq!(order.email, "ana@example.com");
        assert_eq!(order.telefone, None);
        assert_eq!(order.itens[0].produto, "Caneca");
    }

    #[test]
    fn test_client_optional_fields() {
        let client: Client = serde_json::from_str(
            r#"{"nome": "Loja X", "email": "x@example.com", "tipo": "PJ", "telefone": null}"#,
        )
        .unwrap();
        assert_eq!(client.telefone, None);
        assert_eq!(client.cidade, None);
        assert_eq!(client.tipo, "PJ");
    }
}
