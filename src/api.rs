//! Store API access
//!
//! [`Transport`] is the only thing a front end has to provide: "GET this
//! path, give me the body". [`DashboardApi`] layers the typed endpoints and
//! JSON decoding on top of it.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{LoadError, LoadResult};
use crate::model::{CategorySales, Client, MonthlySales, Order, OrderDetail, Product, Stats};

/// Endpoint paths, relative to the API base URL
pub mod paths {
    pub const STATS: &str = "/api/stats";
    pub const SALES_BY_CATEGORY: &str = "/api/sales-by-category";
    pub const MONTHLY_SALES: &str = "/api/monthly-sales";
    pub const PRODUCTS: &str = "/api/products";
    pub const CLIENTS: &str = "/api/clients";
    pub const ORDERS: &str = "/api/orders";

    /// Detail path for a single order
    pub fn order(id: u64) -> String {
        format!("{}/{}", ORDERS, id)
    }
}

/// Raw HTTP GET
///
/// Implementations return the response body for 2xx answers and a
/// [`LoadError`] for everything else. Futures are not required to be `Send`:
/// the dashboard drives all loads from a single thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, path: &str) -> LoadResult<String>;
}

/// Typed access to the store endpoints
pub struct DashboardApi<T> {
    transport: T,
}

impl<T: Transport> DashboardApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn stats(&self) -> LoadResult<Stats> {
        self.get_json(paths::STATS).await
    }

    pub async fn sales_by_category(&self) -> LoadResult<Vec<CategorySales>> {
        self.get_json(paths::SALES_BY_CATEGORY).await
    }

    pub async fn monthly_sales(&self) -> LoadResult<Vec<MonthlySales>> {
        self.get_json(paths::MONTHLY_SALES).await
    }

    pub async fn products(&self) -> LoadResult<Vec<Product>> {
        self.get_json(paths::PRODUCTS).await
    }

    pub async fn clients(&self) -> LoadResult<Vec<Client>> {
        self.get_json(paths::CLIENTS).await
    }

    pub async fn orders(&self) -> LoadResult<Vec<Order>> {
        self.get_json(paths::ORDERS).await
    }

    pub async fn order(&self, id: u64) -> LoadResult<OrderDetail> {
        self.get_json(&paths::order(id)).await
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> LoadResult<R> {
        let body = self.transport.get(path).await?;
        serde_json::from_str(&body).map_err(|e| LoadError::Parse(format!("{}: {}", path, e)))
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeTransport;
    use super::*;

    #[test]
    fn test_order_path() {
        assert_eq!(paths::order(7), "/api/orders/7");
    }

    #[tokio::test]
    async fn test_typed_fetch() {
        let api = DashboardApi::new(FakeTransport::new().respond(
            paths::PRODUCTS,
            r#"[{"nome": "Caneca", "categoria": "Casa", "preco": 25.0, "estoque": 3, "fornecedor": "Acme"}]"#,
        ));

        let products = api.products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].estoque, 3);
    }

    #[tokio::test]
    async fn test_non_json_body_is_parse_error() {
        let api = DashboardApi::new(
            FakeTransport::new().respond(paths::STATS, "<html>Internal Server Error</html>"),
        );

        let err = api.stats().await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(ref msg) if msg.starts_with("/api/stats")));
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let api = DashboardApi::new(
            FakeTransport::new().fail(paths::ORDERS, LoadError::Network("refused".into())),
        );

        assert_eq!(
            api.orders().await.unwrap_err(),
            LoadError::Network("refused".into())
        );
    }
}
