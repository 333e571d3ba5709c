//! Dashboard controller
//!
//! [`DashboardClient`] owns the whole client state: the active view, the
//! request generations and the chart slots. Loads are plain futures over
//! `&self`; they can be joined or spawned on a local executor and run
//! concurrently on one thread. State lives behind `RefCell`s that are never
//! borrowed across an `.await`.

use std::cell::RefCell;
use std::future::Future;

use crate::api::{DashboardApi, Transport};
use crate::charts::{ChartBackend, ChartSlot, ChartSlots};
use crate::error::{LoadError, LoadResult};
use crate::loader::{Generations, Loader};
use crate::render::{
    self, ClientRow, Notifier, OrderDetailView, OrderRow, ProductRow, RenderTarget, StatsCards,
};
use crate::scheduler;
use crate::view::{View, ViewRouter, ViewSurface};

/// Where each piece of the dashboard is displayed
pub struct Targets {
    pub views: Box<dyn ViewSurface>,
    pub stats: Box<dyn RenderTarget<StatsCards>>,
    pub products: Box<dyn RenderTarget<[ProductRow]>>,
    pub clients: Box<dyn RenderTarget<[ClientRow]>>,
    pub orders: Box<dyn RenderTarget<[OrderRow]>>,
    /// Rendering into this target opens the order overlay
    pub order_detail: Box<dyn RenderTarget<OrderDetailView>>,
    pub notifier: Box<dyn Notifier>,
}

struct DashboardState<B: ChartBackend> {
    router: ViewRouter,
    generations: Generations,
    charts: ChartSlots<B>,
}

/// The dashboard client
pub struct DashboardClient<T, B: ChartBackend> {
    api: DashboardApi<T>,
    state: RefCell<DashboardState<B>>,
    targets: RefCell<Targets>,
}

impl<T: Transport, B: ChartBackend> DashboardClient<T, B> {
    pub fn new(api: DashboardApi<T>, charts: B, targets: Targets) -> Self {
        Self {
            api,
            state: RefCell::new(DashboardState {
                router: ViewRouter::new(),
                generations: Generations::new(),
                charts: ChartSlots::new(charts),
            }),
            targets: RefCell::new(targets),
        }
    }

    pub fn api(&self) -> &DashboardApi<T> {
        &self.api
    }

    /// Show the default view and load the four initial datasets concurrently
    pub async fn start(&self) {
        tracing::info!("Dashboard starting");
        {
            let mut state = self.state.borrow_mut();
            let mut targets = self.targets.borrow_mut();
            state.router.show(View::default(), targets.views.as_mut());
        }

        futures_util::join!(
            self.load_stats(),
            self.load_products(),
            self.load_clients(),
            self.load_orders(),
        );
        tracing::info!("Initial load finished");
    }

    pub fn current_view(&self) -> View {
        self.state.borrow().router.current()
    }

    /// Navigate to `id`; re-entering the overview reloads statistics
    ///
    /// Unknown ids are ignored. Returns the active view after the call.
    pub async fn select_view(&self, id: &str) -> View {
        let activated = {
            let mut state = self.state.borrow_mut();
            let mut targets = self.targets.borrow_mut();
            state.router.activate(id, targets.views.as_mut())
        };

        if activated == Some(View::Overview) {
            self.load_stats().await;
        }

        self.current_view()
    }

    /// Periodic tick: reload whatever the active view shows
    pub async fn refresh(&self) {
        let loader = scheduler::dispatch(self.current_view());
        tracing::debug!("Refreshing {}", loader);

        match loader {
            Loader::Products => self.load_products().await,
            Loader::Clients => self.load_clients().await,
            Loader::Orders => self.load_orders().await,
            _ => self.load_stats().await,
        }
    }

    /// Stats cards, then both charts
    ///
    /// A failed stats load leaves the cards untouched and skips the charts.
    pub async fn load_stats(&self) {
        let Some(stats) = self.load(Loader::Stats, self.api.stats()).await else {
            return;
        };

        let cards = render::render_stats(&stats);
        self.targets.borrow_mut().stats.render(&cards);

        self.load_charts().await;
    }

    pub async fn load_charts(&self) {
        futures_util::join!(self.load_category_chart(), self.load_monthly_chart());
    }

    pub async fn load_category_chart(&self) {
        if let Some(data) = self
            .load(Loader::CategoryChart, self.api.sales_by_category())
            .await
        {
            let config = render::category_chart(&data);
            self.state
                .borrow_mut()
                .charts
                .render(ChartSlot::Category, &config);
        }
    }

    pub async fn load_monthly_chart(&self) {
        if let Some(data) = self
            .load(Loader::MonthlyChart, self.api.monthly_sales())
            .await
        {
            let config = render::monthly_chart(&data);
            self.state
                .borrow_mut()
                .charts
                .render(ChartSlot::Monthly, &config);
        }
    }

    pub async fn load_products(&self) {
        if let Some(products) = self.load(Loader::Products, self.api.products()).await {
            let rows = render::render_products(&products);
            self.targets.borrow_mut().products.render(&rows);
        }
    }

    pub async fn load_clients(&self) {
        if let Some(clients) = self.load(Loader::Clients, self.api.clients()).await {
            let rows = render::render_clients(&clients);
            self.targets.borrow_mut().clients.render(&rows);
        }
    }

    pub async fn load_orders(&self) {
        if let Some(orders) = self.load(Loader::Orders, self.api.orders()).await {
            let rows = render::render_orders(&orders);
            self.targets.borrow_mut().orders.render(&rows);
        }
    }

    /// View-details action: fetch one order and open the overlay
    pub async fn show_order(&self, id: u64) {
        if let Some(order) = self.load(Loader::OrderDetail, self.api.order(id)).await {
            let view = render::render_order_detail(&order);
            self.targets.borrow_mut().order_detail.render(&view);
        }
    }

    /// Inspect the chart slots
    pub fn with_charts<R>(&self, f: impl FnOnce(&ChartSlots<B>) -> R) -> R {
        f(&self.state.borrow().charts)
    }

    /// Run `fetch` under a fresh ticket for `loader`
    ///
    /// Returns the payload only if the ticket is still current when the
    /// response lands. Current failures are logged and notified; superseded
    /// responses of either kind are dropped.
    async fn load<R>(
        &self,
        loader: Loader,
        fetch: impl Future<Output = LoadResult<R>>,
    ) -> Option<R> {
        let ticket = self.state.borrow_mut().generations.issue(loader);
        let result = fetch.await;

        if !self.state.borrow().generations.is_current(ticket) {
            tracing::debug!(
                "Dropping stale {} response (generation {})",
                loader,
                ticket.generation
            );
            return None;
        }

        match result {
            Ok(data) => Some(data),
            Err(e) => {
                self.report(loader, &e);
                None
            }
        }
    }

    fn report(&self, loader: Loader, error: &LoadError) {
        tracing::error!("Failed to load {}: {}", loader, error);
        self.targets
            .borrow_mut()
            .notifier
            .error(loader.failure_message());
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording targets for controller tests

    use super::*;
    use crate::view::testing::RecordingSurface;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    pub struct Recorded {
        pub surface: RecordingSurface,
        pub stats: Vec<StatsCards>,
        pub products: Vec<Vec<ProductRow>>,
        pub clients: Vec<Vec<ClientRow>>,
        pub orders: Vec<Vec<OrderRow>>,
        pub order_detail: Vec<OrderDetailView>,
        pub errors: Vec<String>,
    }

    pub type Shared = Rc<RefCell<Recorded>>;

    struct SharedSurface(Shared);

    impl ViewSurface for SharedSurface {
        fn set_nav_selected(&mut self, view: View, selected: bool) {
            self.0.borrow_mut().surface.set_nav_selected(view, selected);
        }

        fn set_panel_visible(&mut self, view: View, visible: bool) {
            self.0.borrow_mut().surface.set_panel_visible(view, visible);
        }
    }

    struct SharedNotifier(Shared);

    impl Notifier for SharedNotifier {
        fn error(&mut self, message: &str) {
            self.0.borrow_mut().errors.push(message.to_string());
        }
    }

    pub fn recording_targets() -> (Targets, Shared) {
        let shared: Shared = Rc::default();

        let stats = shared.clone();
        let products = shared.clone();
        let clients = shared.clone();
        let orders = shared.clone();
        let detail = shared.clone();

        let targets = Targets {
            views: Box::new(SharedSurface(shared.clone())),
            stats: Box::new(move |cards: &StatsCards| stats.borrow_mut().stats.push(cards.clone())),
            products: Box::new(move |rows: &[ProductRow]| {
                products.borrow_mut().products.push(rows.to_vec())
            }),
            clients: Box::new(move |rows: &[ClientRow]| {
                clients.borrow_mut().clients.push(rows.to_vec())
            }),
            orders: Box::new(move |rows: &[OrderRow]| orders.borrow_mut().orders.push(rows.to_vec())),
            order_detail: Box::new(move |view: &OrderDetailView| {
                detail.borrow_mut().order_detail.push(view.clone())
            }),
            notifier: Box::new(SharedNotifier(shared.clone())),
        };

        (targets, shared)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{recording_targets, Shared};
    use super::*;
    use crate::api::paths;
    use crate::api::testing::FakeTransport;
    use crate::charts::testing::CountingBackend;

    const STATS: &str = r#"{"total_clientes": 12, "total_produtos": 40, "receita_total": 1999.9}"#;
    const CATEGORIES: &str = r#"[{"categoria": "Livros", "total_vendas": 300.0}]"#;
    const MONTHLY: &str = r#"[{"mes": "2024-01", "total_vendas": 1000.0}]"#;
    const PRODUCTS: &str = r#"[
        {"nome": "Fone", "categoria": "Eletrônicos", "preco": 199.9, "estoque": 3, "fornecedor": "TechBR"},
        {"nome": "Livro", "categoria": "Livros", "preco": 59.0, "estoque": 40, "fornecedor": "Editora"}
    ]"#;
    const CLIENTS: &str = r#"[{"nome": "Ana", "email": "ana@example.com", "tipo": "PF"}]"#;
    const ORDERS: &str = r#"[{"id": 7, "cliente": "Ana", "data_pedido": "2024-03-05", "total": 174.9, "status": "Entregue"}]"#;
    const ORDER_7: &str = r#"{
        "id": 7, "cliente": "Ana", "email": "ana@example.com", "telefone": "11 98888-7777",
        "data_pedido": "2024-03-05", "status": "Entregue", "total": 174.9,
        "itens": [
            {"produto": "Caneca", "quantidade": 2, "preco_unitario": 25.0, "subtotal": 50.0},
            {"produto": "Camiseta", "quantidade": 1, "preco_unitario": 124.9, "subtotal": 124.9}
        ]
    }"#;

    fn full_backend() -> FakeTransport {
        FakeTransport::new()
            .respond(paths::STATS, STATS)
            .respond(paths::SALES_BY_CATEGORY, CATEGORIES)
            .respond(paths::MONTHLY_SALES, MONTHLY)
            .respond(paths::PRODUCTS, PRODUCTS)
            .respond(paths::CLIENTS, CLIENTS)
            .respond(paths::ORDERS, ORDERS)
            .respond(&paths::order(7), ORDER_7)
    }

    fn dashboard(
        transport: FakeTransport,
    ) -> (DashboardClient<FakeTransport, CountingBackend>, Shared) {
        let (targets, recorded) = recording_targets();
        let client = DashboardClient::new(
            DashboardApi::new(transport),
            CountingBackend::default(),
            targets,
        );
        (client, recorded)
    }

    #[tokio::test]
    async fn test_start_loads_everything() {
        let (client, recorded) = dashboard(full_backend());
        client.start().await;

        let rec = recorded.borrow();
        assert_eq!(client.current_view(), View::Overview);
        assert!(rec.surface.visible.contains(&View::Overview));
        assert_eq!(rec.stats.len(), 1);
        assert_eq!(rec.products[0].len(), 2);
        assert_eq!(rec.clients[0].len(), 1);
        assert_eq!(rec.orders[0].len(), 1);
        assert!(rec.errors.is_empty());

        assert!(client.with_charts(|c| c.is_live(ChartSlot::Category)));
        assert!(client.with_charts(|c| c.is_live(ChartSlot::Monthly)));
    }

    #[tokio::test]
    async fn test_stats_scenario() {
        let (client, recorded) = dashboard(full_backend());
        client.load_stats().await;

        let rec = recorded.borrow();
        let cards = &rec.stats[0];
        assert_eq!(cards.total_clients, "12");
        assert_eq!(cards.total_products, "40");
        assert_eq!(cards.total_orders, "0");
        assert_eq!(cards.total_revenue, "R$\u{a0}1.999,90");
    }

    #[tokio::test]
    async fn test_stats_network_failure_notifies_once() {
        let transport = full_backend();
        transport.set(paths::STATS, Err(LoadError::Network("connection refused".into())));
        let (client, recorded) = dashboard(transport);

        client.load_stats().await;

        let rec = recorded.borrow();
        assert_eq!(rec.errors, vec!["Erro ao carregar estatísticas".to_string()]);
        assert!(rec.stats.is_empty());
        assert_eq!(client.with_charts(|c| c.live_count()), 0);
        assert_eq!(client.api().transport().call_count(paths::SALES_BY_CATEGORY), 0);
    }

    #[tokio::test]
    async fn test_list_failure_keeps_previous_rows() {
        let (client, recorded) = dashboard(full_backend());
        client.load_products().await;

        client
            .api()
            .transport()
            .set(paths::PRODUCTS, Ok("not json".to_string()));
        client.load_products().await;

        let rec = recorded.borrow();
        assert_eq!(rec.products.len(), 1);
        assert_eq!(rec.errors, vec!["Erro ao carregar produtos".to_string()]);
    }

    #[tokio::test]
    async fn test_order_detail_scenario() {
        let (client, recorded) = dashboard(full_backend());
        client.show_order(7).await;

        let rec = recorded.borrow();
        assert_eq!(rec.order_detail.len(), 1);
        let detail = &rec.order_detail[0];
        assert_eq!(detail.title, "Pedido #7");
        assert_eq!(detail.items.len(), 2);
        assert_eq!(detail.items[0].subtotal_value, 50.0);
        assert_eq!(detail.items[1].subtotal_value, 124.9);
        assert_eq!(detail.phone, "11 98888-7777");
    }

    #[tokio::test]
    async fn test_missing_order_notifies() {
        let (client, recorded) = dashboard(full_backend());
        client.show_order(99).await;

        let rec = recorded.borrow();
        assert!(rec.order_detail.is_empty());
        assert_eq!(rec.errors, vec!["Erro ao carregar detalhes do pedido".to_string()]);
    }

    #[tokio::test]
    async fn test_chart_reload_keeps_one_instance_per_slot() {
        let (client, _recorded) = dashboard(full_backend());
        client.load_charts().await;
        client.load_charts().await;

        client.with_charts(|charts| {
            assert_eq!(charts.backend().alive_in(ChartSlot::Category), 1);
            assert_eq!(charts.backend().alive_in(ChartSlot::Monthly), 1);
            assert_eq!(charts.backend().disposed, 2);
        });
    }

    #[tokio::test]
    async fn test_select_overview_reloads_stats() {
        let (client, recorded) = dashboard(full_backend());

        assert_eq!(client.select_view("#products").await, View::Products);
        assert_eq!(client.api().transport().call_count(paths::STATS), 0);

        assert_eq!(client.select_view("overview").await, View::Overview);
        assert_eq!(client.api().transport().call_count(paths::STATS), 1);
        assert_eq!(recorded.borrow().stats.len(), 1);
    }

    #[tokio::test]
    async fn test_select_unknown_view_is_ignored() {
        let (client, recorded) = dashboard(full_backend());
        client.select_view("orders").await;

        assert_eq!(client.select_view("reports").await, View::Orders);
        let rec = recorded.borrow();
        assert_eq!(rec.surface.visible.len(), 1);
        assert!(rec.surface.selected.contains(&View::Orders));
    }

    #[tokio::test]
    async fn test_refresh_dispatches_on_active_view() {
        let (client, _recorded) = dashboard(full_backend());

        client.select_view("clients").await;
        client.refresh().await;
        client.select_view("orders").await;
        client.refresh().await;
        client.refresh().await;

        let transport = client.api().transport();
        assert_eq!(transport.call_count(paths::CLIENTS), 1);
        assert_eq!(transport.call_count(paths::ORDERS), 2);
        assert_eq!(transport.call_count(paths::STATS), 0);
        assert_eq!(transport.call_count(paths::PRODUCTS), 0);
    }

    #[tokio::test]
    async fn test_stale_response_is_dropped() {
        let transport = full_backend();
        let first = transport.gate(paths::ORDERS);
        let second = transport.gate(paths::ORDERS);
        let (client, recorded) = dashboard(transport);

        let old = r#"[{"id": 1, "cliente": "Velho", "data_pedido": "2024-01-01", "total": 1.0, "status": "Pendente"}]"#;
        let new = r#"[{"id": 2, "cliente": "Novo", "data_pedido": "2024-01-02", "total": 2.0, "status": "Enviado"}]"#;

        futures_util::join!(client.load_orders(), client.load_orders(), async {
            // Newer request lands first, the older one afterwards
            second.send(Ok(new.to_string())).unwrap();
            tokio::task::yield_now().await;
            first.send(Ok(old.to_string())).unwrap();
        });

        let rec = recorded.borrow();
        assert_eq!(rec.orders.len(), 1);
        assert_eq!(rec.orders[0][0].customer, "Novo");
    }

    #[tokio::test]
    async fn test_stale_failure_is_not_notified() {
        let transport = full_backend();
        let first = transport.gate(&paths::order(7));
        let (client, recorded) = dashboard(transport);

        futures_util::join!(client.show_order(7), client.show_order(7), async {
            first
                .send(Err(LoadError::Timeout))
                .unwrap();
        });

        let rec = recorded.borrow();
        assert!(rec.errors.is_empty());
        assert_eq!(rec.order_detail.len(), 1);
    }
}
