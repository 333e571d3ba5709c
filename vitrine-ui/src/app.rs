//! App Root Component
//!
//! Builds the dashboard controller, provides it to the tree and drives the
//! initial load and the refresh timer.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::*;
use vitrine::{DashboardApi, DashboardClient, View, REFRESH_INTERVAL};

use crate::api::{self, GlooTransport};
use crate::components::{
    CanvasCharts, ClientsTable, Loading, Nav, OrderModal, OrdersTable, ProductsTable, StatsPanel,
    Toast,
};
use crate::state::{provide_global_state, signal_targets, GlobalState};

pub type Dashboard = DashboardClient<GlooTransport, CanvasCharts>;

/// The dashboard controller provided by [`App`]
pub fn use_dashboard() -> Rc<Dashboard> {
    expect_context::<Rc<Dashboard>>()
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_global_state();

    let dashboard = Rc::new(Dashboard::new(
        DashboardApi::new(GlooTransport::from_storage()),
        CanvasCharts,
        signal_targets(state),
    ));
    provide_context(dashboard.clone());

    // Runs once the tree is mounted, so the chart canvases exist
    let startup = dashboard.clone();
    spawn_local(async move {
        state.loading.set(true);
        startup.start().await;
        state.loading.set(false);
    });

    let ticking = dashboard;
    let interval = Interval::new(REFRESH_INTERVAL.as_millis() as u32, move || {
        let dashboard = ticking.clone();
        spawn_local(async move {
            dashboard.refresh().await;
        });
    });
    on_cleanup(move || drop(interval));

    view! {
        <Nav />

        <main class="container pb-5">
            {move || state.loading.get().then(|| view! { <Loading /> })}

            <Panel view=View::Overview>
                <StatsPanel />
            </Panel>
            <Panel view=View::Products>
                <ProductsTable />
            </Panel>
            <Panel view=View::Clients>
                <ClientsTable />
            </Panel>
            <Panel view=View::Orders>
                <OrdersTable />
            </Panel>
        </main>

        <Footer />
        <OrderModal />
        <Toast />
    }
}

/// One view's panel; hidden panels stay mounted
#[component]
fn Panel(view: View, children: Children) -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <section id=view.id() class:d-none=move || !state.is_visible(view)>
            <h2 class="h4 mb-3">{view.label()}</h2>
            {children()}
        </section>
    }
}

/// Footer with the backend address
#[component]
fn Footer() -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();
    let current = api::get_api_base();
    let shown = if current.is_empty() {
        "mesma origem".to_string()
    } else {
        current.clone()
    };

    let on_save = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(input) = input_ref.get() {
            api::set_api_base(&input.value());
            // The transport reads the base once, at startup
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        }
    };

    view! {
        <footer class="border-top py-3 bg-white">
            <div class="container d-flex justify-content-between align-items-center small text-muted">
                <span>"Servidor: " {shown}</span>
                <form class="d-flex gap-2" on:submit=on_save>
                    <input
                        node_ref=input_ref
                        class="form-control form-control-sm"
                        placeholder="http://localhost:5000"
                        value=current
                    />
                    <button type="submit" class="btn btn-sm btn-outline-secondary">"Salvar"</button>
                </form>
            </div>
        </footer>
    }
}
