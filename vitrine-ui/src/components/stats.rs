//! Overview Panel
//!
//! Stats cards, the per-status tally and both sales charts.

use leptos::*;
use vitrine::render::{TOTAL_CLIENTS_ID, TOTAL_ORDERS_ID, TOTAL_PRODUCTS_ID, TOTAL_REVENUE_ID};
use vitrine::ChartSlot;

use super::ChartCanvas;
use crate::state::GlobalState;

const CARD_LABELS: [(&str, &str, &str); 4] = [
    (TOTAL_CLIENTS_ID, "Total de Clientes", "text-bg-primary"),
    (TOTAL_PRODUCTS_ID, "Total de Produtos", "text-bg-success"),
    (TOTAL_ORDERS_ID, "Total de Pedidos", "text-bg-warning"),
    (TOTAL_REVENUE_ID, "Receita Total", "text-bg-info"),
];

#[component]
pub fn StatsPanel() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    // Text for one card; the placeholder stays until stats arrive
    let card_text = move |id: &'static str| {
        move || {
            state
                .stats
                .get()
                .and_then(|stats| {
                    stats
                        .cards()
                        .iter()
                        .find(|(card, _)| *card == id)
                        .map(|(_, text)| text.to_string())
                })
                .unwrap_or_else(|| "-".to_string())
        }
    };

    view! {
        <div class="row g-3 mb-4">
            {CARD_LABELS
                .into_iter()
                .map(|(id, label, color)| view! {
                    <div class="col-md-3">
                        <div class=format!("card {}", color)>
                            <div class="card-body">
                                <h6 class="card-title">{label}</h6>
                                <h3 id=id>{card_text(id)}</h3>
                            </div>
                        </div>
                    </div>
                })
                .collect_view()}
        </div>

        {move || {
            state.stats.get().and_then(|stats| stats.total_suppliers).map(|suppliers| view! {
                <p class="text-muted">"Fornecedores cadastrados: " <strong>{suppliers}</strong></p>
            })
        }}

        {move || {
            let tally = state.stats.get().map(|stats| stats.by_status).unwrap_or_default();
            (!tally.is_empty()).then(|| view! {
                <div class="mb-4">
                    <h6>"Pedidos por status"</h6>
                    {tally
                        .into_iter()
                        .map(|entry| view! {
                            <span class=format!("badge {} me-2", entry.badge.css_class())>
                                {entry.status} ": " {entry.count}
                            </span>
                        })
                        .collect_view()}
                </div>
            })
        }}

        <div class="row g-3">
            <div class="col-md-6">
                <ChartCanvas slot=ChartSlot::Category />
            </div>
            <div class="col-md-6">
                <ChartCanvas slot=ChartSlot::Monthly />
            </div>
        </div>
    }
}
