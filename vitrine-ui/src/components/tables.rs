//! Listing Panels
//!
//! Products, clients and orders tables. Rows arrive already formatted.

use leptos::*;

use crate::app::use_dashboard;
use crate::state::GlobalState;

#[component]
fn EmptyRow(columns: u32, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <tr>
            <td colspan=columns class="text-center text-muted">{message}</td>
        </tr>
    }
}

#[component]
pub fn ProductsTable() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <div class="table-responsive">
            <table class="table table-striped align-middle">
                <thead>
                    <tr>
                        <th>"Produto"</th>
                        <th>"Categoria"</th>
                        <th>"Preço"</th>
                        <th>"Estoque"</th>
                        <th>"Fornecedor"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = state.products.get();
                        if rows.is_empty() {
                            return view! { <EmptyRow columns=5 message="Nenhum produto cadastrado." /> }
                                .into_view();
                        }
                        rows.into_iter()
                            .map(|row| view! {
                                <tr>
                                    <td>{row.name}</td>
                                    <td>{row.category}</td>
                                    <td>{row.price}</td>
                                    <td>
                                        <span class=format!("badge {}", row.stock_badge.css_class())>
                                            {row.stock}
                                        </span>
                                    </td>
                                    <td>{row.supplier}</td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn ClientsTable() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <div class="table-responsive">
            <table class="table table-striped align-middle">
                <thead>
                    <tr>
                        <th>"Nome"</th>
                        <th>"Email"</th>
                        <th>"Telefone"</th>
                        <th>"Tipo"</th>
                        <th>"Cidade"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = state.clients.get();
                        if rows.is_empty() {
                            return view! { <EmptyRow columns=5 message="Nenhum cliente cadastrado." /> }
                                .into_view();
                        }
                        rows.into_iter()
                            .map(|row| view! {
                                <tr>
                                    <td>{row.name}</td>
                                    <td>{row.email}</td>
                                    <td>{row.phone}</td>
                                    <td>
                                        <span class=format!("badge {}", row.kind_badge.css_class())>
                                            {row.kind}
                                        </span>
                                    </td>
                                    <td>{row.city}</td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn OrdersTable() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let dashboard = use_dashboard();

    view! {
        <div class="table-responsive">
            <table class="table table-striped align-middle">
                <thead>
                    <tr>
                        <th>"Pedido"</th>
                        <th>"Cliente"</th>
                        <th>"Data"</th>
                        <th>"Total"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = state.orders.get();
                        if rows.is_empty() {
                            return view! { <EmptyRow columns=6 message="Nenhum pedido encontrado." /> }
                                .into_view();
                        }
                        rows.into_iter()
                            .map(|row| {
                                let dashboard = dashboard.clone();
                                let id = row.id;
                                let on_details = move |_| {
                                    let dashboard = dashboard.clone();
                                    spawn_local(async move {
                                        dashboard.show_order(id).await;
                                    });
                                };

                                view! {
                                    <tr>
                                        <td>{row.label}</td>
                                        <td>{row.customer}</td>
                                        <td>{row.date}</td>
                                        <td>{row.total}</td>
                                        <td>
                                            <span class=format!("badge {}", row.status_badge.css_class())>
                                                {row.status}
                                            </span>
                                        </td>
                                        <td>
                                            <button
                                                class="btn btn-sm btn-outline-primary"
                                                on:click=on_details
                                            >
                                                "Ver detalhes"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
