//! Order Detail Modal

use leptos::*;

use crate::state::GlobalState;

/// Overlay for the order in `GlobalState::order_detail`
#[component]
pub fn OrderModal() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    move || {
        state.order_detail.get().map(|order| view! {
            <div class="modal-backdrop fade show" on:click=move |_| state.close_order() />
            <div class="modal fade show d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog modal-lg">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title" id="orderModalLabel">{order.title}</h5>
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Fechar"
                                on:click=move |_| state.close_order()
                            />
                        </div>
                        <div class="modal-body" id="orderDetails">
                            <div class="row mb-3">
                                <div class="col-md-6">
                                    <h6>"Cliente"</h6>
                                    <p><strong>"Nome: "</strong>{order.customer}</p>
                                    <p><strong>"Email: "</strong>{order.email}</p>
                                    <p><strong>"Telefone: "</strong>{order.phone}</p>
                                </div>
                                <div class="col-md-6">
                                    <h6>"Pedido"</h6>
                                    <p><strong>"Data: "</strong>{order.date}</p>
                                    <p>
                                        <strong>"Status: "</strong>
                                        <span class=format!("badge {}", order.status_badge.css_class())>
                                            {order.status}
                                        </span>
                                    </p>
                                    <p><strong>"Total: "</strong>{order.total}</p>
                                </div>
                            </div>

                            <h6>"Itens"</h6>
                            <table class="table table-sm">
                                <thead>
                                    <tr>
                                        <th>"Produto"</th>
                                        <th>"Quantidade"</th>
                                        <th>"Preço Unit."</th>
                                        <th>"Subtotal"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {order.items
                                        .into_iter()
                                        .map(|item| view! {
                                            <tr>
                                                <td>{item.product}</td>
                                                <td>{item.quantity}</td>
                                                <td>{item.unit_price}</td>
                                                <td>{item.subtotal}</td>
                                            </tr>
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                        <div class="modal-footer">
                            <button
                                type="button"
                                class="btn btn-secondary"
                                on:click=move |_| state.close_order()
                            >
                                "Fechar"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        })
    }
}
