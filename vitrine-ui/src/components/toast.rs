//! Toast Notification Component
//!
//! Shows load failures.

use leptos::*;

use crate::state::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <div class="toast-container position-fixed bottom-0 end-0 p-3">
            {move || {
                state.error.get().map(|msg| view! {
                    <div class="toast show align-items-center text-bg-danger border-0" role="alert">
                        <div class="d-flex">
                            <div class="toast-body">"✕ " {msg}</div>
                            <button
                                type="button"
                                class="btn-close btn-close-white me-2 m-auto"
                                aria-label="Fechar"
                                on:click=move |_| state.clear_error()
                            />
                        </div>
                    </div>
                })
            }}
        </div>
    }
}
