//! Loading Component

use leptos::*;

/// Spinner shown during the initial load
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="d-flex justify-content-center py-5">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">"Carregando..."</span>
            </div>
        </div>
    }
}
