//! Navigation Component
//!
//! Header with one tab per dashboard view.

use leptos::*;
use vitrine::View;

use crate::app::use_dashboard;
use crate::state::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="navbar navbar-dark bg-dark mb-4">
            <div class="container">
                <span class="navbar-brand">"🛒 Vitrine"</span>
            </div>
        </nav>
        <div class="container">
            <ul class="nav nav-tabs mb-4">
                {View::ALL
                    .into_iter()
                    .map(|tab| view! { <NavTab view=tab /> })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Individual view tab
#[component]
fn NavTab(view: View) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let dashboard = use_dashboard();

    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        let dashboard = dashboard.clone();
        spawn_local(async move {
            dashboard.select_view(view.id()).await;
        });
    };

    view! {
        <li class="nav-item">
            <a
                href=format!("#{}", view.id())
                class="nav-link"
                class:active=move || state.selected_view.get() == Some(view)
                on:click=on_click
            >
                {view.label()}
            </a>
        </li>
    }
}
