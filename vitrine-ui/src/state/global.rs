//! Global Application State
//!
//! Reactive state management using Leptos signals. The dashboard core writes
//! here through [`signal_targets`](super::signal_targets); components only read.

use leptos::*;
use vitrine::{ClientRow, OrderDetailView, OrderRow, ProductRow, StatsCards, View};

/// How long an error toast stays up, in milliseconds
const ERROR_TOAST_MS: u32 = 5000;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Overview cards, `None` until the first successful load
    pub stats: RwSignal<Option<StatsCards>>,
    pub products: RwSignal<Vec<ProductRow>>,
    pub clients: RwSignal<Vec<ClientRow>>,
    pub orders: RwSignal<Vec<OrderRow>>,
    /// Open order overlay
    pub order_detail: RwSignal<Option<OrderDetailView>>,
    /// Highlighted navigation tab
    pub selected_view: RwSignal<Option<View>>,
    /// Panel currently shown
    pub visible_view: RwSignal<Option<View>>,
    /// Initial load in progress
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        stats: create_rw_signal(None),
        products: create_rw_signal(Vec::new()),
        clients: create_rw_signal(Vec::new()),
        orders: create_rw_signal(Vec::new()),
        order_detail: create_rw_signal(None),
        selected_view: create_rw_signal(None),
        visible_view: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
    };

    provide_context(state);
    state
}

impl GlobalState {
    /// Whether `view`'s panel is on screen
    pub fn is_visible(&self, view: View) -> bool {
        self.visible_view.get() == Some(view)
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        let shown = message.to_string();
        gloo_timers::callback::Timeout::new(ERROR_TOAST_MS, move || {
            // A newer error keeps its own timer
            if error_signal.get_untracked().as_deref() == Some(shown.as_str()) {
                error_signal.set(None);
            }
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }

    pub fn close_order(&self) {
        self.order_detail.set(None);
    }
}
