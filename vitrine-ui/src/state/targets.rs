//! Render targets backed by signals

use leptos::*;
use vitrine::{
    ClientRow, Notifier, OrderDetailView, OrderRow, ProductRow, StatsCards, Targets, View,
    ViewSurface,
};

use super::GlobalState;

struct SignalViews(GlobalState);

impl ViewSurface for SignalViews {
    fn set_nav_selected(&mut self, view: View, selected: bool) {
        let signal = self.0.selected_view;
        if selected {
            signal.set(Some(view));
        } else if signal.get_untracked() == Some(view) {
            signal.set(None);
        }
    }

    fn set_panel_visible(&mut self, view: View, visible: bool) {
        let signal = self.0.visible_view;
        if visible {
            signal.set(Some(view));
        } else if signal.get_untracked() == Some(view) {
            signal.set(None);
        }
    }
}

struct ToastNotifier(GlobalState);

impl Notifier for ToastNotifier {
    fn error(&mut self, message: &str) {
        log::error!("{}", message);
        self.0.show_error(message);
    }
}

/// Targets writing every model into `state`
pub fn signal_targets(state: GlobalState) -> Targets {
    Targets {
        views: Box::new(SignalViews(state)),
        stats: Box::new(move |cards: &StatsCards| state.stats.set(Some(cards.clone()))),
        products: Box::new(move |rows: &[ProductRow]| state.products.set(rows.to_vec())),
        clients: Box::new(move |rows: &[ClientRow]| state.clients.set(rows.to_vec())),
        orders: Box::new(move |rows: &[OrderRow]| state.orders.set(rows.to_vec())),
        order_detail: Box::new(move |order: &OrderDetailView| {
            state.order_detail.set(Some(order.clone()))
        }),
        notifier: Box::new(ToastNotifier(state)),
    }
}
