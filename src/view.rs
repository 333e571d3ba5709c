//! View routing
//!
//! Exactly one of the four dashboard panels is active at a time. The router
//! owns that fact; a [`ViewSurface`] reflects it on screen.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A dashboard panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Overview,
    Products,
    Clients,
    Orders,
}

impl View {
    pub const ALL: [View; 4] = [View::Overview, View::Products, View::Clients, View::Orders];

    /// Identifier used in navigation links and panel ids
    pub fn id(self) -> &'static str {
        match self {
            View::Overview => "overview",
            View::Products => "products",
            View::Clients => "clients",
            View::Orders => "orders",
        }
    }

    /// Navigation label
    pub fn label(self) -> &'static str {
        match self {
            View::Overview => "Visão Geral",
            View::Products => "Produtos",
            View::Clients => "Clientes",
            View::Orders => "Pedidos",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownView(pub String);

impl fmt::Display for UnknownView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown view: {}", self.0)
    }
}

impl std::error::Error for UnknownView {}

impl FromStr for View {
    type Err = UnknownView;

    /// Accepts bare ids and `#id` hrefs
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().trim_start_matches('#');
        View::ALL
            .into_iter()
            .find(|v| v.id() == id)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// On-screen navigation controls and panels
pub trait ViewSurface {
    fn set_nav_selected(&mut self, view: View, selected: bool);
    fn set_panel_visible(&mut self, view: View, visible: bool);
}

/// Tracks the active view
#[derive(Debug, Default)]
pub struct ViewRouter {
    current: View,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Make `id` the active view
    ///
    /// Every control is deselected and every panel hidden before the target is
    /// shown. Unknown ids are logged and ignored, leaving the current view
    /// untouched. Returns the newly active view.
    pub fn activate(&mut self, id: &str, surface: &mut dyn ViewSurface) -> Option<View> {
        let view = match id.parse::<View>() {
            Ok(view) => view,
            Err(e) => {
                tracing::warn!("Ignoring navigation: {}", e);
                return None;
            }
        };

        self.show(view, surface);
        Some(view)
    }

    /// Make `view` the active view
    pub fn show(&mut self, view: View, surface: &mut dyn ViewSurface) {
        for other in View::ALL {
            surface.set_nav_selected(other, false);
            surface.set_panel_visible(other, false);
        }

        surface.set_nav_selected(view, true);
        surface.set_panel_visible(view, true);
        self.current = view;

        tracing::debug!("Active view: {}", view);
    }
}
