//! Chart slots
//!
//! Each slot holds at most one live chart. Rendering into a slot disposes the
//! previous instance before the backend creates the next one.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::render::ChartConfig;

/// Named placeholder for a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartSlot {
    Category,
    Monthly,
}

impl ChartSlot {
    /// Element id of the slot's canvas
    pub fn element_id(self) -> &'static str {
        match self {
            ChartSlot::Category => "categoryChart",
            ChartSlot::Monthly => "monthlyChart",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartSlot::Category => "Vendas por Categoria",
            ChartSlot::Monthly => "Vendas Mensais",
        }
    }
}

impl fmt::Display for ChartSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

/// Something that can draw charts
pub trait ChartBackend {
    /// A live chart instance
    type Handle;

    /// Draw `config` into `slot`. `None` when the slot has nowhere to draw.
    fn create(&mut self, slot: ChartSlot, config: &ChartConfig) -> Option<Self::Handle>;

    /// Release a live instance
    fn dispose(&mut self, handle: Self::Handle);
}

/// Owned mapping from slot to its live chart
pub struct ChartSlots<B: ChartBackend> {
    backend: B,
    live: HashMap<ChartSlot, B::Handle>,
}

impl<B: ChartBackend> ChartSlots<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            live: HashMap::new(),
        }
    }

    /// Replace whatever occupies `slot` with a chart built from `config`
    pub fn render(&mut self, slot: ChartSlot, config: &ChartConfig) {
        if let Some(previous) = self.live.remove(&slot) {
            self.backend.dispose(previous);
        }

        match self.backend.create(slot, config) {
            Some(handle) => {
                self.live.insert(slot, handle);
            }
            None => tracing::debug!("Chart slot {} not mounted, skipping", slot),
        }
    }

    pub fn is_live(&self, slot: ChartSlot) -> bool {
        self.live.contains_key(&slot)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
