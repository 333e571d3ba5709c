//! State Management
//!
//! Reactive dashboard state and the render targets that feed it.

pub mod global;
pub mod targets;

pub use global::{provide_global_state, GlobalState};
pub use targets::signal_targets;
