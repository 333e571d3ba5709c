//! Vitrine Dashboard
//!
//! Store admin dashboard built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application. All loading,
//! formatting and view switching lives in the `vitrine` core; this crate
//! supplies the browser pieces: a gloo-net transport, signal-backed render
//! targets and a canvas chart backend.

use leptos::*;

mod api;
mod app;
mod components;
mod logging;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Core tracing events go to the browser console
    logging::init();

    mount_to_body(|| view! { <app::App /> });
}
