//! Browser logging
//!
//! The core logs through `tracing`. No tracing subscriber runs in the browser,
//! so events are forwarded as `log` records and `console_log` prints them.

/// Route log records to the browser console
pub fn init() {
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Vitrine dashboard starting");
}
