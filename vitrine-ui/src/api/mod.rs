//! API Module
//!
//! Browser transport for the store backend.

pub mod client;

pub use client::*;
