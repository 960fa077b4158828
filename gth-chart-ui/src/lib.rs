//! Shared Dioxus components and browser fetch bridge for the temperature heatmap.
//!
//! This crate provides:
//! - `fetch_bridge`: the dataset GET via `web-sys` `fetch`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (heatmap, tooltip, containers, etc.)

pub mod components;
pub mod fetch_bridge;
pub mod state;
