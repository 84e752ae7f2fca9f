//! Shared Dioxus components and Leaflet bridge for the Graubünden photo map.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map glue via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `loader`: Browser fetch of `locations.json`
//! - `markers`: Marker HTML and JSON handed to Leaflet
//! - `components`: Reusable RSX components (filters, gallery, detail panel, etc.)

pub mod components;
pub mod js_bridge;
pub mod loader;
pub mod markers;
pub mod state;
