//! Dioxus components and browser bindings for the COVID-19 dashboard.
//!
//! This crate provides:
//! - `browser`: the signal-backed state cell and the browser shell
//!   (confirm dialog, timed notification dismissal, page origin)
//! - `state`: `DashboardState`, provided via `use_context_provider`
//! - `components`: RSX components for both sections of the page

pub mod browser;
pub mod components;
pub mod state;
