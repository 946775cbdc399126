//! UI state and control flow of the COVID-19 dashboard, free of any widget toolkit.
//!
//! This crate provides:
//! - `state`: [`UiState`], the single owned value every view reads from
//! - `notification`, `section`, `selectors`, `query`, `plot`: the parts of that state
//! - `pagination`, `table`, `chart`: pure renderers from state to rows, controls and lines
//! - `controller`: async operations that drive a [`covid_api::Backend`]
//!   and apply their outcome to the state
//!
//! The web app binds these to Dioxus signals; the CLI binds them to a
//! `RefCell` and the terminal.

pub mod chart;
pub mod controller;
pub mod messages;
pub mod notification;
pub mod pagination;
pub mod plot;
pub mod query;
pub mod section;
pub mod selectors;
pub mod state;
pub mod table;

pub use controller::{Controller, Outcome, Shell, StateCell};
pub use plot::ResultView;
pub use notification::{DismissTicket, Notice, NoticeRegion, Severity};
pub use section::Section;
pub use state::UiState;
