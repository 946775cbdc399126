//! Application state managed via Dioxus context.
//!
//! `DashboardState` is provided once by the app root with
//! `use_context_provider`. Components retrieve it with
//! `use_context::<DashboardState>()`, read from `ui`, and hand user actions
//! to a [`DashboardController`].

use crate::browser::{SignalCell, WebShell};
use covid_api::HttpBackend;
use covid_state::{Controller, UiState};
use dioxus::prelude::*;

pub type DashboardController = Controller<HttpBackend, SignalCell, WebShell>;

#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Everything the page shows
    pub ui: Signal<UiState>,
    /// Client for the case API
    pub backend: Signal<HttpBackend>,
}

impl DashboardState {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            ui: Signal::new(UiState::new()),
            backend: Signal::new(HttpBackend::new(base_url)),
        }
    }

    /// A controller bound to this page. Cheap enough to build per event.
    pub fn controller(&self) -> DashboardController {
        Controller::new(
            self.backend.cloned(),
            SignalCell(self.ui),
            WebShell::new(self.ui),
        )
    }
}
