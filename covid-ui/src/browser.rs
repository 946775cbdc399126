//! Browser side of the controller seams.

use covid_state::notification::NOTIFICATION_TIMEOUT_MS;
use covid_state::{DismissTicket, Shell, StateCell, UiState};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use log::{debug, warn};
use wasm_bindgen_futures::spawn_local;

/// [`StateCell`] over the page's `UiState` signal. Every update goes through
/// `Signal::write`, so components re-render after each step.
#[derive(Clone, Copy)]
pub struct SignalCell(pub Signal<UiState>);

impl StateCell for SignalCell {
    fn update<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> R {
        let mut ui = self.0;
        let mut guard = ui.write();
        f(&mut guard)
    }
}

/// Confirmation through `window.confirm`, dismissal through a timer.
#[derive(Clone, Copy)]
pub struct WebShell {
    ui: Signal<UiState>,
}

impl WebShell {
    pub fn new(ui: Signal<UiState>) -> Self {
        Self { ui }
    }
}

impl Shell for WebShell {
    fn confirm(&self, prompt: &str) -> bool {
        let Some(window) = web_sys::window() else {
            warn!("No window available, treating confirmation as declined");
            return false;
        };
        window.confirm_with_message(prompt).unwrap_or(false)
    }

    fn schedule_dismiss(&self, ticket: DismissTicket) {
        let mut ui = self.ui;
        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_TIMEOUT_MS).await;
            if ui.write().notifications.dismiss(ticket) {
                debug!("Auto-hid {:?} notification", ticket.region);
            }
        });
    }
}

/// Origin of the page, e.g. `http://localhost:5000`. The API is served
/// from the same host, so this is the client's base URL.
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}
