//! Client-side application state.
//!
//! All shared state lives in one [`AppState`] created by the root component
//! and provided to the tree once. Components read it with
//! [`use_app_state`]; nothing is reachable through globals.

pub mod catalog;
pub mod inflight;
pub mod session;

use dioxus::prelude::*;

use crate::client::{
    api::Client,
    store::{catalog::CatalogState, inflight::InFlight, session::SessionState},
};

#[derive(Clone)]
pub struct AppState {
    pub session: Store<SessionState>,
    pub catalog: Store<CatalogState>,
    pub inflight: Signal<InFlight>,
    pub api: Client,
}

/// Creates the application state and provides it to descendants.
///
/// Must be called exactly once, from the root component.
pub fn use_app_state_provider(api: impl FnOnce() -> Client) -> AppState {
    let session = use_store(SessionState::default);
    let catalog = use_store(CatalogState::default);
    let inflight = use_signal(InFlight::default);

    use_context_provider(move || AppState {
        session,
        catalog,
        inflight,
        api: api(),
    })
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}
