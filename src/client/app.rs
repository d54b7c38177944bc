use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::{ApiClient, Client, DefaultTransport},
    components::Theme,
    config::Config,
    router::Route,
    service::SessionService,
    store::{
        inflight::{InFlightTicket, Operation, RequestKey},
        use_app_state_provider,
    },
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let theme = use_context_provider(|| Signal::new(Theme::default()));
    let state = use_app_state_provider(build_client);
    let mut session = state.session;
    let inflight = state.inflight;
    let api = state.api.clone();

    // Session probe, runs once at startup
    use_future(move || {
        let api = api.clone();
        async move {
            let Ok(_ticket) =
                InFlightTicket::acquire(inflight, RequestKey::new(Operation::FetchSession))
            else {
                return;
            };

            match SessionService::new(&api).fetch_session().await {
                Ok(user) => {
                    if let Some(user) = user.as_ref() {
                        tracing::info!("Restored session for {}", user.username);
                    }
                    session.write().apply_session(user);
                }
                Err(e) => {
                    tracing::error!("Failed to check session: {}", e);
                    session.write().apply_session(None);
                }
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/daisyui@5" }
        document::Script { src: "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { "data-theme": "{theme}", class: "min-h-screen bg-base-100 text-base-content",
            Router::<Route> {}
        }
    }
}

/// Builds the API client from compile-time configuration.
///
/// Invalid configuration is logged and replaced by defaults so the UI still
/// renders and can report request failures.
fn build_client() -> Client {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error, using defaults: {}", e);
            Config::default()
        }
    };

    let transport = match DefaultTransport::new() {
        Ok(transport) => transport,
        Err(e) => {
            tracing::error!("Failed to build HTTP client, using defaults: {}", e);
            DefaultTransport::default()
        }
    };

    tracing::debug!("API base URL: '{}'", config.api_url);
    ApiClient::new(transport, config)
}
