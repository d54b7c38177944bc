use dioxus::prelude::*;
use dioxus::core::Task;
use dioxus_logger::tracing;

use crate::client::{
    components::{LoginCard, Navbar, Page},
    router::Route,
    service::CatalogService,
    store::{
        catalog::CatalogState,
        inflight::{InFlightTicket, Operation, RequestKey},
        use_app_state,
    },
};

/// Gates every route behind the session probe and sign in.
#[component]
pub fn AppLayout() -> Element {
    let state = use_app_state();
    let session = state.session;
    let mut catalog = state.catalog;
    let inflight = state.inflight;
    let api = state.api.clone();
    let mut catalog_task = use_signal(|| None::<Task>);

    // Cafes and coffees require a session, so they load once per sign in
    use_effect(move || {
        if !session.read().is_authenticated() {
            // Releases the fetch ticket so the next sign in can load its own
            if let Some(task) = catalog_task.write().take() {
                task.cancel();
            }
            if catalog.peek().loaded {
                *catalog.write() = CatalogState::default();
            }
            return;
        }

        if catalog.peek().loaded {
            return;
        }

        let Ok(ticket) =
            InFlightTicket::acquire(inflight, RequestKey::new(Operation::FetchCatalog))
        else {
            return;
        };
        let api = api.clone();
        let epoch = session.peek().epoch;

        let task = spawn(async move {
            let _ticket = ticket;
            let result = CatalogService::new(&api).fetch_catalog().await;

            if !session.peek().is_current(epoch) {
                tracing::debug!("Dropping cafes and coffees loaded for a previous session");
                return;
            }

            match result {
                Ok((cafes, coffees)) => {
                    tracing::debug!("Loaded {} cafes and {} coffees", cafes.len(), coffees.len());
                    catalog.write().apply_catalog(cafes, coffees);
                }
                Err(e) => {
                    tracing::error!("Failed to load cafes and coffees: {}", e);
                    catalog.write().apply_error(e.user_message());
                }
            }
        });
        catalog_task.set(Some(task));
    });

    let (fetched, authenticated) = {
        let session = session.read();
        (session.fetched, session.is_authenticated())
    };

    if !fetched {
        return rsx!(
            Page { class: "flex items-center justify-center",
                span { class: "loading loading-spinner loading-lg" }
            }
        );
    }

    if !authenticated {
        return rsx!(
            Page { class: "flex items-center justify-center",
                LoginCard {}
            }
        );
    }

    rsx!(
        Navbar {}
        Outlet::<Route> {}
    )
}
