use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        service::CatalogService,
        store::{
            inflight::{InFlightTicket, Operation, RequestKey},
            use_app_state,
        },
    },
    model::coffee::CoffeeDto,
};

#[component]
pub fn CoffeeCard(coffee: CoffeeDto) -> Element {
    let state = use_app_state();
    let mut catalog = state.catalog;
    let mut session = state.session;
    let inflight = state.inflight;
    let api = state.api.clone();

    let mut confirming = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let coffee_id = coffee.id;
    let key = RequestKey::for_entity(Operation::DeleteCoffee, coffee_id);
    let deleting = inflight.read().is_pending(&key);

    let delete = move |_| {
        let Ok(ticket) = InFlightTicket::acquire(inflight, key) else {
            return;
        };
        let api = api.clone();

        spawn(async move {
            let _ticket = ticket;

            match CatalogService::new(&api).delete_coffee(coffee_id).await {
                Ok(()) => {
                    catalog.write().remove_coffee(coffee_id);
                    session.write().remove_coffee_notes(coffee_id);
                }
                Err(e) => {
                    tracing::error!("Failed to delete coffee {}: {}", coffee_id, e);
                    error.set(Some(e.user_message()));
                    confirming.set(false);
                }
            }
        });
    };

    rsx!(
        li { class: "flex flex-col gap-1 bg-base-100 rounded-box p-3",
            div { class: "flex items-start justify-between gap-2",
                div {
                    p { class: "font-semibold", "{coffee.name}" }
                    p { class: "text-sm opacity-70", "{coffee.description}" }
                }
                if confirming() {
                    div { class: "flex gap-1 shrink-0",
                        button {
                            class: "btn btn-error btn-xs",
                            disabled: deleting,
                            onclick: delete,
                            if deleting {
                                span { class: "loading loading-spinner loading-xs" }
                            }
                            "Delete"
                        }
                        button {
                            class: "btn btn-ghost btn-xs",
                            disabled: deleting,
                            onclick: move |_| confirming.set(false),
                            "Keep"
                        }
                    }
                } else {
                    button {
                        class: "btn btn-ghost btn-xs btn-square shrink-0",
                        title: "Delete coffee",
                        onclick: move |_| {
                            error.set(None);
                            confirming.set(true);
                        },
                        Icon { width: 12, height: 12, icon: FaTrash }
                    }
                }
            }
            if confirming() {
                p { class: "text-xs text-warning", "Deleting this coffee also removes its notes." }
            }
            if let Some(message) = error() {
                p { class: "text-xs text-error", "{message}" }
            }
        }
    )
}
