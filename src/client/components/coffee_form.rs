use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorBanner, Field},
        form::{coffee::CoffeeForm, FormState},
        service::CatalogService,
        store::{
            inflight::{InFlightTicket, Operation, RequestKey},
            use_app_state,
        },
    },
    model::coffee::CoffeeDto,
};

/// Inline form adding a coffee to one cafe.
#[component]
pub fn CoffeeFormCard(
    cafe_id: i32,
    on_saved: Option<EventHandler<CoffeeDto>>,
    on_cancel: Option<EventHandler<()>>,
) -> Element {
    let state = use_app_state();
    let mut catalog = state.catalog;
    let inflight = state.inflight;
    let api = state.api.clone();

    let mut form = use_signal(|| FormState::new(CoffeeForm::default()));

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let key = RequestKey::for_entity(Operation::CreateCoffee, cafe_id);
        let Ok(ticket) = InFlightTicket::acquire(inflight, key) else {
            return;
        };
        let Ok(values) = form.write().begin_submit() else {
            return;
        };
        let api = api.clone();

        spawn(async move {
            let _ticket = ticket;
            let result = CatalogService::new(&api)
                .create_coffee(&values.payload(cafe_id))
                .await;
            form.write().finish(&result, true);

            if let Ok(coffee) = result {
                catalog.write().upsert_coffee(coffee.clone());
                if let Some(on_saved) = on_saved {
                    on_saved.call(coffee);
                }
            }
        });
    };

    let current = form.read();

    rsx!(
        div { class: "bg-base-100 rounded-box p-4",
            h3 { class: "font-semibold", "Add a New Coffee" }
            ErrorBanner { message: current.submit_error().map(str::to_string) }
            form { class: "flex flex-col gap-2", onsubmit: submit,
                Field {
                    label: "Coffee Name",
                    error: current.error("name").map(str::to_string),
                    input {
                        class: "input w-full",
                        r#type: "text",
                        placeholder: "Hair Bender",
                        value: "{current.values.name}",
                        oninput: move |evt: FormEvent| {
                            form.write().update(|values| values.name = evt.value());
                        },
                        onblur: move |_| form.write().blur("name"),
                    }
                }
                Field {
                    label: "Description",
                    error: current.error("description").map(str::to_string),
                    textarea {
                        class: "textarea w-full",
                        rows: 3,
                        placeholder: "Tasting notes, origin, roast",
                        value: "{current.values.description}",
                        oninput: move |evt: FormEvent| {
                            form.write().update(|values| values.description = evt.value());
                        },
                        onblur: move |_| form.write().blur("description"),
                    }
                }
                div { class: "flex justify-end gap-2 mt-2",
                    if let Some(on_cancel) = on_cancel {
                        button {
                            class: "btn btn-ghost btn-sm",
                            r#type: "button",
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                    }
                    button {
                        class: "btn btn-primary btn-sm",
                        r#type: "submit",
                        disabled: current.is_submitting(),
                        if current.is_submitting() {
                            span { class: "loading loading-spinner loading-xs" }
                        }
                        "Add Coffee"
                    }
                }
            }
        }
    )
}
