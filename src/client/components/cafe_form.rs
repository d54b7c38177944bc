use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorBanner, Field},
        form::{cafe::CafeForm, FormState},
        service::CatalogService,
        store::{
            inflight::{InFlightTicket, Operation, RequestKey},
            use_app_state,
        },
    },
    model::cafe::CafeDto,
};

#[component]
pub fn CafeFormCard(
    on_saved: Option<EventHandler<CafeDto>>,
    on_cancel: Option<EventHandler<()>>,
) -> Element {
    let state = use_app_state();
    let mut catalog = state.catalog;
    let inflight = state.inflight;
    let api = state.api.clone();

    let mut form = use_signal(|| FormState::new(CafeForm::default()));

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let Ok(ticket) = InFlightTicket::acquire(inflight, RequestKey::new(Operation::CreateCafe))
        else {
            return;
        };
        let Ok(values) = form.write().begin_submit() else {
            return;
        };
        let api = api.clone();

        spawn(async move {
            let _ticket = ticket;
            let result = CatalogService::new(&api).create_cafe(&values.payload()).await;
            form.write().finish(&result, true);

            if let Ok(cafe) = result {
                catalog.write().upsert_cafe(cafe.clone());
                if let Some(on_saved) = on_saved {
                    on_saved.call(cafe);
                }
            }
        });
    };

    let current = form.read();

    rsx!(
        div { class: "card bg-base-200 shadow-sm",
            div { class: "card-body",
                h2 { class: "card-title", "Add a New Cafe" }
                ErrorBanner { message: current.submit_error().map(str::to_string) }
                form { class: "flex flex-col gap-2", onsubmit: submit,
                    Field {
                        label: "Cafe Name",
                        error: current.error("name").map(str::to_string),
                        input {
                            class: "input w-full",
                            r#type: "text",
                            placeholder: "Stumptown Coffee",
                            value: "{current.values.name}",
                            oninput: move |evt: FormEvent| {
                                form.write().update(|values| values.name = evt.value());
                            },
                            onblur: move |_| form.write().blur("name"),
                        }
                    }
                    Field {
                        label: "Location",
                        error: current.error("location").map(str::to_string),
                        input {
                            class: "input w-full",
                            r#type: "text",
                            placeholder: "Portland, OR",
                            value: "{current.values.location}",
                            oninput: move |evt: FormEvent| {
                                form.write().update(|values| values.location = evt.value());
                            },
                            onblur: move |_| form.write().blur("location"),
                        }
                    }
                    div { class: "card-actions justify-end mt-2",
                        if let Some(on_cancel) = on_cancel {
                            button {
                                class: "btn btn-ghost",
                                r#type: "button",
                                onclick: move |_| on_cancel.call(()),
                                "Cancel"
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: current.is_submitting(),
                            if current.is_submitting() {
                                span { class: "loading loading-spinner loading-sm" }
                            }
                            "Add Cafe"
                        }
                    }
                }
            }
        }
    )
}
