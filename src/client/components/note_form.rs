use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorBanner, Field},
        form::{
            note::{rating_label, NoteForm, DEFAULT_RATING},
            FormState,
        },
        router::Route,
        service::NoteService,
        store::{
            inflight::{InFlightTicket, Operation, RequestKey},
            use_app_state,
        },
    },
    model::note::NoteDto,
};

static ADD_COFFEE_OPTION: &str = "add-new";

/// Create or edit form for a tasting note.
///
/// Passing `existing` prefills the form and saves with `PATCH`.
#[component]
pub fn NoteFormCard(
    existing: Option<NoteDto>,
    on_saved: EventHandler<NoteDto>,
    on_cancel: EventHandler<()>,
) -> Element {
    let state = use_app_state();
    let mut session = state.session;
    let catalog = state.catalog;
    let inflight = state.inflight;
    let api = state.api.clone();
    let nav = navigator();

    let mut form = use_signal(|| {
        FormState::new(existing.as_ref().map(NoteForm::from_note).unwrap_or_default())
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let editing = form.read().values.editing;
        let key = match editing {
            Some(note_id) => RequestKey::for_entity(Operation::SaveNote, note_id),
            None => RequestKey::new(Operation::SaveNote),
        };
        let Ok(ticket) = InFlightTicket::acquire(inflight, key) else {
            return;
        };
        let Ok(submission) = form.write().begin_note_submit(catalog.read().known_coffees()) else {
            return;
        };
        let api = api.clone();

        spawn(async move {
            let _ticket = ticket;
            let result = NoteService::new(&api).save_note(&submission).await;
            form.write().finish(&result, editing.is_none());

            if let Ok(note) = result {
                session.write().upsert_note(note.clone());
                on_saved.call(note);
            }
        });
    };

    let select_coffee = move |evt: FormEvent| {
        let value = evt.value();

        if value == ADD_COFFEE_OPTION {
            nav.push(Route::Cafes {});
            return;
        }

        form.write().update(|values| values.coffee_id = value.parse().ok());
        form.write().blur("coffee_id");
    };

    let current = form.read();
    let editing = current.values.is_editing();
    let rating = current.values.rating.unwrap_or(DEFAULT_RATING);
    let rating_text = format!("Rating: {} - {}", rating, rating_label(rating));
    let selected = current
        .values
        .coffee_id
        .map(|id| id.to_string())
        .unwrap_or_default();

    let options: Vec<(i32, String)> = {
        let catalog = catalog.read();
        catalog
            .coffees
            .iter()
            .map(|coffee| (coffee.id, catalog.coffee_label(coffee)))
            .collect()
    };

    let (heading, action) = if editing {
        ("Edit Coffee Note", "Update Note")
    } else {
        ("New Coffee Note", "Save Note")
    };

    rsx!(
        div { class: "card bg-base-200 shadow-sm w-full max-w-xl mx-auto",
            div { class: "card-body",
                h2 { class: "card-title", "{heading}" }
                ErrorBanner { message: current.submit_error().map(str::to_string) }
                form { class: "flex flex-col gap-2", onsubmit: submit,
                    Field {
                        label: "Coffee",
                        error: current.error("coffee_id").map(str::to_string),
                        select {
                            class: "select w-full",
                            value: "{selected}",
                            onchange: select_coffee,
                            option { value: "", disabled: true, selected: selected.is_empty(), "Select a coffee" }
                            if !editing {
                                option { value: ADD_COFFEE_OPTION, "+ Add New Coffee" }
                            }
                            for (id, label) in options {
                                option {
                                    key: "{id}",
                                    value: "{id}",
                                    selected: selected == id.to_string(),
                                    "{label}"
                                }
                            }
                        }
                    }
                    Field {
                        label: rating_text,
                        error: current.error("rating").map(str::to_string),
                        input {
                            class: "range range-primary w-full",
                            r#type: "range",
                            min: 1,
                            max: 5,
                            step: 1,
                            value: "{rating}",
                            oninput: move |evt: FormEvent| {
                                form.write().update(|values| values.rating = evt.value().parse().ok());
                            },
                        }
                        div { class: "flex justify-between px-1 text-xs opacity-60",
                            for step in 1..=5 {
                                span { key: "{step}", "{step}" }
                            }
                        }
                    }
                    Field {
                        label: "Comment",
                        error: current.error("comment").map(str::to_string),
                        textarea {
                            class: "textarea w-full",
                            rows: 4,
                            placeholder: "How did it taste?",
                            value: "{current.values.comment}",
                            oninput: move |evt: FormEvent| {
                                form.write().update(|values| values.comment = evt.value());
                            },
                            onblur: move |_| form.write().blur("comment"),
                        }
                    }
                    div { class: "card-actions justify-end mt-2",
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: current.is_submitting(),
                            if current.is_submitting() {
                                span { class: "loading loading-spinner loading-sm" }
                            }
                            "{action}"
                        }
                    }
                }
            }
        }
    )
}
