use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaTrash};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::StarRating,
        router::Route,
        service::NoteService,
        store::{
            inflight::{InFlightTicket, Operation, RequestKey},
            use_app_state,
        },
        summary::CoffeeSummary,
    },
    model::note::NoteDto,
};

/// One coffee with its average rating and the user's notes about it.
#[component]
pub fn CoffeeSummaryCard(summary: CoffeeSummary) -> Element {
    let coffee = &summary.coffee;
    let average = summary.average_rating.round() as i32;
    let notes_label = if summary.total_notes == 1 { "note" } else { "notes" };
    let average_text = format!("{:.1}", summary.average_rating);

    rsx!(
        div { class: "card bg-base-200 shadow-sm",
            div { class: "card-body gap-3",
                div {
                    h2 { class: "card-title", "{coffee.name}" }
                    if let Some(cafe) = coffee.cafe.as_ref() {
                        p { class: "text-sm opacity-70", "{cafe.name} - {cafe.location}" }
                    }
                    p { class: "text-sm mt-1", "{coffee.description}" }
                }
                div { class: "flex items-center gap-2",
                    StarRating { rating: average }
                    span { class: "text-sm",
                        "{average_text} average from {summary.total_notes} {notes_label}"
                    }
                }
                ul { class: "flex flex-col gap-2",
                    for note in summary.notes.iter().cloned() {
                        NoteItem { key: "{note.id}", note }
                    }
                }
            }
        }
    )
}

#[component]
fn NoteItem(note: NoteDto) -> Element {
    let state = use_app_state();
    let mut session = state.session;
    let inflight = state.inflight;
    let api = state.api.clone();

    let mut confirming = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let note_id = note.id;
    let key = RequestKey::for_entity(Operation::DeleteNote, note_id);
    let deleting = inflight.read().is_pending(&key);

    let delete = move |_| {
        let Ok(ticket) = InFlightTicket::acquire(inflight, key) else {
            return;
        };
        let api = api.clone();

        spawn(async move {
            let _ticket = ticket;

            match NoteService::new(&api).delete_note(note_id).await {
                Ok(()) => {
                    session.write().remove_note(note_id);
                }
                Err(e) => {
                    tracing::error!("Failed to delete note {}: {}", note_id, e);
                    error.set(Some(e.user_message()));
                    confirming.set(false);
                }
            }
        });
    };

    rsx!(
        li { class: "bg-base-100 rounded-box p-3 flex flex-col gap-1",
            div { class: "flex items-center justify-between gap-2",
                div { class: "flex items-center gap-2",
                    StarRating { rating: note.rating, size: 12 }
                    span { class: "text-xs opacity-70", "{note.rating}/5" }
                }
                div { class: "flex gap-1",
                    if confirming() {
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
                    } else {
                        Link {
                            to: Route::EditNote { id: note_id },
                            class: "btn btn-ghost btn-xs btn-square",
                            Icon { width: 12, height: 12, icon: FaPen }
                        }
                        button {
                            class: "btn btn-ghost btn-xs btn-square",
                            title: "Delete note",
                            onclick: move |_| {
                                error.set(None);
                                confirming.set(true);
                            },
                            Icon { width: 12, height: 12, icon: FaTrash }
                        }
                    }
                }
            }
            p { class: "text-sm", "{note.comment}" }
            if let Some(message) = error() {
                p { class: "text-xs text-error", "{message}" }
            }
        }
    )
}
