use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{ErrorBanner, NoteFormCard, Page},
    router::Route,
    service::NoteService,
    store::use_app_state,
};

#[component]
pub fn NewNote() -> Element {
    let nav = navigator();

    rsx!(
        Title { "New Note | Coffeebook" }
        Page {
            NoteFormCard {
                on_saved: move |_| {
                    nav.push(Route::Home {});
                },
                on_cancel: move |_| {
                    nav.push(Route::Home {});
                },
            }
        }
    )
}

#[component]
pub fn EditNote(id: i32) -> Element {
    rsx!(
        Title { "Edit Note | Coffeebook" }
        Page {
            EditNoteLoader { key: "{id}", id }
        }
    )
}

/// Uses the note from the session when present, otherwise fetches it.
#[component]
fn EditNoteLoader(id: i32) -> Element {
    let state = use_app_state();
    let session = state.session;
    let api = state.api.clone();
    let nav = navigator();

    let note = use_resource(move || {
        let api = api.clone();
        async move {
            if let Some(note) = session.peek().note(id).cloned() {
                return Ok(note);
            }

            NoteService::new(&api)
                .get_note(id)
                .await
                .map_err(|e| e.user_message())
        }
    });

    match &*note.read_unchecked() {
        Some(Ok(note)) => rsx!(
            NoteFormCard {
                existing: note.clone(),
                on_saved: move |_| {
                    nav.push(Route::Home {});
                },
                on_cancel: move |_| {
                    nav.push(Route::Home {});
                },
            }
        ),
        Some(Err(message)) => rsx!(
            div { class: "flex flex-col items-center gap-4 py-8",
                ErrorBanner { message: message.clone() }
                Link { to: Route::Home {}, class: "btn btn-outline", "Back to notes" }
            }
        ),
        None => rsx!(
            div { class: "flex justify-center py-8",
                span { class: "loading loading-spinner loading-md" }
            }
        ),
    }
}
