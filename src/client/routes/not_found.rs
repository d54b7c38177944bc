use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not Found | Coffeebook" }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 text-center py-16",
                h1 { class: "text-4xl font-bold", "404" }
                p { "Nothing brewing at /{path}" }
                Link { to: Route::Home {}, class: "btn btn-primary", "Back to my notes" }
            }
        }
    )
}
