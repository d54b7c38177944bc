use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{CafeCard, CafeFormCard, ErrorBanner, Page},
    router::Route,
    store::use_app_state,
};

/// Directory of cafes with their coffees.
#[component]
pub fn Cafes() -> Element {
    let state = use_app_state();
    let catalog = state.catalog;

    let (cafes, loaded, error) = {
        let catalog = catalog.read();
        (catalog.cafes.clone(), catalog.loaded, catalog.error.clone())
    };

    rsx!(
        Title { "Cafes | Coffeebook" }
        Page {
            h1 { class: "text-3xl font-bold", "Cafe Directory" }
            CafeFormCard {}
            div { class: "divider" }
            h2 { class: "text-xl font-semibold", "All Cafes ({cafes.len()})" }
            ErrorBanner { message: error }
            if !loaded {
                div { class: "flex justify-center py-8",
                    span { class: "loading loading-spinner loading-md" }
                }
            } else if cafes.is_empty() {
                p { class: "opacity-70", "No cafes yet. Add the first one above." }
            } else {
                div { class: "grid gap-4 md:grid-cols-2",
                    for cafe in cafes {
                        CafeCard { key: "{cafe.id}", cafe }
                    }
                }
            }
        }
    )
}

#[component]
pub fn NewCafe() -> Element {
    let nav = navigator();

    rsx!(
        Title { "New Cafe | Coffeebook" }
        Page {
            div { class: "w-full max-w-xl mx-auto",
                CafeFormCard {
                    on_saved: move |_| {
                        nav.push(Route::Cafes {});
                    },
                    on_cancel: move |_| {
                        nav.push(Route::Cafes {});
                    },
                }
            }
        }
    )
}
