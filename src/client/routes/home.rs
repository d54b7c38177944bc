use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMugHot, FaPlus};
use dioxus_free_icons::Icon;

use crate::client::{
    components::{CoffeeSummaryCard, Page},
    router::Route,
    store::use_app_state,
    summary::{overall_average, summarize_notes},
};

#[component]
pub fn Home() -> Element {
    let state = use_app_state();
    let session = state.session;

    let (username, summaries, overall) = {
        let session = session.read();
        let username = session
            .user
            .as_ref()
            .map(|user| user.username.clone())
            .unwrap_or_default();

        (
            username,
            summarize_notes(session.notes()),
            overall_average(session.notes()),
        )
    };

    rsx!(
        Title { "Coffeebook" }
        Meta {
            name: "description",
            content: "Your coffee tasting notes, grouped by coffee."
        }
        Page {
            div { class: "flex flex-wrap items-center justify-between gap-2",
                div {
                    h1 { class: "text-3xl font-bold", "{username}'s Coffee Notes" }
                    if let Some(overall) = overall {
                        p { class: "text-sm opacity-70",
                            {format!("{} coffees tasted, {:.1} average rating", summaries.len(), overall)}
                        }
                    }
                }
                Link {
                    to: Route::NewNote {},
                    class: "btn btn-primary flex gap-2",
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "Add New Note"
                }
            }
            if summaries.is_empty() {
                div { class: "flex flex-col items-center gap-3 py-16 text-center",
                    Icon { width: 48, height: 48, class: "opacity-40", icon: FaMugHot }
                    h2 { class: "text-xl font-semibold", "No coffee notes yet" }
                    p { class: "opacity-70", "Taste something good? Write it down." }
                    Link {
                        to: Route::NewNote {},
                        class: "btn btn-outline",
                        "Add your first note"
                    }
                }
            } else {
                div { class: "grid gap-4 md:grid-cols-2",
                    for summary in summaries {
                        CoffeeSummaryCard { key: "{summary.coffee.id}", summary }
                    }
                }
            }
        }
    )
}
