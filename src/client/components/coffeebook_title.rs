use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMugHot;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn CoffeebookTitleButton() -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            div { class: "flex items-center gap-2",
                div { class: "bg-primary text-primary-content rounded p-1 flex",
                    Icon {
                        width: 24,
                        height: 24,
                        icon: FaMugHot
                    }
                }
                p { class: "text-xl font-bold hidden sm:block",
                    "Coffeebook"
                }
            }
        }
    )
}
