use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaLocationDot, FaPlus};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{CoffeeCard, CoffeeFormCard},
        store::use_app_state,
    },
    model::cafe::CafeDto,
};

#[component]
pub fn CafeCard(cafe: CafeDto) -> Element {
    let state = use_app_state();
    let catalog = state.catalog;

    let mut adding = use_signal(|| false);

    let coffees: Vec<_> = catalog
        .read()
        .coffees_for_cafe(cafe.id)
        .into_iter()
        .cloned()
        .collect();

    rsx!(
        div { class: "card bg-base-200 shadow-sm",
            div { class: "card-body gap-3",
                div { class: "flex items-start justify-between gap-2",
                    div {
                        h2 { class: "card-title", "{cafe.name}" }
                        p { class: "text-sm opacity-70 flex items-center gap-1",
                            Icon { width: 12, height: 12, icon: FaLocationDot }
                            "{cafe.location}"
                        }
                    }
                    if !adding() {
                        button {
                            class: "btn btn-outline btn-sm flex gap-1",
                            onclick: move |_| adding.set(true),
                            Icon { width: 12, height: 12, icon: FaPlus }
                            "Add Coffee"
                        }
                    }
                }
                if adding() {
                    CoffeeFormCard {
                        cafe_id: cafe.id,
                        on_saved: move |_| adding.set(false),
                        on_cancel: move |_| adding.set(false),
                    }
                }
                if coffees.is_empty() {
                    p { class: "text-sm opacity-60", "No coffees listed yet." }
                } else {
                    ul { class: "flex flex-col gap-2",
                        for coffee in coffees {
                            CoffeeCard { key: "{coffee.id}", coffee }
                        }
                    }
                }
            }
        }
    )
}
