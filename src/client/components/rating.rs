use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaStar;
use dioxus_free_icons::Icon;

#[component]
pub fn StarRating(rating: i32, #[props(default = 16)] size: u32) -> Element {
    rsx!(
        div { class: "flex gap-0.5",
            {(1..=5).map(|star| {
                let color = if star <= rating { "text-amber-400" } else { "text-base-300" };
                rsx! {
                    span { key: "{star}", class: "{color}",
                        Icon {
                            width: size,
                            height: size,
                            icon: FaStar
                        }
                    }
                }
            })}
        }
    )
}
