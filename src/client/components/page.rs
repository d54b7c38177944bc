use dioxus::prelude::*;

/// Page body below the fixed navbar.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        div {
            class: "min-h-screen pt-[72px] p-4 {class}",
            div { class: "w-full max-w-[1200px] mx-auto flex flex-col gap-4 h-full",
                {children}
            }
        }
    )
}
