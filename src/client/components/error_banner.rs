use dioxus::prelude::*;

#[component]
pub fn ErrorBanner(message: Option<String>) -> Element {
    rsx!(
        if let Some(message) = message {
            div { role: "alert", class: "alert alert-error alert-soft",
                span { "{message}" }
            }
        }
    )
}
