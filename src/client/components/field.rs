use dioxus::prelude::*;

/// Label, control and inline error for a single form field.
#[component]
pub fn Field(label: String, error: Option<String>, children: Element) -> Element {
    rsx!(
        fieldset { class: "fieldset",
            legend { class: "fieldset-legend",
                "{label}"
            }
            {children}
            if let Some(error) = error {
                p { class: "label text-error",
                    "{error}"
                }
            }
        }
    )
}
