use std::fmt;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMoon, FaSun};
use dioxus_free_icons::Icon;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<Theme>>();

    rsx!(
        button {
            class: "btn btn-ghost btn-sm btn-circle",
            r#type: "button",
            onclick: move |_| {
                let next = theme().toggled();
                theme.set(next);
            },
            if theme() == Theme::Light {
                Icon { width: 18, height: 18, icon: FaMoon }
            } else {
                Icon { width: 18, height: 18, icon: FaSun }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_between_daisyui_themes() {
        assert_eq!(Theme::default().to_string(), "light");
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().to_string(), "light");
    }
}
