use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPlus, FaRightFromBracket};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::{CoffeebookTitleButton, ThemeToggle},
    router::Route,
    service::SessionService,
    store::{
        inflight::{InFlightTicket, Operation, RequestKey},
        use_app_state,
    },
};

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed top-0 z-10 shadow-sm",
            div {
                class: "navbar-start gap-4",
                CoffeebookTitleButton {}
                ul { class: "menu menu-horizontal hidden md:flex gap-1",
                    li {
                        Link { to: Route::Home {}, "My Coffee Notes" }
                    }
                    li {
                        Link { to: Route::Cafes {}, "Cafes" }
                    }
                }
            }
            div {
                class: "navbar-end gap-2",
                Link {
                    to: Route::NewNote {},
                    class: "btn btn-primary btn-sm flex gap-2",
                    Icon {
                        width: 14,
                        height: 14,
                        icon: FaPlus
                    }
                    span { class: "hidden sm:inline", "Add Note" }
                }
                ThemeToggle {}
                UserMenu {}
            }
        }
    }
}

#[component]
fn UserMenu() -> Element {
    let state = use_app_state();
    let mut session = state.session;
    let inflight = state.inflight;
    let api = state.api.clone();
    let nav = navigator();

    let Some(user) = session.read().user.clone() else {
        return rsx!();
    };

    let logout = move |_| {
        let Ok(ticket) = InFlightTicket::acquire(inflight, RequestKey::new(Operation::Logout))
        else {
            return;
        };
        let api = api.clone();

        spawn(async move {
            let _ticket = ticket;

            // The local session ends regardless of what the server says
            if let Err(e) = SessionService::new(&api).logout().await {
                tracing::error!("Failed to end server session: {}", e);
            }

            session.write().apply_logout();
            nav.push(Route::Home {});
        });
    };

    rsx!(
        div { class: "dropdown dropdown-end",
            div {
                tabindex: 0,
                role: "button",
                class: "btn btn-ghost btn-circle avatar avatar-placeholder",
                if let Some(avatar_url) = user.avatar_url.as_ref() {
                    div { class: "w-9 rounded-full",
                        img { src: "{avatar_url}", alt: "{user.username}" }
                    }
                } else {
                    div { class: "w-9 rounded-full bg-neutral text-neutral-content",
                        span { "{user.initial()}" }
                    }
                }
            }
            ul {
                tabindex: 0,
                class: "menu dropdown-content bg-base-100 rounded-box z-20 mt-3 w-56 p-2 shadow",
                li { class: "menu-title",
                    p { class: "font-semibold text-base-content", "{user.username}" }
                    if let Some(email) = user.email.as_ref() {
                        p { class: "text-xs", "{email}" }
                    }
                }
                li {
                    button {
                        onclick: logout,
                        Icon {
                            width: 14,
                            height: 14,
                            icon: FaRightFromBracket
                        }
                        "Sign Out"
                    }
                }
            }
        }
    )
}
