use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::FaGithub;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    service::SessionService,
    store::{
        inflight::{InFlightTicket, Operation, RequestKey},
        use_app_state,
    },
    util::redirect::redirect_to,
};

#[component]
pub fn GitHubLogin() -> Element {
    let state = use_app_state();
    let inflight = state.inflight;
    let api = state.api.clone();

    let key = RequestKey::new(Operation::StartOAuth);
    let pending = inflight.read().is_pending(&key);
    let disabled = pending || state.session.read().loading;

    let start_oauth = move |_| {
        let Ok(ticket) = InFlightTicket::acquire(inflight, key) else {
            return;
        };
        let api = api.clone();

        spawn(async move {
            let _ticket = ticket;
            let target = SessionService::new(&api).oauth_target().await;

            tracing::info!("Redirecting to GitHub sign in");
            redirect_to(&target);
        });
    };

    rsx!(
        button {
            class: "btn btn-outline w-full flex gap-2",
            r#type: "button",
            disabled: disabled,
            onclick: start_oauth,
            Icon {
                width: 20,
                height: 20,
                icon: FaGithub
            }
            p {
                "Continue with GitHub"
            }
        }
    )
}
