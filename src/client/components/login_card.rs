use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEye, FaEyeSlash, FaMugHot};
use dioxus_free_icons::Icon;

use crate::client::{
    components::{ErrorBanner, Field, GitHubLogin},
    form::{
        login::{LoginForm, LoginMode},
        FormState,
    },
    service::SessionService,
    store::{
        inflight::{InFlightTicket, Operation, RequestKey},
        session::SessionState,
        use_app_state,
    },
};

/// Sign in and sign up card shown to visitors without a session.
#[component]
pub fn LoginCard() -> Element {
    let state = use_app_state();
    let mut session = state.session;
    let inflight = state.inflight;
    let api = state.api.clone();

    let mut form = use_signal(|| FormState::new(LoginForm::default()));
    let mut show_password = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let mode = form.read().values.mode;
        let operation = match mode {
            LoginMode::SignIn => Operation::Login,
            LoginMode::SignUp => Operation::Signup,
        };
        let Ok(ticket) = InFlightTicket::acquire(inflight, RequestKey::new(operation)) else {
            return;
        };
        let Ok(values) = form.write().begin_submit() else {
            return;
        };

        session.write().begin_auth();
        let api = api.clone();

        spawn(async move {
            let _ticket = ticket;
            let credentials = values.credentials();
            let service = SessionService::new(&api);

            let result = match mode {
                LoginMode::SignIn => service.login(&credentials).await,
                LoginMode::SignUp => service.signup(&credentials).await,
            };
            form.write().finish(&result, false);

            match result {
                Ok(user) => session.write().apply_login(user),
                Err(e) => session.write().apply_auth_error(mode.failure_message(&e)),
            }
        });
    };

    let toggle_mode = move |_| {
        form.write().update(|values| values.mode = values.mode.toggled());
        clear_auth_error(session);
    };

    let current = form.read();
    let mode = current.values.mode;
    let (loading, error) = {
        let session = session.read();
        (session.loading, session.error.clone())
    };
    let disabled = loading || !current.values.is_complete();
    let password_type = if show_password() { "text" } else { "password" };

    let (heading, action, toggle_prompt, toggle_label) = match mode {
        LoginMode::SignIn => ("Welcome back", "Sign In", "New here?", "Create an account"),
        LoginMode::SignUp => ("Create your account", "Sign Up", "Have an account?", "Sign in"),
    };

    rsx!(
        div { class: "card bg-base-200 w-full max-w-sm mx-auto shadow-md",
            div { class: "card-body gap-4",
                div { class: "flex flex-col items-center gap-2",
                    div { class: "bg-primary text-primary-content rounded-full p-3 flex",
                        Icon { width: 28, height: 28, icon: FaMugHot }
                    }
                    h2 { class: "card-title text-2xl", "{heading}" }
                    p { class: "text-sm opacity-70", "Keep track of every cup worth remembering" }
                }
                ErrorBanner { message: error }
                form { class: "flex flex-col gap-2", onsubmit: submit,
                    Field {
                        label: "Username",
                        error: current.error("username").map(str::to_string),
                        input {
                            class: "input w-full",
                            r#type: "text",
                            autocomplete: "username",
                            value: "{current.values.username}",
                            oninput: move |evt: FormEvent| {
                                form.write().update(|values| values.username = evt.value());
                                clear_auth_error(session);
                            },
                            onblur: move |_| form.write().blur("username"),
                        }
                    }
                    Field {
                        label: "Password",
                        error: current.error("password").map(str::to_string),
                        div { class: "join w-full",
                            input {
                                class: "input join-item w-full",
                                r#type: "{password_type}",
                                autocomplete: "current-password",
                                value: "{current.values.password}",
                                oninput: move |evt: FormEvent| {
                                    form.write().update(|values| values.password = evt.value());
                                    clear_auth_error(session);
                                },
                                onblur: move |_| form.write().blur("password"),
                            }
                            button {
                                class: "btn join-item",
                                r#type: "button",
                                onclick: move |_| show_password.toggle(),
                                if show_password() {
                                    Icon { width: 16, height: 16, icon: FaEyeSlash }
                                } else {
                                    Icon { width: 16, height: 16, icon: FaEye }
                                }
                            }
                        }
                    }
                    button {
                        class: "btn btn-primary w-full mt-2",
                        r#type: "submit",
                        disabled: disabled,
                        if loading {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "{action}"
                    }
                }
                div { class: "divider text-xs", "OR" }
                GitHubLogin {}
                p { class: "text-sm text-center",
                    "{toggle_prompt} "
                    button {
                        class: "link link-primary",
                        r#type: "button",
                        onclick: toggle_mode,
                        "{toggle_label}"
                    }
                }
            }
        }
    )
}

fn clear_auth_error(mut session: Store<SessionState>) {
    if session.peek().error.is_some() {
        session.write().clear_error();
    }
}
