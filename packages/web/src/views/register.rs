//! Registration page view.

use dioxus::prelude::*;
use session::SessionStore;
use ui::{use_client, use_session, SessionState};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let client = use_client();
    let mut session = use_session();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let nav = use_navigator();

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            loading.set(true);
            match client
                .register(username().trim(), email().trim(), &password())
                .await
            {
                Ok(token) => {
                    session::default_store().set(&token, session::SESSION_TTL_DAYS);
                    session.set(SessionState { token: Some(token) });
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    loading.set(false);
                    tracing::error!("registration failed: {err}");
                    ui::alert("Registration failed.");
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-form-container",

            h2 { "Register" }

            form {
                onsubmit: handle_register,

                div {
                    class: "form-group",
                    label { "Username:" }
                    input {
                        r#type: "text",
                        class: "form-control",
                        required: true,
                        value: username(),
                        oninput: move |evt| username.set(evt.value()),
                    }
                }

                div {
                    class: "form-group",
                    label { "Email:" }
                    input {
                        r#type: "email",
                        class: "form-control",
                        required: true,
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                div {
                    class: "form-group",
                    label { "Password:" }
                    input {
                        r#type: "password",
                        class: "form-control",
                        required: true,
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Register" }
                }
            }

            p {
                "Already have an account? "
                Link { to: Route::Login {}, "Login" }
            }
        }
    }
}
