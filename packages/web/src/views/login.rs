//! Login page view.

use dioxus::prelude::*;
use session::SessionStore;
use ui::{use_client, use_session, SessionState};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let client = use_client();
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let nav = use_navigator();

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            loading.set(true);
            match client.login(email().trim(), &password()).await {
                Ok(token) => {
                    session::default_store().set(&token, session::SESSION_TTL_DAYS);
                    session.set(SessionState { token: Some(token) });
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    loading.set(false);
                    tracing::error!("login failed: {err}");
                    ui::alert("Login failed.");
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-form-container",

            h2 { "Login" }

            form {
                onsubmit: handle_login,

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
                    if loading() { "Logging in..." } else { "Login" }
                }
            }

            p {
                "Don't have an account yet? "
                Link { to: Route::Register {}, "Register here" }
            }
        }
    }
}
