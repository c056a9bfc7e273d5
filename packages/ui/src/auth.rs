//! Session context and hooks for the UI.
//!
//! The session store owns the persisted token; components observe it through
//! the [`SessionState`] signal this module provides. State is loaded from the
//! store once at app start, updated by the auth operations, and torn down on
//! logout or a rejected token.

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use session::SessionStore;

/// Session state for the application. Authenticated means "a token is
/// present"; it is not re-validated against the server at render time, so a
/// revoked token is only discovered by the next failing API call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the shared API client provided at the app root.
pub fn use_client() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that owns the session state.
/// Wrap the router with this component to enable the session hooks.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| SessionState {
        token: session::default_store().get(),
    });
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Tear the session down locally and return to the login page. Used on
/// explicit logout and whenever the server rejects the token.
pub fn expire_session(mut session: Signal<SessionState>) {
    session::default_store().clear();
    session.set(SessionState::default());
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

/// Shared failure path for API calls made from views.
///
/// A rejected token invalidates the session and redirects to login; anything
/// else is logged and surfaced as one static blocking alert.
pub fn on_api_error(err: &ApiError, session: Signal<SessionState>) {
    match err {
        ApiError::Unauthorized => {
            tracing::warn!("token rejected by the server, ending session");
            expire_session(session);
        }
        err => {
            tracing::error!("request failed: {err}");
            crate::notify::alert("Request failed. Please try again.");
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let client = use_client();
    let session = use_session();

    let onclick = move |_| {
        let client = client.clone();
        async move {
            // Best-effort server revocation; local session is cleared either way.
            api::sign_out(&client, session::default_store()).await;
            expire_session(session);
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
