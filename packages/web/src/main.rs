use dioxus::prelude::*;

use api::ApiClient;
use ui::{use_session, SessionProvider};
use views::{Dashboard, Login, Register};

mod views;

/// Base URL of the notes backend, fixed at compile time.
const API_BASE_URL: &str = match option_env!("NOTES_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(RequireSession)]
        #[route("/dashboard")]
        Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| ApiClient::new(API_BASE_URL));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/login`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Login {});
    rsx! {}
}

/// Route guard for the dashboard: renders the child route only when a session
/// token is present, otherwise sends the user to the login page.
#[component]
fn RequireSession() -> Element {
    let session = use_session();
    let nav = use_navigator();

    if !session().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}
