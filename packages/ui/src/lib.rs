//! This crate contains the UI plumbing shared by the frontend: session
//! context, the shared API client handle, and error surfacing.

mod auth;
pub use auth::{
    expire_session, on_api_error, use_client, use_session, LogoutButton, SessionProvider,
    SessionState,
};

mod notify;
pub use notify::alert;
