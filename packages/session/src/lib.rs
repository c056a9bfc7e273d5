//! # Session persistence
//!
//! Holds the bearer token the rest of the app authenticates with. The token is
//! opaque to us: present means "logged in", absent means "logged out", and
//! nothing here talks to the server.
//!
//! Storage sits behind the [`SessionStore`] trait with two backends:
//!
//! - [`CookieStore`] (wasm, `web` feature) persists the token in a browser
//!   cookie with a fixed 7-day expiry, so a reload or a new tab picks the
//!   session back up.
//! - [`MemoryStore`] is the process-local fallback used on native builds and
//!   in tests.

mod cookie;
pub use cookie::{clear_cookie_value, read_cookie, set_cookie_value};

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::CookieStore;

/// Name of the cookie the bearer token is persisted under.
pub const TOKEN_COOKIE: &str = "access_token";

/// How long a persisted session lives, in days.
pub const SESSION_TTL_DAYS: u32 = 7;

/// Storage for the session's bearer token.
///
/// The store exclusively owns the persisted token; UI state is derived from it
/// at startup and after every auth operation.
pub trait SessionStore: Sync {
    /// Currently persisted token, if any.
    fn get(&self) -> Option<String>;
    /// Persist a token with the given lifetime.
    fn set(&self, token: &str, ttl_days: u32);
    /// Drop the persisted token.
    fn clear(&self);
}

/// The store for the current platform: browser cookies under wasm with the
/// `web` feature, a process-wide [`MemoryStore`] everywhere else.
pub fn default_store() -> &'static dyn SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        static STORE: CookieStore = CookieStore;
        &STORE
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        static STORE: std::sync::OnceLock<MemoryStore> = std::sync::OnceLock::new();
        STORE.get_or_init(MemoryStore::new)
    }
}
