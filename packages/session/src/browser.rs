use wasm_bindgen::JsCast;

use crate::cookie::{clear_cookie_value, read_cookie, set_cookie_value};
use crate::{SessionStore, TOKEN_COOKIE};

/// Browser-cookie backed SessionStore.
///
/// No encryption and no refresh logic: one cookie, fixed expiry, readable by
/// script. Storage unavailability (no window, cookie write rejected) is
/// logged and otherwise treated as an absent session.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieStore;

fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?.document()?.dyn_into().ok()
}

impl SessionStore for CookieStore {
    fn get(&self) -> Option<String> {
        let doc = html_document()?;
        let cookies = doc.cookie().ok()?;
        read_cookie(&cookies, TOKEN_COOKIE)
    }

    fn set(&self, token: &str, ttl_days: u32) {
        let Some(doc) = html_document() else {
            tracing::warn!("no document available, session not persisted");
            return;
        };
        if doc
            .set_cookie(&set_cookie_value(TOKEN_COOKIE, token, ttl_days))
            .is_err()
        {
            tracing::warn!("failed to write session cookie");
        }
    }

    fn clear(&self) {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&clear_cookie_value(TOKEN_COOKIE));
        }
    }
}
