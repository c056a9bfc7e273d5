/// Surface a message to the user as a blocking modal alert.
///
/// Always logged as well, since the alert text is static and the log line is
/// the only place the underlying error shows up.
pub fn alert(message: &str) {
    tracing::warn!("{message}");
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
