//! Cookie string helpers, kept free of browser APIs so they can be tested on
//! any target.

/// Extract a cookie's value from a `document.cookie` style string
/// (`"a=1; b=2"`).
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

/// Build the assignment string that persists `value` for `ttl_days`.
pub fn set_cookie_value(name: &str, value: &str, ttl_days: u32) -> String {
    let max_age = u64::from(ttl_days) * 86_400;
    format!("{name}={value}; max-age={max_age}; path=/; samesite=lax")
}

/// Build the assignment string that expires the cookie immediately.
pub fn clear_cookie_value(name: &str) -> String {
    format!("{name}=; max-age=0; path=/")
}
