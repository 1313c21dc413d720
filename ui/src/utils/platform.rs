//! Platform Detection Utilities
//!
//! Browser environment helpers used to pick a message catalog.

use crate::console_debug;

/// Locale used when the browser does not report one (or on native targets).
pub const DEFAULT_LOCALE: &str = "en-US";

/// Detect the preferred locale of the current browser
pub fn detect_locale() -> String {
    let locale = browser_language().unwrap_or_else(|| DEFAULT_LOCALE.to_string());
    console_debug!("Detected locale: {}", locale);
    locale
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
fn browser_language() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.navigator().language())
        .filter(|language| !language.trim().is_empty())
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
fn browser_language() -> Option<String> {
    None
}

/// Primary language subtag of a BCP 47 tag: `"fr-CA"` -> `"fr"`
pub fn language_of(locale: &str) -> &str {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
}
