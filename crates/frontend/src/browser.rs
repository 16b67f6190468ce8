//! Thin wrappers over the few `web_sys` calls the pages make. Failures are
//! logged and swallowed; none of them should take the page down.

use dioxus::logger::tracing::warn;

/// Show a native alert box.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.alert_with_message(message).is_err() {
        warn!(text = message, "alert failed");
    }
}

/// Open `url` in a new tab without handing it a reference to this page.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
        warn!(url, error = ?e, "failed to open new tab");
    }
}

/// Write `text` to the system clipboard.
pub fn copy_to_clipboard(text: String) {
    wasm_bindgen_futures::spawn_local(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        if let Err(e) = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
            warn!(error = ?e, "clipboard write rejected");
        }
    });
}

/// Current vertical scroll offset of the window in CSS pixels.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}
