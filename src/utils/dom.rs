/// Blocking user-facing prompt. A no-op outside the browser.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
