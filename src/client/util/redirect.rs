use dioxus_logger::tracing;

/// Sends the browser to a URL outside the client router, such as the
/// GitHub authorization page.
#[cfg(target_arch = "wasm32")]
pub fn redirect_to(url: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(err) = window.location().set_href(url) {
                tracing::error!("Failed to redirect to {}: {:?}", url, err);
            }
        }
        None => tracing::error!("No window available to redirect to {}", url),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_to(url: &str) {
    tracing::warn!("External redirects are only supported in the browser: {}", url);
}
