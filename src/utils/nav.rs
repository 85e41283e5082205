/// Hard navigation via window.location, matching a full route change after
/// auth transitions. No-op on the host so SSR tests can exercise the callers.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
    }
}

/// Redirect after a fixed delay. Used by the login flow so the success
/// notice stays visible before the dashboard loads.
pub fn redirect_after_delay(path: &'static str, delay_ms: u32) {
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            redirect(path);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (path, delay_ms);
    }
}
