#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen_futures::spawn_local;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting staffdesk frontend");

    spawn_local(async move {
        staffdesk::config::init().await;
        log::debug!("runtime config initialized");
        staffdesk::router::mount_app();
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Browser-only application; nothing to run on native targets.
    eprintln!("staffdesk is a wasm application; build it with trunk for the browser");
}
