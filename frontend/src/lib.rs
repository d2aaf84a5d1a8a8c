pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

/// Browser entry point: installs the panic hook and logger, starts resolving
/// the API base URL, then mounts the app.
pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Starting HRMS Lite frontend v{}", env!("CARGO_PKG_VERSION"));

    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        log::debug!("Runtime config initialized");
    });

    router::mount_app();
}
