pub mod api;
pub mod catalog;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod theme;

#[cfg(test)]
mod test_support;

fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        if console_log::init_with_level(level).is_err() {
            web_sys::console::warn_1(&"logger already initialized".into());
        }
    }
}

/// Browser entry point: logging and theme, then the app.
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();
    log::info!("Starting portfolio frontend");

    if cfg!(debug_assertions) {
        if let Err(err) = catalog::validate_catalog(catalog::PROJECTS) {
            log::error!("project catalog is inconsistent: {}", err);
        }
    }

    theme::init_system_theme();

    #[cfg(target_arch = "wasm32")]
    router::mount_app();
}
