mod components;
pub mod config;
pub mod data;
pub mod error;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Logger init failed: {}", err).into());
    }
    log::info!("Starting Workforce frontend ({})", env!("CARGO_PKG_VERSION"));
    config::init();
    router::mount_app();
}
