#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

#[cfg(target_arch = "wasm32")]
mod app;
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    use crate::{app::App, app_lib::config::AppConfig};
    use leptos::prelude::mount_to_body;

    console_error_panic_hook::set_once();
    let config = AppConfig::load();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(config.log_level);
    tracing::info!(commit = app_lib::build_info::git_commit_hash(), "starting portal");

    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
