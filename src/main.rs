#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod client;
mod clipboard;
mod config;
mod controller;
mod dispatch;
mod emotion;
mod language;
mod logger;
mod state;
mod ui;
mod view;

use config::{Config, FileStore};

fn main() {
    logger::init();
    tracing::info!("App starting");

    // The store keeps what is on disk; env overrides only apply to this run.
    let path = Config::path();
    let on_disk = Config::load_from(&path);
    let mut cfg = on_disk.clone();
    cfg.apply_env();
    tracing::info!(
        api = %cfg.api_base_url,
        lang = cfg.target_language.code(),
        theme = ?cfg.theme,
        "config loaded from {}",
        path.display()
    );

    let store = FileStore::new(on_disk, path);
    if store.config().theme.is_none() {
        tracing::info!("no saved theme, following the platform preference");
    }
    if let Err(e) = ui::run(cfg, store) {
        tracing::error!(error = %e, "fatal");
        std::process::exit(1);
    }
    tracing::info!("App exiting");
}
