#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use audit_business::BusinessConfig;
use audit_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> eframe::Result {
    dotenvy::dotenv().ok();

    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    // Commands are spawned onto the ambient Tokio runtime.
    let runtime = tokio::runtime::Runtime::new().expect("Failed to start Tokio runtime");
    let _guard = runtime.enter();

    let config = BusinessConfig::from_env().unwrap_or_else(|err| {
        log::warn!("Invalid environment config, using defaults: {err}");
        BusinessConfig::default()
    });
    log::info!("Using API at {}", config.api_url());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Audit",
        native_options,
        Box::new(move |_cc| {
            let app = audit_ui::AuditApp::new(State::new(config));
            Ok(Box::new(app))
        }),
    )
}
