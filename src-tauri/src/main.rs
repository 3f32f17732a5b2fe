// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod commands;
mod events;
mod state;

use std::sync::Arc;

use log::info;
use meshport::broadcast::BroadcastingLogWriter;
use tokio::sync::RwLock;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use state::TauriAppState;

fn main() {
    let state = TauriAppState::new();

    // Logs go to the console and, through the broadcaster, to the UI log area.
    let writer_broadcaster = state.log_broadcaster.clone();
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(move || BroadcastingLogWriter::new(writer_broadcaster.clone())),
        )
        .init();

    info!("Starting Meshport Desktop v{}", env!("CARGO_PKG_VERSION"));

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_notification::init())
        .setup(move |app| {
            use tauri::Manager;

            app.manage(Arc::new(RwLock::new(state)));

            // Start event bridge
            let handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                events::start_event_bridge(handle).await;
            });

            info!("Meshport Desktop initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Dependency commands
            commands::check_dependencies,
            // File commands
            commands::pick_folder,
            commands::list_input_files,
            // Batch commands
            commands::validate_metadata,
            commands::start_batch,
            commands::batch_status,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
