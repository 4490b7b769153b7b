// src/lib.rs

pub mod commands;
pub mod history;
pub mod postprocess;
pub mod providers;
pub mod retry;
pub mod settings;
pub mod state;
pub mod templates;
pub mod types;

use std::sync::{atomic::AtomicBool, Mutex};

use tauri::Manager;

use crate::history::{resolve_history_path, HistoryStore};
use crate::state::OptimizerManager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let app_settings = settings::load_settings()?;

            let history_path = resolve_history_path()?;
            println!("[history] path = {}", history_path.display());
            let history = HistoryStore::load(history_path)?;
            println!("[history] loaded {} record(s)", history.records().len());

            app.manage(OptimizerManager {
                history: Mutex::new(history),
                app_settings: Mutex::new(app_settings),
                request_in_flight: AtomicBool::new(false),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::optimize::optimize_prompt,
            commands::optimize::translate_prompt,
            commands::history::list_history,
            commands::history::delete_history_entry,
            commands::history::clear_history,
            commands::history::export_history,
            commands::settings::get_settings,
            commands::settings::save_app_settings,
            commands::settings::reset_settings
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
