// src/commands/history.rs

use serde::Deserialize;
use tauri::{AppHandle, Emitter, State};

use crate::state::OptimizerManager;
use crate::types::HistoryRecord;

#[derive(Deserialize)]
pub struct DeleteHistoryArgs {
    pub index: usize,
}

#[tauri::command]
pub fn list_history(state: State<'_, OptimizerManager>) -> Result<Vec<HistoryRecord>, String> {
    let history = state.history.lock().map_err(|e| e.to_string())?;
    Ok(history.records().to_vec())
}

#[tauri::command]
pub fn delete_history_entry(
    args: DeleteHistoryArgs,
    app: AppHandle,
    state: State<'_, OptimizerManager>,
) -> Result<(), String> {
    {
        let mut history = state.history.lock().map_err(|e| e.to_string())?;
        history.delete_at(args.index)?;
    }
    let _ = app.emit("history:changed", ());
    Ok(())
}

#[tauri::command]
pub fn clear_history(app: AppHandle, state: State<'_, OptimizerManager>) -> Result<(), String> {
    {
        let mut history = state.history.lock().map_err(|e| e.to_string())?;
        history.clear()?;
    }
    let _ = app.emit("history:changed", ());
    Ok(())
}

#[tauri::command]
pub fn export_history(state: State<'_, OptimizerManager>) -> Result<String, String> {
    let history = state.history.lock().map_err(|e| e.to_string())?;
    history.export()
}
