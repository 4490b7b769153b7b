// src/history.rs

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::HistoryRecord;

pub const MAX_HISTORY: usize = 10;

pub fn unix_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::from_secs(0))
        .as_millis() as i64
}

/// Get the path to the history file (~/.config/promptforge/history.json)
pub fn resolve_history_path() -> Result<PathBuf, String> {
    let config_dir =
        dirs::config_dir().ok_or_else(|| "Could not determine config directory".to_string())?;

    let app_config_dir = config_dir.join("promptforge");

    if !app_config_dir.exists() {
        fs::create_dir_all(&app_config_dir)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    Ok(app_config_dir.join("history.json"))
}

/// Bounded, newest-first record of past generations, persisted as a JSON
/// array. Every mutation is a read-modify-persist sequence; callers hold
/// the store behind a mutex so the sequence never interleaves.
pub struct HistoryStore {
    path: PathBuf,
    records: Vec<HistoryRecord>,
}

impl HistoryStore {
    /// Load history from disk; a missing file yields an empty store.
    /// Legacy string-shaped results are normalized during deserialization.
    pub fn load(path: PathBuf) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self {
                path,
                records: Vec::new(),
            });
        }

        let content =
            fs::read_to_string(&path).map_err(|e| format!("Failed to read history: {}", e))?;
        let mut records: Vec<HistoryRecord> =
            serde_json::from_str(&content).map_err(|e| format!("Failed to parse history: {}", e))?;
        records.truncate(MAX_HISTORY);

        Ok(Self { path, records })
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Prepend the newest record, evicting past the capacity bound.
    pub fn append(&mut self, record: HistoryRecord) -> Result<(), String> {
        self.records.insert(0, record);
        self.records.truncate(MAX_HISTORY);
        self.persist()
    }

    /// Attach a translation to every record whose stored prompt text equals
    /// `prompt_text`. Matching is by text equality across the whole list,
    /// the same contract the persisted data has always had. Returns how
    /// many records were updated.
    pub fn update_translation(
        &mut self,
        prompt_text: &str,
        translation: &str,
    ) -> Result<usize, String> {
        let mut updated = 0;
        for record in &mut self.records {
            if record.result.prompt_text == prompt_text {
                record.result.translation = Some(translation.to_string());
                updated += 1;
            }
        }
        if updated > 0 {
            self.persist()?;
        }
        Ok(updated)
    }

    pub fn delete_at(&mut self, index: usize) -> Result<(), String> {
        if index >= self.records.len() {
            return Err(format!("No history entry at index {}", index));
        }
        self.records.remove(index);
        self.persist()
    }

    pub fn clear(&mut self) -> Result<(), String> {
        self.records.clear();
        self.persist()
    }

    /// Serialized snapshot of the full list, for export to the frontend.
    pub fn export(&self) -> Result<String, String> {
        serde_json::to_string_pretty(&self.records)
            .map_err(|e| format!("Failed to serialize history: {}", e))
    }

    fn persist(&self) -> Result<(), String> {
        let content = serde_json::to_string_pretty(&self.records)
            .map_err(|e| format!("Failed to serialize history: {}", e))?;
        fs::write(&self.path, content).map_err(|e| format!("Failed to write history: {}", e))
    }
}
