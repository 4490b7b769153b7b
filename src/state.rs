// src/state.rs

use std::sync::{atomic::AtomicBool, Mutex};

use crate::history::HistoryStore;
use crate::settings::AppSettings;

pub struct OptimizerManager {
    pub history: Mutex<HistoryStore>,
    pub app_settings: Mutex<AppSettings>,
    /// Single-flight guard: one generation or translation at a time.
    pub request_in_flight: AtomicBool,
}
