// src/commands/optimize.rs

use std::sync::atomic::Ordering;

use serde::Deserialize;
use tauri::{AppHandle, Emitter, State};

use crate::commands::with_guidance;
use crate::history::unix_ms;
use crate::postprocess::apply_parameters;
use crate::providers::backend_for;
use crate::retry::with_retries;
use crate::state::OptimizerManager;
use crate::templates::instruction_for;
use crate::types::{GenerationResult, HistoryRecord, ModelFamily, ParameterSet};

#[derive(Deserialize)]
pub struct OptimizeArgs {
    #[serde(alias = "user_prompt", alias = "userPrompt")]
    pub user_prompt: String,
    #[serde(alias = "model_family", alias = "modelFamily")]
    pub model_family: ModelFamily,
    #[serde(default)]
    pub params: ParameterSet,
}

#[derive(Deserialize)]
pub struct TranslateArgs {
    #[serde(alias = "prompt_text", alias = "promptText")]
    pub prompt_text: String,
    #[serde(default, alias = "target_language", alias = "targetLanguage")]
    pub target_language: Option<String>,
}

#[tauri::command]
pub async fn optimize_prompt(
    args: OptimizeArgs,
    app: AppHandle,
    state: State<'_, OptimizerManager>,
) -> Result<GenerationResult, String> {
    if state
        .request_in_flight
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err("A generation is already in progress".to_string());
    }

    let outcome = run_optimize(args, &app, &state).await;
    state.request_in_flight.store(false, Ordering::SeqCst);
    outcome
}

async fn run_optimize(
    args: OptimizeArgs,
    app: &AppHandle,
    state: &State<'_, OptimizerManager>,
) -> Result<GenerationResult, String> {
    let provider_settings = {
        let settings = state.app_settings.lock().map_err(|e| e.to_string())?;
        settings.provider.clone()
    };

    let backend = backend_for(&provider_settings).map_err(with_guidance)?;
    let instruction = instruction_for(args.model_family, &args.params);

    println!(
        "[optimize] family={} provider={:?}",
        args.model_family, provider_settings.kind
    );

    let raw_text = with_retries(|| {
        backend.generate(&instruction, args.model_family, &args.user_prompt)
    })
    .await
    .map_err(with_guidance)?;

    let final_text = apply_parameters(args.model_family, &raw_text, &args.params);
    let result = GenerationResult {
        prompt_text: final_text,
        translation: None,
    };

    // History is only touched after a fully successful generation.
    {
        let mut history = state.history.lock().map_err(|e| e.to_string())?;
        history.append(HistoryRecord {
            model_family: args.model_family,
            user_prompt: args.user_prompt,
            result: result.clone(),
            timestamp: unix_ms(),
        })?;
    }

    let _ = app.emit("history:changed", ());
    Ok(result)
}

#[tauri::command]
pub async fn translate_prompt(
    args: TranslateArgs,
    app: AppHandle,
    state: State<'_, OptimizerManager>,
) -> Result<String, String> {
    if state
        .request_in_flight
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err("A generation is already in progress".to_string());
    }

    let outcome = run_translate(args, &app, &state).await;
    state.request_in_flight.store(false, Ordering::SeqCst);
    outcome
}

async fn run_translate(
    args: TranslateArgs,
    app: &AppHandle,
    state: &State<'_, OptimizerManager>,
) -> Result<String, String> {
    let (provider_settings, default_language) = {
        let settings = state.app_settings.lock().map_err(|e| e.to_string())?;
        (
            settings.provider.clone(),
            settings.defaults.target_language.clone(),
        )
    };

    let target_language = args.target_language.unwrap_or(default_language);
    let backend = backend_for(&provider_settings).map_err(with_guidance)?;

    let translation = backend
        .translate(&args.prompt_text, &target_language)
        .await
        .map_err(with_guidance)?;

    let updated = {
        let mut history = state.history.lock().map_err(|e| e.to_string())?;
        history.update_translation(&args.prompt_text, &translation)?
    };
    println!("[translate] updated {} history record(s)", updated);

    let _ = app.emit("history:changed", ());
    Ok(translation)
}
