// src/providers/mod.rs

pub mod gemini;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

use crate::settings::{ProviderKind, ProviderSettings};
use crate::types::ModelFamily;

pub use gemini::GeminiBackend;
pub use openai::OpenAiCompatBackend;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0} is missing")]
    MissingCredential(&'static str),
    /// Backend overload (HTTP 503). The only error class worth retrying.
    #[error("Model overloaded (HTTP {status}): {body}")]
    Overloaded { status: u16, body: String },
    #[error("API Error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("Network error: {0}")]
    Network(String),
}

impl ProviderError {
    pub fn is_transient(&self) -> bool {
        matches!(self, ProviderError::Overloaded { .. })
    }

    pub fn from_status(status: u16, body: String) -> Self {
        if status == 503 {
            ProviderError::Overloaded { status, body }
        } else {
            ProviderError::Api { status, body }
        }
    }
}

/// The one capability both transports implement. Selected once per request
/// from the persisted provider settings, never branched on at call sites.
#[async_trait]
pub trait PromptBackend: Send + Sync {
    /// Sends the family's system instruction plus the fixed optimize
    /// message and returns the trimmed response text.
    async fn generate(
        &self,
        instruction: &str,
        family: ModelFamily,
        user_prompt: &str,
    ) -> Result<String, ProviderError>;

    /// Translates an already-generated art prompt into the target language.
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, ProviderError>;
}

pub fn backend_for(settings: &ProviderSettings) -> Result<Box<dyn PromptBackend>, ProviderError> {
    match settings.kind {
        ProviderKind::Gemini => Ok(Box::new(GeminiBackend::new(
            settings.api_key.clone(),
            settings.model_id.clone(),
        )?)),
        ProviderKind::OpenAiCompatible => Ok(Box::new(OpenAiCompatBackend::new(
            settings.api_key.clone(),
            settings.base_url.clone(),
            settings.model_id.clone(),
        )?)),
    }
}

pub(crate) fn optimize_user_message(family: ModelFamily, user_prompt: &str) -> String {
    format!("Optimize this prompt for {}: \"{}\"", family, user_prompt)
}

pub(crate) fn translate_instruction(target_language: &str) -> String {
    format!(
        "You are a professional translator. Your task is to translate the following AI art prompt into {}. Provide a clear and accurate translation that captures the artistic intent. Output ONLY the translation.",
        target_language
    )
}
