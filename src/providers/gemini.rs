// src/providers/gemini.rs

use async_trait::async_trait;

use crate::providers::{optimize_user_message, translate_instruction, PromptBackend, ProviderError};
use crate::types::{
    GeminiContent, GeminiPart, GeminiRequest, GeminiResponse, ModelFamily,
};

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Native Gemini transport: single-turn generateContent exchange with the
/// system instruction carried out-of-band from the user message.
#[derive(Debug)]
pub struct GeminiBackend {
    api_key: String,
    model_id: String,
    api_base: String,
}

impl GeminiBackend {
    pub fn new(api_key: String, model_id: String) -> Result<Self, ProviderError> {
        if api_key.trim().is_empty() {
            return Err(ProviderError::MissingCredential("API Key"));
        }
        if model_id.trim().is_empty() {
            return Err(ProviderError::MissingCredential("Model Name"));
        }
        Ok(Self {
            api_key,
            model_id,
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model_id)
    }

    async fn call(&self, instruction: &str, user_text: &str) -> Result<String, ProviderError> {
        let request_body = GeminiRequest {
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: instruction.to_string(),
                }],
            },
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: user_text.to_string(),
                }],
            }],
        };

        let client = reqwest::Client::new();
        let response = client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status.as_u16(), body));
        }

        let parsed: GeminiResponse = response.json().await.map_err(|e| ProviderError::Api {
            status: status.as_u16(),
            body: format!("malformed response: {}", e),
        })?;

        parsed
            .first_text()
            .map(|text| text.trim().to_string())
            .ok_or_else(|| ProviderError::Api {
                status: status.as_u16(),
                body: "response contained no candidate text".to_string(),
            })
    }
}

#[async_trait]
impl PromptBackend for GeminiBackend {
    async fn generate(
        &self,
        instruction: &str,
        family: ModelFamily,
        user_prompt: &str,
    ) -> Result<String, ProviderError> {
        let user_message = optimize_user_message(family, user_prompt);
        self.call(instruction, &user_message).await
    }

    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        self.call(&translate_instruction(target_language), text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_nests_model_under_api_base() {
        let backend = GeminiBackend::new("key".to_string(), "gemini-2.5-flash".to_string()).unwrap();
        assert_eq!(
            backend.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn empty_api_key_is_rejected_before_any_network_call() {
        let err = GeminiBackend::new("   ".to_string(), "gemini-2.5-flash".to_string()).unwrap_err();
        assert!(matches!(err, ProviderError::MissingCredential("API Key")));
    }

    #[test]
    fn empty_model_id_is_rejected() {
        let err = GeminiBackend::new("key".to_string(), String::new()).unwrap_err();
        assert!(matches!(err, ProviderError::MissingCredential("Model Name")));
    }
}
