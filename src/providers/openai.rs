// src/providers/openai.rs

use async_trait::async_trait;

use crate::providers::{optimize_user_message, translate_instruction, PromptBackend, ProviderError};
use crate::types::{ModelFamily, OpenAIMessage, OpenAIRequest, OpenAIResponse};

/// Transport for any OpenAI-compatible chat-completions endpoint.
#[derive(Debug)]
pub struct OpenAiCompatBackend {
    api_key: String,
    endpoint: String,
    model_id: String,
}

/// Users typically configure the base URL up to the API version
/// (e.g. `https://api.example.com/v1`); the chat path is appended here
/// unless it is already present.
fn normalize_endpoint(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with("/chat/completions") {
        trimmed.to_string()
    } else {
        format!("{}/chat/completions", trimmed)
    }
}

impl OpenAiCompatBackend {
    pub fn new(
        api_key: String,
        base_url: String,
        model_id: String,
    ) -> Result<Self, ProviderError> {
        if api_key.trim().is_empty() {
            return Err(ProviderError::MissingCredential("API Key"));
        }
        if base_url.trim().is_empty() {
            return Err(ProviderError::MissingCredential("Base URL"));
        }
        if model_id.trim().is_empty() {
            return Err(ProviderError::MissingCredential("Model Name"));
        }
        Ok(Self {
            api_key,
            endpoint: normalize_endpoint(&base_url),
            model_id,
        })
    }

    async fn chat(&self, instruction: &str, user_text: &str) -> Result<String, ProviderError> {
        let request_body = OpenAIRequest {
            model: self.model_id.clone(),
            messages: vec![
                OpenAIMessage {
                    role: "system".to_string(),
                    content: instruction.to_string(),
                },
                OpenAIMessage {
                    role: "user".to_string(),
                    content: user_text.to_string(),
                },
            ],
            stream: false,
        };

        let client = reqwest::Client::new();
        let response = client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status.as_u16(), body));
        }

        let parsed: OpenAIResponse = response.json().await.map_err(|e| ProviderError::Api {
            status: status.as_u16(),
            body: format!("malformed response: {}", e),
        })?;

        parsed
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .map(|content| content.trim().to_string())
            .ok_or_else(|| ProviderError::Api {
                status: status.as_u16(),
                body: "response contained no message content".to_string(),
            })
    }
}

#[async_trait]
impl PromptBackend for OpenAiCompatBackend {
    async fn generate(
        &self,
        instruction: &str,
        family: ModelFamily,
        user_prompt: &str,
    ) -> Result<String, ProviderError> {
        let user_message = optimize_user_message(family, user_prompt);
        self.chat(instruction, &user_message).await
    }

    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        self.chat(&translate_instruction(target_language), text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_appends_chat_path() {
        assert_eq!(
            normalize_endpoint("https://api.example.com/v1"),
            "https://api.example.com/v1/chat/completions"
        );
    }

    #[test]
    fn normalize_strips_trailing_slash() {
        assert_eq!(
            normalize_endpoint("https://api.example.com/v1/"),
            "https://api.example.com/v1/chat/completions"
        );
    }

    #[test]
    fn normalize_keeps_existing_chat_path() {
        assert_eq!(
            normalize_endpoint("https://api.example.com/v1/chat/completions"),
            "https://api.example.com/v1/chat/completions"
        );
    }

    #[test]
    fn every_empty_field_is_rejected_before_network() {
        let err = OpenAiCompatBackend::new(String::new(), "u".into(), "m".into()).unwrap_err();
        assert!(matches!(err, ProviderError::MissingCredential("API Key")));

        let err = OpenAiCompatBackend::new("k".into(), String::new(), "m".into()).unwrap_err();
        assert!(matches!(err, ProviderError::MissingCredential("Base URL")));

        let err = OpenAiCompatBackend::new("k".into(), "u".into(), String::new()).unwrap_err();
        assert!(matches!(err, ProviderError::MissingCredential("Model Name")));
    }
}
