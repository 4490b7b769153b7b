// src/types/history.rs

use serde::{Deserialize, Serialize};

use crate::types::ModelFamily;

/// Output of one successful generation. `translation` stays absent until a
/// translation completes; a failed translation never touches it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub prompt_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

// Early builds persisted `result` as a bare string. Accept both shapes on
// read and normalize the legacy one to `{promptText, translation: absent}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredResult {
    Shaped {
        #[serde(rename = "promptText")]
        prompt_text: String,
        #[serde(default)]
        translation: Option<String>,
    },
    Legacy(String),
}

impl<'de> Deserialize<'de> for GenerationResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let stored = StoredResult::deserialize(deserializer)?;
        Ok(match stored {
            StoredResult::Shaped {
                prompt_text,
                translation,
            } => GenerationResult {
                prompt_text,
                translation,
            },
            StoredResult::Legacy(prompt_text) => GenerationResult {
                prompt_text,
                translation: None,
            },
        })
    }
}

/// One persisted generation event. Stored newest-first, capped at 10.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub model_family: ModelFamily,
    pub user_prompt: String,
    pub result: GenerationResult,
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_string_result_is_normalized_on_read() {
        let json = r#"{
            "modelFamily": "jimeng",
            "userPrompt": "a cat",
            "result": "plain legacy text",
            "timestamp": 1700000000000
        }"#;
        let record: HistoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.result.prompt_text, "plain legacy text");
        assert!(record.result.translation.is_none());
    }

    #[test]
    fn shaped_result_keeps_translation() {
        let json = r#"{
            "modelFamily": "midjourney",
            "userPrompt": "a wolf",
            "result": {"promptText": "A lone wolf --ar 16:9", "translation": "孤狼"},
            "timestamp": 1700000000001
        }"#;
        let record: HistoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.result.prompt_text, "A lone wolf --ar 16:9");
        assert_eq!(record.result.translation.as_deref(), Some("孤狼"));
    }

    #[test]
    fn absent_translation_is_not_serialized() {
        let result = GenerationResult {
            prompt_text: "text".to_string(),
            translation: None,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"promptText":"text"}"#);
    }
}
