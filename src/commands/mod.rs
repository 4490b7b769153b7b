// src/commands/mod.rs

pub mod history;
pub mod optimize;
pub mod settings;

pub use history::*;
pub use optimize::*;
pub use settings::*;

use crate::providers::ProviderError;

/// Provider failures cross the command boundary with a hint the frontend
/// shows verbatim, mirroring the kind of mistake that causes most of them.
pub(crate) fn with_guidance(err: ProviderError) -> String {
    format!("{}. Please check your API Key and endpoint settings.", err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guidance_keeps_the_original_error_kind_visible() {
        let msg = with_guidance(ProviderError::Api {
            status: 401,
            body: "invalid key".to_string(),
        });
        assert!(msg.starts_with("API Error (401): invalid key"));
        assert!(msg.contains("Please check your API Key"));
    }
}
