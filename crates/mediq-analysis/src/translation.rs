use async_trait::async_trait;

use crate::error::Result;
use crate::traits::Translation;
use crate::types::TranslationOutput;

/// Mock translation service. Echoes the input text unchanged.
pub struct MockTranslationService;

impl MockTranslationService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockTranslationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translation for MockTranslationService {
    async fn translate(&self, text: &str, target_language: &str) -> Result<TranslationOutput> {
        tracing::debug!(target_language, chars = text.len(), "translation requested");

        // TODO: call the translation backend; the identity passthrough stands
        // in until then.
        Ok(TranslationOutput {
            translated_text: text.to_string(),
            detected_language: "auto".to_string(),
            target_language: target_language.to_string(),
        })
    }

    fn model_loaded(&self) -> bool {
        false
    }
}
