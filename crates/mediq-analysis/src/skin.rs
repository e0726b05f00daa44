use async_trait::async_trait;

use crate::error::{AnalysisError, Result};
use crate::preprocess::preprocess_image;
use crate::traits::SkinLesionAnalysis;
use mediq_core::AnalysisResult;

/// Mock skin-lesion classifier.
///
/// Runs the real preprocessing pipeline, then returns a fixed prediction in
/// place of model inference.
pub struct MockSkinLesionService {
    model_path: String,
}

impl MockSkinLesionService {
    pub fn new(model_path: impl Into<String>) -> Self {
        Self {
            model_path: model_path.into(),
        }
    }

    pub fn model_path(&self) -> &str {
        &self.model_path
    }
}

#[async_trait]
impl SkinLesionAnalysis for MockSkinLesionService {
    async fn analyze(&self, image_bytes: &[u8]) -> Result<AnalysisResult> {
        let tensor = preprocess_image(image_bytes)?;
        tracing::debug!(
            shape = ?tensor.shape(),
            model_path = %self.model_path,
            "skin-lesion input preprocessed"
        );

        // TODO: load the classifier from `model_path` and run inference on
        // `tensor` instead of returning the canned prediction below.
        let result = AnalysisResult::new("Benign keratosis", 0.85)
            .with_probability("Benign keratosis", 0.85)
            .with_probability("Melanoma", 0.05)
            .with_probability("Nevus", 0.10)
            .with_recommendations([
                "Monitor the lesion for changes in size, shape, or color",
                "Use broad-spectrum sun protection",
                "Schedule a routine dermatology review",
            ]);

        result
            .validate()
            .map_err(|e| AnalysisError::internal(e.to_string()))?;
        Ok(result)
    }

    fn model_loaded(&self) -> bool {
        false
    }
}
