use async_trait::async_trait;
use serde_json::Value;

use crate::error::{AnalysisError, Result};
use crate::traits::TriageAnalysis;
use crate::types::TriageAssessment;

/// Mock triage service. Returns a fixed urgency score and question list.
pub struct MockTriageService;

impl MockTriageService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockTriageService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TriageAnalysis for MockTriageService {
    async fn assess(&self, context: &Value) -> Result<TriageAssessment> {
        if !context.is_object() {
            return Err(AnalysisError::invalid_context(
                "context must be a JSON object",
            ));
        }
        tracing::debug!(keys = context.as_object().map(|m| m.len()), "triage context received");

        // TODO: replace the constant assessment with a symptom model.
        Ok(TriageAssessment {
            urgency_score: 0.5,
            follow_up_questions: vec![
                "How long have you had these symptoms?".to_string(),
                "Is the discomfort getting better or worse?".to_string(),
                "Do you have any known allergies or chronic conditions?".to_string(),
            ],
            advice: "Consult a clinician if symptoms persist or worsen".to_string(),
        })
    }

    fn model_loaded(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_fixed_assessment() {
        let service = MockTriageService::new();
        let result = service
            .assess(&json!({"symptoms": ["headache"]}))
            .await
            .unwrap();
        assert_eq!(result.urgency_score, 0.5);
        assert_eq!(result.follow_up_questions.len(), 3);
    }

    #[tokio::test]
    async fn test_context_is_ignored_but_must_be_object() {
        let service = MockTriageService::new();
        let a = service.assess(&json!({})).await.unwrap();
        let b = service.assess(&json!({"age": 40})).await.unwrap();
        assert_eq!(a, b);

        let err = service.assess(&json!("free text")).await.unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidContext { .. }));
    }

    #[test]
    fn test_model_not_loaded() {
        assert!(!MockTriageService::new().model_loaded());
    }
}
