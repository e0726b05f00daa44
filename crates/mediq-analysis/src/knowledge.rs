use async_trait::async_trait;

use crate::error::{AnalysisError, Result};
use crate::traits::MedicalKnowledge;
use crate::types::KnowledgeAnswer;

/// Mock medical-knowledge service. Returns a canned answer with sources.
pub struct MockMedicalKnowledgeService;

impl MockMedicalKnowledgeService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockMedicalKnowledgeService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MedicalKnowledge for MockMedicalKnowledgeService {
    async fn query(&self, question: &str) -> Result<KnowledgeAnswer> {
        if question.trim().is_empty() {
            return Err(AnalysisError::invalid_context("question must not be empty"));
        }
        tracing::debug!(chars = question.len(), "knowledge query received");

        // TODO: query the knowledge-base backend instead of the canned answer.
        Ok(KnowledgeAnswer {
            answer: "This service is running in mock mode and cannot answer medical \
                     questions yet. Please consult a qualified clinician."
                .to_string(),
            sources: vec![
                "MedIQ knowledge base (placeholder)".to_string(),
                "General medical guidance (placeholder)".to_string(),
            ],
        })
    }

    fn model_loaded(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_canned_answer_with_sources() {
        let service = MockMedicalKnowledgeService::new();
        let answer = service.query("What causes migraines?").await.unwrap();
        assert!(answer.answer.contains("mock mode"));
        assert_eq!(answer.sources.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_question_rejected() {
        let service = MockMedicalKnowledgeService::new();
        let err = service.query("   ").await.unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidContext { .. }));
    }

    #[test]
    fn test_model_not_loaded() {
        assert!(!MockMedicalKnowledgeService::new().model_loaded());
    }
}
