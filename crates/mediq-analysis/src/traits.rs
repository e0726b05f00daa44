//! Analysis service contracts.
//!
//! Every service is an async trait with a single mock implementation today.
//! A model-backed variant satisfies the same contract later without touching
//! callers. Implementations must be thread-safe (`Send + Sync`), hold only
//! fields set at construction time, and never mutate them afterwards.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AnalysisError;
use crate::types::{KnowledgeAnswer, RadiologyFindings, TranslationOutput, TriageAssessment};
use mediq_core::AnalysisResult;

/// Skin-lesion classification from raw image bytes.
#[async_trait]
pub trait SkinLesionAnalysis: Send + Sync {
    /// Analyze an image and return a prediction with derived risk level.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidImage` if the bytes cannot be decoded.
    /// The error is terminal for the request; callers must not retry.
    async fn analyze(&self, image_bytes: &[u8]) -> Result<AnalysisResult, AnalysisError>;

    /// Whether a real model is loaded. Mock implementations report `false`.
    fn model_loaded(&self) -> bool;
}

/// Radiology study analysis from a loosely-typed context mapping.
#[async_trait]
pub trait RadiologyAnalysis: Send + Sync {
    /// Analyze a study context and return condition probabilities.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidContext` if the context is not a JSON
    /// object.
    async fn analyze(&self, context: &Value) -> Result<RadiologyFindings, AnalysisError>;

    fn model_loaded(&self) -> bool;
}

/// Symptom triage from a loosely-typed context mapping.
#[async_trait]
pub trait TriageAnalysis: Send + Sync {
    /// Assess urgency and propose follow-up questions.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidContext` if the context is not a JSON
    /// object.
    async fn assess(&self, context: &Value) -> Result<TriageAssessment, AnalysisError>;

    fn model_loaded(&self) -> bool;
}

/// Text translation between languages.
#[async_trait]
pub trait Translation: Send + Sync {
    /// Translate `text` into `target_language`.
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<TranslationOutput, AnalysisError>;

    fn model_loaded(&self) -> bool;
}

/// Medical knowledge-base queries.
#[async_trait]
pub trait MedicalKnowledge: Send + Sync {
    /// Answer a free-text medical question with cited sources.
    async fn query(&self, question: &str) -> Result<KnowledgeAnswer, AnalysisError>;

    fn model_loaded(&self) -> bool;
}
