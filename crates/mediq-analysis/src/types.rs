use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of a triage assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageAssessment {
    /// Urgency within [0, 1]; higher means see a clinician sooner.
    pub urgency_score: f64,
    /// Suggested questions to refine the assessment, in order.
    pub follow_up_questions: Vec<String>,
    /// Free-text guidance for the patient.
    pub advice: String,
}

/// Outcome of a radiology image/context analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiologyFindings {
    /// Condition → probability mapping; probabilities need not sum to 1.
    pub findings: BTreeMap<String, f64>,
    /// Narrative impression.
    pub impression: String,
}

/// Outcome of a translation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationOutput {
    pub translated_text: String,
    pub detected_language: String,
    pub target_language: String,
}

/// Outcome of a medical-knowledge query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeAnswer {
    pub answer: String,
    /// Citation labels for the answer, in order.
    pub sources: Vec<String>,
}
