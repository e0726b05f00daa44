//! Analysis service contracts and mock implementations.
//!
//! The traits in [`traits`] are the seam between the HTTP layer and the
//! analysis backends. Every service currently has one mock implementation
//! returning fixed data; model-backed variants implement the same traits
//! later without touching callers.

pub mod error;
pub mod knowledge;
pub mod preprocess;
pub mod radiology;
pub mod skin;
pub mod traits;
pub mod translation;
pub mod triage;
pub mod types;

pub use error::{AnalysisError, Result};
pub use knowledge::MockMedicalKnowledgeService;
pub use preprocess::{INPUT_SIZE, preprocess_image};
pub use radiology::MockRadiologyService;
pub use skin::MockSkinLesionService;
pub use traits::{
    MedicalKnowledge, RadiologyAnalysis, SkinLesionAnalysis, Translation, TriageAnalysis,
};
pub use translation::MockTranslationService;
pub use triage::MockTriageService;
pub use types::{KnowledgeAnswer, RadiologyFindings, TranslationOutput, TriageAssessment};
