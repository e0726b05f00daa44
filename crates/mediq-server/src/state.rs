use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use mediq_analysis::{
    MedicalKnowledge, MockMedicalKnowledgeService, MockRadiologyService, MockSkinLesionService,
    MockTranslationService, MockTriageService, RadiologyAnalysis, SkinLesionAnalysis, Translation,
    TriageAnalysis,
};

/// Shared application state: one instance of every analysis service, built
/// at process start and never mutated afterwards. Handlers receive it by
/// cheap clone (all services behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub skin: Arc<dyn SkinLesionAnalysis>,
    pub radiology: Arc<dyn RadiologyAnalysis>,
    pub triage: Arc<dyn TriageAnalysis>,
    pub translation: Arc<dyn Translation>,
    pub knowledge: Arc<dyn MedicalKnowledge>,
    started_at: Instant,
}

impl AppState {
    /// Build the state with the mock service set.
    pub fn new_mock(model_path: &str) -> Self {
        Self {
            skin: Arc::new(MockSkinLesionService::new(model_path)),
            radiology: Arc::new(MockRadiologyService::new()),
            triage: Arc::new(MockTriageService::new()),
            translation: Arc::new(MockTranslationService::new()),
            knowledge: Arc::new(MockMedicalKnowledgeService::new()),
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Per-model load state for the detailed health endpoint.
    pub fn models_loaded(&self) -> BTreeMap<String, bool> {
        BTreeMap::from([
            ("skin_lesion".to_string(), self.skin.model_loaded()),
            ("radiology".to_string(), self.radiology.model_loaded()),
            ("triage".to_string(), self.triage.model_loaded()),
            ("translation".to_string(), self.translation.model_loaded()),
            ("knowledge".to_string(), self.knowledge.model_loaded()),
        ])
    }
}
