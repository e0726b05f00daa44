use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::{AnalysisError, Result};
use crate::traits::RadiologyAnalysis;
use crate::types::RadiologyFindings;

/// Mock radiology analysis service. Returns a fixed findings map.
pub struct MockRadiologyService;

impl MockRadiologyService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockRadiologyService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RadiologyAnalysis for MockRadiologyService {
    async fn analyze(&self, context: &Value) -> Result<RadiologyFindings> {
        if !context.is_object() {
            return Err(AnalysisError::invalid_context(
                "context must be a JSON object",
            ));
        }
        tracing::debug!(keys = context.as_object().map(|m| m.len()), "radiology context received");

        // TODO: run the radiology model over the referenced study instead of
        // returning canned findings.
        let mut findings = BTreeMap::new();
        findings.insert("Normal".to_string(), 0.72);
        findings.insert("Pneumonia".to_string(), 0.15);
        findings.insert("Pleural effusion".to_string(), 0.08);

        Ok(RadiologyFindings {
            findings,
            impression: "No acute cardiopulmonary findings identified".to_string(),
        })
    }

    fn model_loaded(&self) -> bool {
        false
    }
}
