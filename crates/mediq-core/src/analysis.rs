use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CoreError, Result};
use crate::risk::{RiskLevel, derive_risk};

/// Result of one analysis request.
///
/// Created per request and discarded after response serialization; there is
/// no identity, storage, or lifecycle beyond the HTTP request. Probabilities
/// in `predictions` need not sum to 1 for mock services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The top predicted label.
    pub prediction: String,
    /// Label → probability mapping for every condition the service scores.
    pub predictions: BTreeMap<String, f64>,
    /// Confidence in the top prediction, within [0, 1].
    pub confidence: f64,
    /// Risk level derived from the prediction and confidence.
    pub risk_level: RiskLevel,
    /// Ordered recommendation strings.
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    /// Build a result from a predicted label and confidence, deriving the
    /// risk level from the pair.
    pub fn new(prediction: impl Into<String>, confidence: f64) -> Self {
        let prediction = prediction.into();
        let risk_level = derive_risk(&prediction, confidence);
        Self {
            prediction,
            predictions: BTreeMap::new(),
            confidence,
            risk_level,
            recommendations: Vec::new(),
        }
    }

    pub fn with_probability(mut self, label: impl Into<String>, probability: f64) -> Self {
        self.predictions.insert(label.into(), probability);
        self
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendations.push(recommendation.into());
        self
    }

    pub fn with_recommendations<I, S>(mut self, recommendations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recommendations
            .extend(recommendations.into_iter().map(Into::into));
        self
    }

    /// Validate field-level invariants: confidence and every probability
    /// within [0, 1], non-empty prediction.
    pub fn validate(&self) -> Result<()> {
        if self.prediction.is_empty() {
            return Err(CoreError::invalid_result("prediction must not be empty"));
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(CoreError::InvalidConfidence(self.confidence));
        }
        for (label, p) in &self.predictions {
            if !(0.0..=1.0).contains(p) {
                return Err(CoreError::invalid_result(format!(
                    "probability for '{label}' is {p}, outside [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_risk_level() {
        let result = AnalysisResult::new("Benign keratosis", 0.85);
        assert_eq!(result.risk_level, RiskLevel::Low);

        let result = AnalysisResult::new("Melanoma", 0.85);
        assert_eq!(result.risk_level, RiskLevel::High);

        let result = AnalysisResult::new("Melanoma", 0.6);
        assert_eq!(result.risk_level, RiskLevel::Moderate);
    }

    #[test]
    fn test_builder_methods() {
        let result = AnalysisResult::new("Benign keratosis", 0.85)
            .with_probability("Benign keratosis", 0.85)
            .with_probability("Melanoma", 0.05)
            .with_recommendation("Monitor for changes")
            .with_recommendation("Use sun protection");

        assert_eq!(result.predictions.len(), 2);
        assert_eq!(result.predictions["Melanoma"], 0.05);
        assert_eq!(result.recommendations.len(), 2);
        assert_eq!(result.recommendations[0], "Monitor for changes");
    }

    #[test]
    fn test_with_recommendations_preserves_order() {
        let result = AnalysisResult::new("Nevus", 0.9).with_recommendations([
            "first",
            "second",
            "third",
        ]);
        assert_eq!(result.recommendations, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_validate_accepts_well_formed_result() {
        let result = AnalysisResult::new("Benign keratosis", 0.85)
            .with_probability("Benign keratosis", 0.85)
            .with_recommendation("Monitor for changes");
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_confidence() {
        let mut result = AnalysisResult::new("Nevus", 0.5);
        result.confidence = 1.5;
        assert!(matches!(
            result.validate(),
            Err(CoreError::InvalidConfidence(_))
        ));

        result.confidence = -0.1;
        assert!(result.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_prediction() {
        let mut result = AnalysisResult::new("Nevus", 0.5);
        result.prediction.clear();
        assert!(result.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_probability() {
        let result = AnalysisResult::new("Nevus", 0.5).with_probability("Nevus", 1.2);
        assert!(result.validate().is_err());
    }

    #[test]
    fn test_serialization_shape() {
        let result = AnalysisResult::new("Benign keratosis", 0.85)
            .with_probability("Benign keratosis", 0.85)
            .with_recommendation("Monitor for changes");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["prediction"], "Benign keratosis");
        assert_eq!(json["confidence"], 0.85);
        assert_eq!(json["risk_level"], "low");
        assert!(json["predictions"].is_object());
        assert!(json["recommendations"].is_array());
    }

    #[test]
    fn test_roundtrip() {
        let original = AnalysisResult::new("Melanoma", 0.9)
            .with_probability("Melanoma", 0.9)
            .with_recommendation("Consult a dermatologist urgently");
        let serialized = serde_json::to_string(&original).unwrap();
        let deserialized: AnalysisResult = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }
}
