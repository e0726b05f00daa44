use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// Labels treated as high risk when deriving a risk level.
///
/// This is a stub vocabulary for the mock classifier, not clinical guidance.
/// A model-backed service is expected to ship its own label set.
pub const HIGH_RISK_LABELS: &[&str] = &["Melanoma", "Basal cell carcinoma", "Actinic keratosis"];

/// Risk level derived from a predicted label and a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Moderate => write!(f, "moderate"),
            Self::High => write!(f, "high"),
        }
    }
}

impl FromStr for RiskLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            other => Err(CoreError::invalid_risk_level(other)),
        }
    }
}

/// Whether a predicted label belongs to the fixed high-risk set.
pub fn is_high_risk_label(label: &str) -> bool {
    HIGH_RISK_LABELS.iter().any(|l| l.eq_ignore_ascii_case(label))
}

/// Derive a risk level from a predicted label and a confidence in [0, 1].
///
/// High-risk labels map to `High` when confidence is above 0.7 and `Moderate`
/// otherwise. Any other label maps to `Low` when confidence is above 0.8 and
/// `Moderate` otherwise.
pub fn derive_risk(label: &str, confidence: f64) -> RiskLevel {
    if is_high_risk_label(label) {
        if confidence > 0.7 {
            RiskLevel::High
        } else {
            RiskLevel::Moderate
        }
    } else if confidence > 0.8 {
        RiskLevel::Low
    } else {
        RiskLevel::Moderate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_risk_label_above_threshold() {
        assert_eq!(derive_risk("Melanoma", 0.71), RiskLevel::High);
        assert_eq!(derive_risk("Melanoma", 0.9), RiskLevel::High);
        assert_eq!(derive_risk("Melanoma", 1.0), RiskLevel::High);
    }

    #[test]
    fn test_high_risk_label_at_or_below_threshold() {
        assert_eq!(derive_risk("Melanoma", 0.7), RiskLevel::Moderate);
        assert_eq!(derive_risk("Melanoma", 0.5), RiskLevel::Moderate);
        assert_eq!(derive_risk("Melanoma", 0.0), RiskLevel::Moderate);
    }

    #[test]
    fn test_benign_label_above_threshold() {
        assert_eq!(derive_risk("Benign keratosis", 0.81), RiskLevel::Low);
        assert_eq!(derive_risk("Benign keratosis", 0.85), RiskLevel::Low);
        assert_eq!(derive_risk("Nevus", 1.0), RiskLevel::Low);
    }

    #[test]
    fn test_benign_label_at_or_below_threshold() {
        assert_eq!(derive_risk("Benign keratosis", 0.8), RiskLevel::Moderate);
        assert_eq!(derive_risk("Nevus", 0.3), RiskLevel::Moderate);
        assert_eq!(derive_risk("Nevus", 0.0), RiskLevel::Moderate);
    }

    #[test]
    fn test_every_high_risk_label_uses_high_risk_branch() {
        for label in HIGH_RISK_LABELS {
            assert_eq!(derive_risk(label, 0.95), RiskLevel::High, "label {label}");
            assert_eq!(
                derive_risk(label, 0.6),
                RiskLevel::Moderate,
                "label {label}"
            );
        }
    }

    #[test]
    fn test_label_matching_is_case_insensitive() {
        assert!(is_high_risk_label("melanoma"));
        assert!(is_high_risk_label("MELANOMA"));
        assert!(!is_high_risk_label("Benign keratosis"));
    }

    #[test]
    fn test_threshold_sweep_matches_contract() {
        // risk(L_high, c) = High iff c > 0.7; risk(L_other, c) = Low iff c > 0.8
        for i in 0..=100 {
            let c = f64::from(i) / 100.0;
            let high = derive_risk("Melanoma", c);
            if c > 0.7 {
                assert_eq!(high, RiskLevel::High, "c = {c}");
            } else {
                assert_eq!(high, RiskLevel::Moderate, "c = {c}");
            }

            let benign = derive_risk("Benign keratosis", c);
            if c > 0.8 {
                assert_eq!(benign, RiskLevel::Low, "c = {c}");
            } else {
                assert_eq!(benign, RiskLevel::Moderate, "c = {c}");
            }
        }
    }

    #[test]
    fn test_risk_level_serialization() {
        assert_eq!(serde_json::to_string(&RiskLevel::Low).unwrap(), "\"low\"");
        assert_eq!(
            serde_json::to_string(&RiskLevel::Moderate).unwrap(),
            "\"moderate\""
        );
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"high\"");
    }

    #[test]
    fn test_risk_level_from_str() {
        assert_eq!(RiskLevel::from_str("low").unwrap(), RiskLevel::Low);
        assert_eq!(RiskLevel::from_str("Moderate").unwrap(), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_str("HIGH").unwrap(), RiskLevel::High);
        assert!(RiskLevel::from_str("severe").is_err());
    }

    #[test]
    fn test_risk_level_display() {
        assert_eq!(RiskLevel::Low.to_string(), "low");
        assert_eq!(RiskLevel::Moderate.to_string(), "moderate");
        assert_eq!(RiskLevel::High.to_string(), "high");
    }
}
