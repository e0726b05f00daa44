//! Startup environment checks.
//!
//! Absent or placeholder integration keys are logged as warnings and never
//! block request handling: every service has a mock fallback.

use crate::config::IntegrationsConfig;

/// Placeholder values commonly left in .env templates.
const PLACEHOLDER_VALUES: &[&str] = &["changeme", "your-api-key-here", "todo", "xxx"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    Configured,
    Placeholder,
    Missing,
}

impl std::fmt::Display for KeyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configured => write!(f, "configured"),
            Self::Placeholder => write!(f, "placeholder"),
            Self::Missing => write!(f, "missing"),
        }
    }
}

pub fn key_status(value: Option<&str>) -> KeyStatus {
    match value {
        None => KeyStatus::Missing,
        Some(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty()
                || PLACEHOLDER_VALUES
                    .iter()
                    .any(|p| trimmed.eq_ignore_ascii_case(p))
            {
                KeyStatus::Placeholder
            } else {
                KeyStatus::Configured
            }
        }
    }
}

/// Check every integration key and warn for anything not usable. Returns the
/// number of configured keys.
pub fn check_integrations(integrations: &IntegrationsConfig) -> usize {
    let keys = [
        ("openai_api_key", integrations.openai_api_key.as_deref()),
        ("deepl_api_key", integrations.deepl_api_key.as_deref()),
        ("rxnorm_api_key", integrations.rxnorm_api_key.as_deref()),
    ];

    let mut configured = 0;
    for (name, value) in keys {
        match key_status(value) {
            KeyStatus::Configured => {
                configured += 1;
                tracing::debug!(key = name, "integration key configured");
            }
            status => {
                tracing::warn!(
                    key = name,
                    status = %status,
                    "integration key not usable, the affected service stays in mock mode"
                );
            }
        }
    }
    configured
}
