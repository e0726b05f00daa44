use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::time::{UtcTimestamp, now_utc};

/// Point-in-time OS resource percentages. Recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceUsage {
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub disk_usage: f64,
}

/// Basic health payload for `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: UtcTimestamp,
    pub version: String,
    pub uptime_seconds: u64,
}

impl HealthReport {
    pub fn ok(version: impl Into<String>, uptime_seconds: u64) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: now_utc(),
            version: version.into(),
            uptime_seconds,
        }
    }
}

/// Detailed health payload for `GET /health/detailed`.
///
/// `models_loaded` reports per-model load state; every entry is `false` while
/// the analysis services run in mock mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedHealthReport {
    pub status: String,
    pub timestamp: UtcTimestamp,
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub disk_usage: f64,
    pub models_loaded: BTreeMap<String, bool>,
}

impl DetailedHealthReport {
    pub fn new(usage: ResourceUsage) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: now_utc(),
            cpu_usage: usage.cpu_usage,
            memory_usage: usage.memory_usage,
            disk_usage: usage.disk_usage,
            models_loaded: BTreeMap::new(),
        }
    }

    pub fn with_model(mut self, name: impl Into<String>, loaded: bool) -> Self {
        self.models_loaded.insert(name.into(), loaded);
        self
    }
}
