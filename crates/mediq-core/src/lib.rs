pub mod analysis;
pub mod error;
pub mod monitoring;
pub mod risk;
pub mod time;

pub use analysis::AnalysisResult;
pub use error::{CoreError, Result};
pub use monitoring::{DetailedHealthReport, HealthReport, ResourceUsage};
pub use risk::{HIGH_RISK_LABELS, RiskLevel, derive_risk, is_high_risk_label};
pub use time::{UtcTimestamp, now_utc};
