pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod server;
pub mod startup;
pub mod state;

pub use config::{AnalysisConfig, AppConfig, IntegrationsConfig, LoggingConfig, ServerConfig};
pub use error::ApiError;
pub use observability::{apply_logging_level, init_tracing};
pub use server::{MediqServer, ServerBuilder, build_app};
pub use startup::{KeyStatus, check_integrations, key_status};
pub use state::AppState;
