//! Route groups composed into the application router by `server::build_app`.

pub mod analysis;
pub mod health;
pub mod reports;

pub use analysis::analysis_routes;
pub use health::health_routes;
