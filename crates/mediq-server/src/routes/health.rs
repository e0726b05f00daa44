use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;
use sysinfo::{Disks, System};

use crate::state::AppState;
use mediq_core::{DetailedHealthReport, HealthReport, ResourceUsage};

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/detailed", get(health_detailed))
        .route("/ready", get(ready))
        .route("/live", get(live))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let report = HealthReport::ok(env!("CARGO_PKG_VERSION"), state.uptime_seconds());
    (StatusCode::OK, Json(report))
}

async fn health_detailed(State(state): State<AppState>) -> impl IntoResponse {
    let mut report = DetailedHealthReport::new(collect_resource_usage());
    for (model, loaded) in state.models_loaded() {
        report = report.with_model(model, loaded);
    }
    (StatusCode::OK, Json(report))
}

/// Readiness probe. Always succeeds: there are no downstream dependencies to
/// check while every service runs in mock mode.
async fn ready() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "ready": true })))
}

/// Liveness probe. Always succeeds.
async fn live() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "alive": true })))
}

/// Point-in-time CPU/memory/disk utilization percentages.
fn collect_resource_usage() -> ResourceUsage {
    let mut sys = System::new();
    sys.refresh_cpu_usage();
    sys.refresh_memory();

    let cpu_usage = f64::from(sys.global_cpu_info().cpu_usage());

    let total_memory = sys.total_memory();
    let memory_usage = if total_memory > 0 {
        sys.used_memory() as f64 / total_memory as f64 * 100.0
    } else {
        0.0
    };

    let disks = Disks::new_with_refreshed_list();
    let (total, available) = disks
        .list()
        .iter()
        .fold((0u64, 0u64), |(total, available), disk| {
            (
                total + disk.total_space(),
                available + disk.available_space(),
            )
        });
    let disk_usage = if total > 0 {
        (total - available) as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    ResourceUsage {
        cpu_usage,
        memory_usage,
        disk_usage,
    }
}
