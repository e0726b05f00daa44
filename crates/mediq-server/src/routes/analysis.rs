use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    routing::post,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;
use mediq_analysis::{KnowledgeAnswer, RadiologyFindings, TranslationOutput, TriageAssessment};
use mediq_core::AnalysisResult;

pub fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/skin-lesion", post(analyze_skin_lesion))
        .route("/radiology", post(analyze_radiology))
        .route("/triage", post(assess_triage))
        .route("/translate", post(translate))
        .route("/knowledge", post(query_knowledge))
}

/// Raw image bytes in, analysis result out.
async fn analyze_skin_lesion(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalysisResult>, ApiError> {
    let result = state.skin.analyze(&body).await?;
    tracing::info!(
        prediction = %result.prediction,
        confidence = result.confidence,
        risk = %result.risk_level,
        "skin-lesion analysis completed"
    );
    Ok(Json(result))
}

async fn analyze_radiology(
    State(state): State<AppState>,
    Json(context): Json<Value>,
) -> Result<Json<RadiologyFindings>, ApiError> {
    let findings = state.radiology.analyze(&context).await?;
    Ok(Json(findings))
}

async fn assess_triage(
    State(state): State<AppState>,
    Json(context): Json<Value>,
) -> Result<Json<TriageAssessment>, ApiError> {
    let assessment = state.triage.assess(&context).await?;
    Ok(Json(assessment))
}

#[derive(Debug, Deserialize)]
struct TranslateRequest {
    text: String,
    #[serde(default = "default_target_language")]
    target_language: String,
}

fn default_target_language() -> String {
    "en".into()
}

async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslationOutput>, ApiError> {
    let output = state
        .translation
        .translate(&request.text, &request.target_language)
        .await?;
    Ok(Json(output))
}

#[derive(Debug, Deserialize)]
struct KnowledgeRequest {
    question: String,
}

async fn query_knowledge(
    State(state): State<AppState>,
    Json(request): Json<KnowledgeRequest>,
) -> Result<Json<KnowledgeAnswer>, ApiError> {
    let answer = state.knowledge.query(&request.question).await?;
    Ok(Json(answer))
}
