//! Axum route handlers for the advising API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::advising::admissions::{predict_admissions, PredictionRequest, PredictionResult};
use crate::advising::essay::{analyze_essay, EssayAnalysisResult, EssayRequest};
use crate::advising::internship::{analyze_internship, InternshipAnalysis, InternshipRequest};
use crate::advising::resume::{generate_resume_content, ResumeRequest, ResumeResult};
use crate::advising::suggestions::{suggest_scholarships, ScholarshipSuggestion};
use crate::errors::AppError;
use crate::scholarships::filter::ScholarshipCriteria;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub result: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/chat
///
/// Raw completion proxy. The only endpoint that reports transport failures as errors.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let prompt = request
        .prompt
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| AppError::Validation("No prompt provided".to_string()))?;

    let result = state
        .llm
        .send_prompt(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Chat completion failed: {e}")))?;

    Ok(Json(ChatResponse { result }))
}

/// POST /api/predict
pub async fn handle_predict(
    State(state): State<AppState>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionResult>, AppError> {
    if request.college.trim().is_empty() {
        return Err(AppError::Validation("college cannot be empty".to_string()));
    }

    Ok(Json(predict_admissions(state.llm.as_ref(), &request).await))
}

/// POST /api/analyze-essay
pub async fn handle_analyze_essay(
    State(state): State<AppState>,
    Json(request): Json<EssayRequest>,
) -> Result<Json<EssayAnalysisResult>, AppError> {
    if request.essay.trim().is_empty() {
        return Err(AppError::Validation("essay cannot be empty".to_string()));
    }

    Ok(Json(analyze_essay(state.llm.as_ref(), &request.essay).await))
}

/// POST /api/resume
pub async fn handle_resume(
    State(state): State<AppState>,
    Json(request): Json<ResumeRequest>,
) -> Json<ResumeResult> {
    Json(generate_resume_content(state.llm.as_ref(), &request).await)
}

/// POST /api/internship
pub async fn handle_internship(
    State(state): State<AppState>,
    Json(request): Json<InternshipRequest>,
) -> Result<Json<InternshipAnalysis>, AppError> {
    if request.posting.trim().is_empty() {
        return Err(AppError::Validation("posting cannot be empty".to_string()));
    }

    Ok(Json(analyze_internship(state.llm.as_ref(), &request).await))
}

/// POST /api/scholarships/suggest
///
/// Model-generated scholarship list; complements the catalog search.
pub async fn handle_suggest_scholarships(
    State(state): State<AppState>,
    Json(criteria): Json<ScholarshipCriteria>,
) -> Json<Vec<ScholarshipSuggestion>> {
    Json(suggest_scholarships(state.llm.as_ref(), &criteria).await)
}
