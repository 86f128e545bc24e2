pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advising::handlers;
use crate::scholarships::handlers::handle_find_scholarships;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Raw completion proxy
        .route("/api/chat", post(handlers::handle_chat))
        // Advising API
        .route("/api/predict", post(handlers::handle_predict))
        .route("/api/analyze-essay", post(handlers::handle_analyze_essay))
        .route("/api/resume", post(handlers::handle_resume))
        .route("/api/internship", post(handlers::handle_internship))
        // Scholarships
        .route("/api/scholarships", post(handle_find_scholarships))
        .route(
            "/api/scholarships/suggest",
            post(handlers::handle_suggest_scholarships),
        )
        .with_state(state)
}
