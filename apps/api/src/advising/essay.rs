//! Essay analysis: a 1 to 10 score plus written feedback.
//!
//! `score` is `None` only when the model call itself failed, so callers can
//! tell "could not analyze" apart from a low score.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::advising::prompts::ESSAY_PROMPT_TEMPLATE;
use crate::extraction::{find_out_of_ten, first_integer, SectionGrammar};
use crate::llm_client::prompts::{fill_template, LABEL_FORMAT_RULES};
use crate::llm_client::CompletionProvider;

pub const LABELS: [&str; 2] = ["SCORE", "FEEDBACK"];

pub const DEFAULT_SCORE: u32 = 7;
pub const DEFAULT_FEEDBACK: &str = "No feedback was provided.";
pub const ERROR_FEEDBACK: &str = "Error analyzing essay. Please try again later.";

static GRAMMAR: Lazy<SectionGrammar> = Lazy::new(|| SectionGrammar::new(&LABELS));

#[derive(Debug, Clone, Deserialize)]
pub struct EssayRequest {
    #[serde(default)]
    pub essay: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EssayAnalysisResult {
    pub score: Option<u32>,
    pub feedback: String,
}

impl EssayAnalysisResult {
    pub fn transport_failure() -> Self {
        Self {
            score: None,
            feedback: ERROR_FEEDBACK.to_string(),
        }
    }
}

pub fn build_essay_prompt(essay: &str) -> String {
    fill_template(
        ESSAY_PROMPT_TEMPLATE,
        &[("essay", essay), ("format_rules", LABEL_FORMAT_RULES)],
    )
}

/// Parses a model response. The score is taken as written (no clamping).
pub fn extract_essay_analysis(text: &str) -> EssayAnalysisResult {
    let sections = GRAMMAR.parse(text);
    if sections.is_empty() {
        debug!("Essay response carried none of the labels {:?}", GRAMMAR.labels());
    }

    let score = sections
        .get("SCORE")
        .and_then(first_integer)
        .or_else(|| find_out_of_ten(text))
        .unwrap_or(DEFAULT_SCORE);

    let feedback = sections
        .get("FEEDBACK")
        .or_else(|| Some(text.trim()).filter(|t| !t.is_empty()))
        .unwrap_or(DEFAULT_FEEDBACK)
        .to_string();

    EssayAnalysisResult {
        score: Some(score),
        feedback,
    }
}

pub async fn analyze_essay(llm: &dyn CompletionProvider, essay: &str) -> EssayAnalysisResult {
    let prompt = build_essay_prompt(essay);
    match llm.send_prompt(&prompt).await {
        Ok(text) => extract_essay_analysis(&text),
        Err(e) => {
            warn!("Essay analysis failed ({} chars): {e}", essay.len());
            EssayAnalysisResult::transport_failure()
        }
    }
}
