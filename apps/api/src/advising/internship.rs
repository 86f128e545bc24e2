//! Internship posting analysis. Same extraction contract as admissions:
//! a labelled percentage with a looser secondary match, prose sections with
//! fixed fallbacks.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::advising::prompts::INTERNSHIP_PROMPT_TEMPLATE;
use crate::extraction::{find_percentage, first_paragraph, SectionGrammar};
use crate::llm_client::prompts::{fill_template, or_placeholder, LABEL_FORMAT_RULES, NOT_SPECIFIED};
use crate::llm_client::CompletionProvider;

pub const LABELS: [&str; 4] = ["FIT", "SUMMARY", "REQUIREMENTS", "TIPS"];

pub const DEFAULT_FIT: &str = "50%";
pub const DEFAULT_SUMMARY: &str = "No summary was provided.";
pub const DEFAULT_REQUIREMENTS: &str = "Review the posting for required qualifications.";
pub const DEFAULT_TIPS: &str = "Tailor your resume to the posting and apply early.";

pub const ERROR_FIT: &str = "Error occurred. Please try again.";
pub const ERROR_SUMMARY: &str = "Unable to analyze this posting at this time.";
pub const ERROR_DETAILS: &str = "Please check the posting text and try again.";

static GRAMMAR: Lazy<SectionGrammar> = Lazy::new(|| SectionGrammar::new(&LABELS));

#[derive(Debug, Clone, Deserialize)]
pub struct InternshipRequest {
    #[serde(default)]
    pub posting: String,
    #[serde(default)]
    pub background: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InternshipAnalysis {
    pub fit: String,
    pub summary: String,
    pub requirements: String,
    pub tips: String,
}

impl InternshipAnalysis {
    pub fn transport_failure() -> Self {
        Self {
            fit: ERROR_FIT.to_string(),
            summary: ERROR_SUMMARY.to_string(),
            requirements: ERROR_DETAILS.to_string(),
            tips: ERROR_DETAILS.to_string(),
        }
    }
}

pub fn build_internship_prompt(request: &InternshipRequest) -> String {
    fill_template(
        INTERNSHIP_PROMPT_TEMPLATE,
        &[
            ("posting", request.posting.as_str()),
            (
                "background",
                or_placeholder(request.background.as_deref(), NOT_SPECIFIED),
            ),
            ("format_rules", LABEL_FORMAT_RULES),
        ],
    )
}

pub fn extract_internship_analysis(text: &str) -> InternshipAnalysis {
    let sections = GRAMMAR.parse(text);
    if sections.is_empty() {
        debug!("Internship response carried none of the labels {:?}", GRAMMAR.labels());
    }

    let fit = sections
        .get("FIT")
        .and_then(find_percentage)
        .or_else(|| find_percentage(text))
        .unwrap_or_else(|| DEFAULT_FIT.to_string());

    let summary = sections
        .get("SUMMARY")
        .or_else(|| first_paragraph(text))
        .unwrap_or(DEFAULT_SUMMARY)
        .to_string();

    InternshipAnalysis {
        fit,
        summary,
        requirements: sections.get_or("REQUIREMENTS", DEFAULT_REQUIREMENTS),
        tips: sections.get_or("TIPS", DEFAULT_TIPS),
    }
}

pub async fn analyze_internship(
    llm: &dyn CompletionProvider,
    request: &InternshipRequest,
) -> InternshipAnalysis {
    let prompt = build_internship_prompt(request);
    match llm.send_prompt(&prompt).await {
        Ok(text) => extract_internship_analysis(&text),
        Err(e) => {
            warn!("Internship analysis failed: {e}");
            InternshipAnalysis::transport_failure()
        }
    }
}
