//! Resume content generation.
//!
//! Every section falls back to something derived from the submitted form, so a
//! usable resume can always be rendered even when the model ignores the format.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::advising::prompts::RESUME_PROMPT_TEMPLATE;
use crate::extraction::SectionGrammar;
use crate::llm_client::prompts::{fill_template, or_placeholder, LABEL_FORMAT_RULES};
use crate::llm_client::CompletionProvider;

pub const LABELS: [&str; 6] = [
    "SUMMARY",
    "EDUCATION",
    "EXPERIENCE",
    "SKILLS",
    "ACHIEVEMENTS",
    "ADDITIONAL INFO",
];

pub const DEFAULT_NAME: &str = "Your Name";
pub const DEFAULT_SUMMARY: &str =
    "Motivated student with strong academic and extracurricular background.";
pub const DEFAULT_EDUCATION: &str = "Education details missing";
pub const DEFAULT_SKILLS: &str = "Leadership, Teamwork, Communication, Problem-solving";
pub const DEFAULT_ACHIEVEMENTS: &str = "Awards and recognitions";
pub const ERROR_EDUCATION: &str = "Education in progress";

static GRAMMAR: Lazy<SectionGrammar> = Lazy::new(|| SectionGrammar::new(&LABELS));

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: String,
    pub activities: Vec<String>,
    pub additional_info: Option<String>,
}

impl ResumeRequest {
    fn display_name(&self) -> String {
        or_placeholder(Some(self.name.as_str()), DEFAULT_NAME).to_string()
    }

    /// Non-empty email and phone joined with ` | `.
    fn contact_line(&self) -> String {
        [self.email.trim(), self.phone.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Activities as `• item` lines, blanks skipped.
    fn activity_bullets(&self) -> String {
        self.activities
            .iter()
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
            .map(|a| format!("• {a}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn additional_info_text(&self) -> String {
        or_placeholder(self.additional_info.as_deref(), "").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeResult {
    pub name: String,
    pub contact: String,
    pub summary: String,
    pub education: String,
    pub experience: String,
    pub skills: String,
    pub achievements: String,
    pub additional_info: String,
}

impl ResumeResult {
    pub fn transport_failure(request: &ResumeRequest) -> Self {
        let first_activity = request
            .activities
            .iter()
            .map(|a| a.trim())
            .find(|a| !a.is_empty())
            .unwrap_or("various activities");

        Self {
            name: request.display_name(),
            contact: request.contact_line(),
            summary: format!("Motivated student with experience in {first_activity}."),
            education: or_placeholder(Some(request.education.as_str()), ERROR_EDUCATION).to_string(),
            experience: request.activity_bullets(),
            skills: DEFAULT_SKILLS.to_string(),
            achievements: DEFAULT_ACHIEVEMENTS.to_string(),
            additional_info: request.additional_info_text(),
        }
    }
}

pub fn build_resume_prompt(request: &ResumeRequest) -> String {
    let activities = request.activities.join("; ");
    fill_template(
        RESUME_PROMPT_TEMPLATE,
        &[
            ("name", request.name.as_str()),
            ("email", request.email.as_str()),
            ("phone", request.phone.as_str()),
            ("education", request.education.as_str()),
            ("activities", activities.as_str()),
            (
                "additional_info",
                or_placeholder(request.additional_info.as_deref(), "None"),
            ),
            ("format_rules", LABEL_FORMAT_RULES),
        ],
    )
}

/// Parses a model response, filling misses from the request.
pub fn extract_resume(text: &str, request: &ResumeRequest) -> ResumeResult {
    let sections = GRAMMAR.parse(text);
    if sections.is_empty() {
        debug!("Resume response carried none of the labels {:?}", GRAMMAR.labels());
    }

    let additional_info = sections
        .get("ADDITIONAL INFO")
        .filter(|info| !info.eq_ignore_ascii_case("none"))
        .map(str::to_string)
        .unwrap_or_else(|| request.additional_info_text());

    ResumeResult {
        name: request.display_name(),
        contact: request.contact_line(),
        summary: sections.get_or("SUMMARY", DEFAULT_SUMMARY),
        education: sections.get("EDUCATION").map(str::to_string).unwrap_or_else(|| {
            or_placeholder(Some(request.education.as_str()), DEFAULT_EDUCATION).to_string()
        }),
        experience: sections
            .get("EXPERIENCE")
            .map(str::to_string)
            .unwrap_or_else(|| request.activity_bullets()),
        skills: sections.get_or("SKILLS", DEFAULT_SKILLS),
        achievements: sections.get_or("ACHIEVEMENTS", DEFAULT_ACHIEVEMENTS),
        additional_info,
    }
}

pub async fn generate_resume_content(
    llm: &dyn CompletionProvider,
    request: &ResumeRequest,
) -> ResumeResult {
    let prompt = build_resume_prompt(request);
    match llm.send_prompt(&prompt).await {
        Ok(text) => extract_resume(&text, request),
        Err(e) => {
            warn!(
                "Resume generation failed for {} activities: {e}",
                request.activities.len()
            );
            ResumeResult::transport_failure(request)
        }
    }
}
