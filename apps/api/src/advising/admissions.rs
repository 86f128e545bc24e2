//! Admissions prediction: student profile in, chance estimate out.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::advising::form::free_text;
use crate::advising::prompts::ADMISSIONS_PROMPT_TEMPLATE;
use crate::extraction::{find_percentage, first_paragraph, SectionGrammar};
use crate::llm_client::prompts::{fill_template, or_placeholder, LABEL_FORMAT_RULES, NOT_SPECIFIED};
use crate::llm_client::CompletionProvider;

pub const LABELS: [&str; 3] = ["CHANCE", "EXPLANATION", "RECOMMENDATIONS"];

pub const DEFAULT_CHANCE: &str = "50%";
pub const DEFAULT_EXPLANATION: &str = "No explanation was provided.";
pub const DEFAULT_RECOMMENDATIONS: &str =
    "Strengthen academics, highlight leadership and achievements, and craft compelling essays.";

pub const ERROR_CHANCE: &str = "Error occurred. Please try again.";
pub const ERROR_EXPLANATION: &str = "Unable to analyze at this time.";
pub const ERROR_RECOMMENDATIONS: &str = "Please check your information and try again.";

static GRAMMAR: Lazy<SectionGrammar> = Lazy::new(|| SectionGrammar::new(&LABELS));

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRequest {
    #[serde(default)]
    pub college: String,
    #[serde(default, deserialize_with = "free_text")]
    pub gpa: String,
    #[serde(default, deserialize_with = "free_text")]
    pub sat: String,
    #[serde(default)]
    pub extracurriculars: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub chance: String,
    pub explanation: String,
    pub recommendations: String,
}

impl PredictionResult {
    pub fn transport_failure() -> Self {
        Self {
            chance: ERROR_CHANCE.to_string(),
            explanation: ERROR_EXPLANATION.to_string(),
            recommendations: ERROR_RECOMMENDATIONS.to_string(),
        }
    }
}

pub fn build_prediction_prompt(request: &PredictionRequest) -> String {
    fill_template(
        ADMISSIONS_PROMPT_TEMPLATE,
        &[
            ("college", request.college.as_str()),
            ("gpa", request.gpa.as_str()),
            ("sat", request.sat.as_str()),
            (
                "extracurriculars",
                or_placeholder(request.extracurriculars.as_deref(), NOT_SPECIFIED),
            ),
            ("format_rules", LABEL_FORMAT_RULES),
        ],
    )
}

/// Parses a model response. Never fails; every field has a fallback.
///
/// chance: labelled percentage → any percentage in the text → `50%`.
/// explanation: labelled span → first paragraph of the response.
pub fn extract_prediction(text: &str) -> PredictionResult {
    let sections = GRAMMAR.parse(text);
    if sections.is_empty() {
        debug!("Admissions response carried none of the labels {:?}", GRAMMAR.labels());
    }

    let chance = sections
        .get("CHANCE")
        .and_then(find_percentage)
        .or_else(|| find_percentage(text))
        .unwrap_or_else(|| DEFAULT_CHANCE.to_string());

    let explanation = sections
        .get("EXPLANATION")
        .or_else(|| first_paragraph(text))
        .unwrap_or(DEFAULT_EXPLANATION)
        .to_string();

    PredictionResult {
        chance,
        explanation,
        recommendations: sections.get_or("RECOMMENDATIONS", DEFAULT_RECOMMENDATIONS),
    }
}

pub async fn predict_admissions(
    llm: &dyn CompletionProvider,
    request: &PredictionRequest,
) -> PredictionResult {
    let prompt = build_prediction_prompt(request);
    match llm.send_prompt(&prompt).await {
        Ok(text) => extract_prediction(&text),
        Err(e) => {
            warn!("Admissions prediction for '{}' failed: {e}", request.college);
            PredictionResult::transport_failure()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedProvider;

    fn request() -> PredictionRequest {
        PredictionRequest {
            college: "stanford".to_string(),
            gpa: "3.9".to_string(),
            sat: "1520".to_string(),
            extracurriculars: None,
        }
    }

    fn is_percentage(value: &str) -> bool {
        let Some(number) = value.strip_suffix('%') else {
            return false;
        };
        let mut parts = number.splitn(2, '.');
        let whole = parts.next().unwrap_or_default();
        let valid_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
        valid_digits(whole) && parts.next().map_or(true, valid_digits)
    }

    #[test]
    fn test_full_response() {
        let text = "CHANCE: 35%\nEXPLANATION: Strong scores, typical activities.\nRECOMMENDATIONS:\n1. Lead a club\n2. Publish research";
        let result = extract_prediction(text);
        assert_eq!(result.chance, "35%");
        assert_eq!(result.explanation, "Strong scores, typical activities.");
        assert_eq!(result.recommendations, "1. Lead a club\n2. Publish research");
    }

    #[test]
    fn test_truncated_response_uses_fallbacks() {
        let result = extract_prediction("CHANCE: 30%");
        assert_eq!(result.chance, "30%");
        assert_eq!(result.explanation, "CHANCE: 30%");
        assert_eq!(result.recommendations, DEFAULT_RECOMMENDATIONS);
    }

    #[test]
    fn test_unlabelled_percentage_is_secondary_match() {
        let result = extract_prediction("I estimate roughly 22 percent given the profile.");
        assert_eq!(result.chance, "22%");
        assert_eq!(result.explanation, "I estimate roughly 22 percent given the profile.");
    }

    #[test]
    fn test_no_percentage_defaults_to_fifty() {
        let result = extract_prediction("CHANCE: moderate\nEXPLANATION: Hard to say.");
        assert_eq!(result.chance, DEFAULT_CHANCE);
        assert_eq!(result.explanation, "Hard to say.");
    }

    #[test]
    fn test_blank_response_is_fully_populated() {
        let result = extract_prediction("   ");
        assert_eq!(result.chance, DEFAULT_CHANCE);
        assert_eq!(result.explanation, DEFAULT_EXPLANATION);
        assert_eq!(result.recommendations, DEFAULT_RECOMMENDATIONS);
    }

    #[test]
    fn test_chance_is_never_clamped() {
        assert_eq!(extract_prediction("CHANCE: 120%").chance, "120%");
    }

    #[test]
    fn test_chance_shape_holds_for_varied_responses() {
        let responses = [
            "CHANCE: 45%",
            "chance: 12.5 percent",
            "**CHANCE:** about 8%",
            "EXPLANATION: nothing numeric",
            "",
        ];
        for text in responses {
            let chance = extract_prediction(text).chance;
            assert!(is_percentage(&chance), "unexpected chance {chance:?} for {text:?}");
        }
    }

    #[test]
    fn test_label_order_independence() {
        let a = extract_prediction("CHANCE: 40%\nEXPLANATION: Good.\nRECOMMENDATIONS: Apply early.");
        let b = extract_prediction("RECOMMENDATIONS: Apply early.\nEXPLANATION: Good.\nCHANCE: 40%");
        assert_eq!(a, b);
    }

    #[test]
    fn test_prompt_embeds_profile_and_every_label() {
        let mut req = request();
        req.extracurriculars = Some("Robotics captain".to_string());
        let prompt = build_prediction_prompt(&req);
        assert!(prompt.contains("stanford"));
        assert!(prompt.contains("- GPA: 3.9"));
        assert!(prompt.contains("- SAT score: 1520"));
        assert!(prompt.contains("Robotics captain"));
        for label in LABELS {
            assert!(
                prompt.lines().any(|l| l.starts_with(&format!("{label}:"))),
                "missing label {label}"
            );
        }
    }

    #[test]
    fn test_prompt_marks_missing_extracurriculars() {
        let prompt = build_prediction_prompt(&request());
        assert!(prompt.contains("- Extracurriculars: Not specified"));
    }

    #[tokio::test]
    async fn test_predict_admissions_parses_reply() {
        let llm = ScriptedProvider::replying("CHANCE: 18%\nEXPLANATION: Reach school.");
        let result = predict_admissions(&llm, &request()).await;
        assert_eq!(result.chance, "18%");
        assert!(llm.last_prompt().contains("stanford"));
    }

    #[tokio::test]
    async fn test_predict_admissions_transport_failure() {
        let llm = ScriptedProvider::failing();
        let result = predict_admissions(&llm, &request()).await;
        assert_eq!(result, PredictionResult::transport_failure());
    }
}
