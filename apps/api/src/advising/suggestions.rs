//! Scholarship suggestions from the model, the multi-record extraction path.
//!
//! The response is split on `SCHOLARSHIP N:` delimiters and each block is
//! tokenized on its own. Blocks without a NAME are dropped, never padded.

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::warn;

use crate::advising::prompts::SCHOLARSHIP_PROMPT_TEMPLATE;
use crate::extraction::{RecordSplitter, SectionGrammar};
use crate::llm_client::prompts::{fill_template, or_placeholder, LABEL_FORMAT_RULES, NOT_SPECIFIED};
use crate::llm_client::CompletionProvider;
use crate::scholarships::filter::{ScholarshipCriteria, RESULT_PAGE_SIZE};

pub const RECORD_DELIMITER: &str = "SCHOLARSHIP";
pub const LABELS: [&str; 5] = ["NAME", "DESCRIPTION", "AMOUNT", "REQUIREMENTS", "LINK"];

pub const DEFAULT_DESCRIPTION: &str = "Details not available";
pub const DEFAULT_AMOUNT: &str = "Varies";
pub const DEFAULT_REQUIREMENTS: &str = "Check website";
pub const DEFAULT_LINK: &str = "#";

static SPLITTER: Lazy<RecordSplitter> = Lazy::new(|| RecordSplitter::numbered(RECORD_DELIMITER));
static GRAMMAR: Lazy<SectionGrammar> = Lazy::new(|| SectionGrammar::new(&LABELS));

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScholarshipSuggestion {
    pub name: String,
    pub description: String,
    pub amount: String,
    pub requirements: String,
    pub link: String,
}

impl ScholarshipSuggestion {
    /// Returned alone when the model produced no usable block.
    pub fn placeholder() -> Self {
        Self {
            name: "General Merit Scholarship".to_string(),
            description: "Academic achievement recognition".to_string(),
            amount: "$1,000 - $2,500".to_string(),
            requirements: "Strong GPA and academic standing".to_string(),
            link: DEFAULT_LINK.to_string(),
        }
    }

    pub fn transport_failure() -> Self {
        Self {
            name: "Error fetching scholarships".to_string(),
            description: "Please try again later".to_string(),
            amount: "N/A".to_string(),
            requirements: "N/A".to_string(),
            link: DEFAULT_LINK.to_string(),
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

pub fn build_suggestion_prompt(criteria: &ScholarshipCriteria) -> String {
    let count = RESULT_PAGE_SIZE.to_string();
    fill_template(
        SCHOLARSHIP_PROMPT_TEMPLATE,
        &[
            ("count", count.as_str()),
            ("low_income", yes_no(criteria.low_income)),
            ("first_gen", yes_no(criteria.first_gen)),
            ("ethnicity", or_placeholder(criteria.ethnicity.as_deref(), NOT_SPECIFIED)),
            ("gender", or_placeholder(criteria.gender.as_deref(), NOT_SPECIFIED)),
            ("major", or_placeholder(criteria.major.as_deref(), NOT_SPECIFIED)),
            ("state", or_placeholder(criteria.state.as_deref(), NOT_SPECIFIED)),
            ("min_gpa", or_placeholder(criteria.min_gpa.as_deref(), NOT_SPECIFIED)),
            ("volunteer", yes_no(criteria.volunteer)),
            ("veteran", yes_no(criteria.veteran)),
            ("disability", yes_no(criteria.disability)),
            ("format_rules", LABEL_FORMAT_RULES),
        ],
    )
}

fn extract_block(block: &str) -> Option<ScholarshipSuggestion> {
    let sections = GRAMMAR.parse(block);
    let name = sections.get("NAME")?;

    Some(ScholarshipSuggestion {
        name: name.to_string(),
        description: sections.get_or("DESCRIPTION", DEFAULT_DESCRIPTION),
        amount: sections.get_or("AMOUNT", DEFAULT_AMOUNT),
        requirements: sections.get_or("REQUIREMENTS", DEFAULT_REQUIREMENTS),
        link: sections.get_or("LINK", DEFAULT_LINK),
    })
}

/// Parses a multi-record response, in source order. Never empty.
pub fn extract_suggestions(text: &str) -> Vec<ScholarshipSuggestion> {
    let suggestions: Vec<_> = SPLITTER
        .split(text)
        .into_iter()
        .filter_map(extract_block)
        .collect();

    if suggestions.is_empty() {
        vec![ScholarshipSuggestion::placeholder()]
    } else {
        suggestions
    }
}

pub async fn suggest_scholarships(
    llm: &dyn CompletionProvider,
    criteria: &ScholarshipCriteria,
) -> Vec<ScholarshipSuggestion> {
    let prompt = build_suggestion_prompt(criteria);
    match llm.send_prompt(&prompt).await {
        Ok(text) => extract_suggestions(&text),
        Err(e) => {
            warn!("Scholarship suggestions failed: {e}");
            vec![ScholarshipSuggestion::transport_failure()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedProvider;

    const THREE_BLOCKS: &str = "Here are scholarships that fit:\n\n\
SCHOLARSHIP 1:\nNAME: Alpha Award\nDESCRIPTION: For leaders.\nAMOUNT: $5,000\nREQUIREMENTS: GPA 3.0\nLINK: https://alpha.example\n\n\
SCHOLARSHIP 2:\nNAME: Beta Grant\nAMOUNT: $1,000\n\n\
SCHOLARSHIP 3:\nNAME: Gamma Fund\nDESCRIPTION: STEM majors.\nLINK: https://gamma.example";

    #[test]
    fn test_three_blocks_in_source_order() {
        let suggestions = extract_suggestions(THREE_BLOCKS);
        let names: Vec<_> = suggestions.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha Award", "Beta Grant", "Gamma Fund"]);
        assert_eq!(suggestions[0].link, "https://alpha.example");
        assert_eq!(suggestions[0].requirements, "GPA 3.0");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let suggestions = extract_suggestions(THREE_BLOCKS);
        let beta = &suggestions[1];
        assert_eq!(beta.description, DEFAULT_DESCRIPTION);
        assert_eq!(beta.amount, "$1,000");
        assert_eq!(beta.requirements, DEFAULT_REQUIREMENTS);
        assert_eq!(beta.link, DEFAULT_LINK);
    }

    #[test]
    fn test_block_without_name_is_dropped() {
        let text = "SCHOLARSHIP 1:\nNAME: Kept\nSCHOLARSHIP 2:\nDESCRIPTION: No name here\nSCHOLARSHIP 3:\nNAME: Also kept";
        let suggestions = extract_suggestions(text);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].name, "Kept");
        assert_eq!(suggestions[1].name, "Also kept");
    }

    #[test]
    fn test_no_usable_block_returns_placeholder() {
        assert_eq!(extract_suggestions("I can't list scholarships."), vec![ScholarshipSuggestion::placeholder()]);
        assert_eq!(extract_suggestions(""), vec![ScholarshipSuggestion::placeholder()]);
    }

    #[test]
    fn test_markdown_decorated_blocks() {
        let text = "**Scholarship 1:**\n**NAME:** Delta Prize\n- **AMOUNT:** $750";
        let suggestions = extract_suggestions(text);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].name, "Delta Prize");
        assert_eq!(suggestions[0].amount, "$750");
    }

    #[test]
    fn test_prompt_renders_criteria() {
        let criteria = ScholarshipCriteria {
            first_gen: true,
            major: Some("Nursing".to_string()),
            ..Default::default()
        };
        let prompt = build_suggestion_prompt(&criteria);
        assert!(prompt.contains("- First generation: Yes"));
        assert!(prompt.contains("- Low income: No"));
        assert!(prompt.contains("- Intended major: Nursing"));
        assert!(prompt.contains("- State: Not specified"));
        assert!(prompt.contains("List 15"));
        assert!(prompt.lines().any(|l| l.starts_with("SCHOLARSHIP 1:")));
        for label in LABELS {
            assert!(prompt.lines().any(|l| l.starts_with(&format!("{label}:"))));
        }
    }

    #[tokio::test]
    async fn test_transport_failure_returns_single_error_record() {
        let llm = ScriptedProvider::failing();
        let suggestions = suggest_scholarships(&llm, &ScholarshipCriteria::default()).await;
        assert_eq!(suggestions, vec![ScholarshipSuggestion::transport_failure()]);
    }
}
