//! Scholarship filter: pure predicate evaluation over the catalog.
//!
//! A record matches when every specified criterion holds:
//! - each true flag requires the matching tag (`lowincome`, `firstgen`, ...)
//! - each non-empty string criterion matches a tag exactly or appears in the
//!   requirements text, case-insensitively
//! - a record's declared minimum GPA must not exceed the student's GPA
//!
//! Results keep catalog order and always fill exactly one page: at most
//! `RESULT_PAGE_SIZE` matches, padded with a generic placeholder record.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::advising::form::optional_free_text;
use crate::scholarships::catalog::ScholarshipRecord;

pub const RESULT_PAGE_SIZE: usize = 15;

pub const PLACEHOLDER_NAME: &str = "Explore More Scholarships";
pub const PLACEHOLDER_DESCRIPTION: &str =
    "New scholarships open throughout the year. Check back soon or search national scholarship databases.";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScholarshipCriteria {
    pub low_income: bool,
    pub first_gen: bool,
    pub volunteer: bool,
    pub veteran: bool,
    pub disability: bool,
    pub ethnicity: Option<String>,
    pub gender: Option<String>,
    pub major: Option<String>,
    pub state: Option<String>,
    #[serde(rename = "minGPA", alias = "minGpa", deserialize_with = "optional_free_text")]
    pub min_gpa: Option<String>,
}

impl ScholarshipCriteria {
    /// Tags required by the boolean flags that are set.
    fn required_tags(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.low_income, "lowincome"),
            (self.first_gen, "firstgen"),
            (self.volunteer, "volunteer"),
            (self.veteran, "veteran"),
            (self.disability, "disability"),
        ]
        .into_iter()
        .filter_map(|(set, tag)| set.then_some(tag))
    }

    /// Non-empty string criteria, lower-cased.
    fn text_terms(&self) -> Vec<String> {
        [&self.gender, &self.ethnicity, &self.major, &self.state]
            .into_iter()
            .filter_map(|value| specified(value))
            .map(str::to_lowercase)
            .collect()
    }

    /// The student's GPA, when specified. Unparseable input counts as 0.
    fn gpa(&self) -> Option<f64> {
        specified(&self.min_gpa).map(|raw| {
            raw.parse::<f64>()
                .ok()
                .filter(|gpa| gpa.is_finite())
                .unwrap_or(0.0)
        })
    }
}

/// The padded page plus the number of records that actually matched.
#[derive(Debug, Clone)]
pub struct ScholarshipSearch {
    pub scholarships: Vec<ScholarshipRecord>,
    pub match_count: usize,
}

pub fn find_scholarships(
    criteria: &ScholarshipCriteria,
    records: &[ScholarshipRecord],
) -> ScholarshipSearch {
    let required_tags: Vec<&str> = criteria.required_tags().collect();
    let text_terms = criteria.text_terms();
    let gpa = criteria.gpa();

    let matches: Vec<&ScholarshipRecord> = records
        .iter()
        .filter(|record| required_tags.iter().all(|tag| record.has_tag(tag)))
        .filter(|record| text_terms.iter().all(|term| matches_term(record, term)))
        .filter(|record| meets_gpa(record, gpa))
        .collect();

    let match_count = matches.len();
    let mut scholarships: Vec<ScholarshipRecord> = matches
        .into_iter()
        .take(RESULT_PAGE_SIZE)
        .cloned()
        .collect();
    scholarships.resize_with(RESULT_PAGE_SIZE, placeholder_record);

    ScholarshipSearch {
        scholarships,
        match_count,
    }
}

pub fn placeholder_record() -> ScholarshipRecord {
    ScholarshipRecord {
        name: PLACEHOLDER_NAME.to_string(),
        description: PLACEHOLDER_DESCRIPTION.to_string(),
        amount: "Varies".to_string(),
        requirements: "Varies by scholarship".to_string(),
        link: "https://studentaid.gov/understand-aid/types/scholarships".to_string(),
        tags: BTreeSet::new(),
        min_gpa: None,
    }
}

fn specified(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn matches_term(record: &ScholarshipRecord, term: &str) -> bool {
    record.has_tag(term) || record.requirements.to_lowercase().contains(term)
}

fn meets_gpa(record: &ScholarshipRecord, gpa: Option<f64>) -> bool {
    match (record.min_gpa, gpa) {
        (Some(minimum), Some(gpa)) => gpa >= minimum,
        _ => true,
    }
}
