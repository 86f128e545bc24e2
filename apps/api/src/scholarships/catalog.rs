//! The static scholarship dataset the filter runs over.
//!
//! Loaded once at startup, either from the dataset compiled into the binary or
//! from `SCHOLARSHIPS_PATH`. Never mutated afterwards.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

static BUILTIN_DATASET: &str = include_str!("../../data/scholarships.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScholarshipRecord {
    pub name: String,
    #[serde(default, alias = "overview")]
    pub description: String,
    #[serde(default)]
    pub amount: String,
    /// Free-text eligibility description; string criteria also match here.
    #[serde(default, alias = "eligibility")]
    pub requirements: String,
    #[serde(default)]
    pub link: String,
    /// Lower-cased at load time.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(
        default,
        rename = "minGPA",
        alias = "minGpa",
        alias = "min_gpa",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_gpa: Option<f64>,
}

impl ScholarshipRecord {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

#[derive(Debug, Clone)]
pub struct ScholarshipCatalog {
    records: Vec<ScholarshipRecord>,
}

impl ScholarshipCatalog {
    /// Loads from `path` when given, otherwise the built-in dataset.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).with_context(|| {
                    format!("Failed to read scholarship dataset {}", path.display())
                })?;
                Self::from_json(&raw)
                    .with_context(|| format!("Invalid scholarship dataset {}", path.display()))
            }
            None => Self::builtin(),
        }
    }

    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_DATASET).context("Invalid built-in scholarship dataset")
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let mut records: Vec<ScholarshipRecord> = serde_json::from_str(raw)?;
        for record in &mut records {
            record.tags = record
                .tags
                .iter()
                .map(|tag| tag.trim().to_lowercase())
                .filter(|tag| !tag.is_empty())
                .collect();
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[ScholarshipRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_builtin_dataset_parses() {
        let catalog = ScholarshipCatalog::builtin().unwrap();
        assert!(catalog.len() >= 15, "built-in dataset should fill a page");
        assert!(catalog.records().iter().all(|r| !r.name.is_empty()));
    }

    #[test]
    fn test_tags_are_normalized_and_aliases_accepted() {
        let raw = r#"[{
            "name": "Test Award",
            "overview": "For testers",
            "eligibility": "Open to residents of Ohio",
            "tags": ["  FirstGen ", "Ohio", ""],
            "minGpa": 3.2
        }]"#;
        let catalog = ScholarshipCatalog::from_json(raw).unwrap();
        let record = &catalog.records()[0];
        assert_eq!(record.description, "For testers");
        assert_eq!(record.requirements, "Open to residents of Ohio");
        assert!(record.has_tag("firstgen"));
        assert!(record.has_tag("ohio"));
        assert_eq!(record.tags.len(), 2);
        assert_eq!(record.min_gpa, Some(3.2));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "File Award", "tags": ["veteran"]}}]"#).unwrap();
        let catalog = ScholarshipCatalog::load(Some(file.path())).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].name, "File Award");
        assert_eq!(catalog.records()[0].min_gpa, None);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = ScholarshipCatalog::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Invalid scholarship dataset"));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let err = ScholarshipCatalog::load(Some(Path::new("/nonexistent/scholarships.json")))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read scholarship dataset"));
    }

    #[test]
    fn test_min_gpa_serializes_under_ui_name() {
        let raw = r#"[{"name": "A", "minGPA": 3.0}, {"name": "B"}]"#;
        let catalog = ScholarshipCatalog::from_json(raw).unwrap();
        let a = serde_json::to_value(&catalog.records()[0]).unwrap();
        let b = serde_json::to_value(&catalog.records()[1]).unwrap();
        assert_eq!(a["minGPA"], 3.0);
        assert!(b.get("minGPA").is_none());
    }
}
