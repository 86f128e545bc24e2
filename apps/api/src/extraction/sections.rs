//! Section tokenizer for label-anchored model output.
//!
//! The prompts ask the model to answer with uppercase labels, one per line:
//!
//! ```text
//! CHANCE: 45%
//! EXPLANATION: Strong GPA, thin extracurricular record...
//! RECOMMENDATIONS:
//! 1. ...
//! ```
//!
//! A `SectionGrammar` knows the labels of one answer shape and splits a
//! response on *recognized* label boundaries only. A boundary is a line that
//! opens (after whitespace or markdown decoration such as `**`, `##`, `-`)
//! with one of the labels, case-insensitively, followed by a colon. Unknown
//! labels and label-like text in the middle of a line never end a section.
//!
//! Label order in the response does not matter: every span runs from its own
//! boundary to the next recognized boundary or end of text.

use regex::Regex;

/// Leading characters tolerated before a label on its line.
pub(crate) const LINE_DECORATION: &str = r"[ \t>#*_\-]*";
/// Emphasis tolerated between a label and its colon, and after the colon.
pub(crate) const LABEL_EMPHASIS: &str = r"[ \t*_]*";

/// The set of labels for one response shape, compiled into a boundary matcher.
#[derive(Debug)]
pub struct SectionGrammar {
    labels: Vec<&'static str>,
    boundary: Regex,
}

impl SectionGrammar {
    /// Compiles a grammar for the given labels (e.g. `["SCORE", "FEEDBACK"]`).
    pub fn new(labels: &[&'static str]) -> Self {
        let mut alternatives = labels.to_vec();
        // Longest first so a multi-word label is never shadowed by a shorter one.
        alternatives.sort_by_key(|label| std::cmp::Reverse(label.len()));
        let alternation = alternatives
            .iter()
            .map(|label| regex::escape(label))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = format!(
            r"(?im)^{LINE_DECORATION}({alternation}){LABEL_EMPHASIS}:{LABEL_EMPHASIS}"
        );

        Self {
            labels: labels.to_vec(),
            boundary: Regex::new(&pattern).expect("section label regex is valid"),
        }
    }

    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    /// Splits `text` into labelled spans. Never fails: a response without any
    /// recognized label simply yields an empty `Sections`.
    pub fn parse<'t>(&self, text: &'t str) -> Sections<'t> {
        let boundaries: Vec<(&'static str, usize, usize)> = self
            .boundary
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let matched = caps.get(1)?.as_str();
                let label = self
                    .labels
                    .iter()
                    .copied()
                    .find(|label| label.eq_ignore_ascii_case(matched))?;
                Some((label, whole.start(), whole.end()))
            })
            .collect();

        let spans = boundaries
            .iter()
            .enumerate()
            .map(|(i, &(label, _, content_start))| {
                let content_end = boundaries
                    .get(i + 1)
                    .map(|&(_, next_start, _)| next_start)
                    .unwrap_or(text.len());
                (label, text[content_start..content_end].trim())
            })
            .collect();

        Sections { spans }
    }
}

/// Labelled spans of one response, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Sections<'t> {
    spans: Vec<(&'static str, &'t str)>,
}

impl<'t> Sections<'t> {
    /// Returns the first non-empty span captured for `label`.
    pub fn get(&self, label: &str) -> Option<&'t str> {
        self.spans
            .iter()
            .find(|(l, span)| l.eq_ignore_ascii_case(label) && !span.is_empty())
            .map(|&(_, span)| span)
    }

    /// Like [`Sections::get`], falling back to `default` on a miss.
    pub fn get_or(&self, label: &str, default: &str) -> String {
        self.get(label).unwrap_or(default).to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}
