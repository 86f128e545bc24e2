//! Splits multi-record responses (`SCHOLARSHIP 1:`, `SCHOLARSHIP 2:`, ...)
//! into per-record blocks. Each block is then tokenized on its own.

use regex::Regex;

use crate::extraction::sections::{LABEL_EMPHASIS, LINE_DECORATION};

#[derive(Debug)]
pub struct RecordSplitter {
    delimiter: Regex,
}

impl RecordSplitter {
    /// Delimiter of the form `<KEYWORD> <N>:` at the start of a line,
    /// case-insensitive, with the same decoration tolerance as section labels.
    pub fn numbered(keyword: &str) -> Self {
        let pattern = format!(
            r"(?im)^{LINE_DECORATION}{}[ \t]*\d+{LABEL_EMPHASIS}:{LABEL_EMPHASIS}",
            regex::escape(keyword)
        );
        Self {
            delimiter: Regex::new(&pattern).expect("record delimiter regex is valid"),
        }
    }

    /// Returns the non-blank blocks in source order. Text before the first
    /// delimiter is kept as its own block; a response without any delimiter
    /// is a single block.
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.delimiter
            .split(text)
            .map(str::trim)
            .filter(|block| !block.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_numbered_blocks_in_order() {
        let splitter = RecordSplitter::numbered("SCHOLARSHIP");
        let text = "SCHOLARSHIP 1:\nNAME: A\nSCHOLARSHIP 2:\nNAME: B\nscholarship 3:\nNAME: C";
        assert_eq!(splitter.split(text), vec!["NAME: A", "NAME: B", "NAME: C"]);
    }

    #[test]
    fn test_preamble_is_its_own_block() {
        let splitter = RecordSplitter::numbered("SCHOLARSHIP");
        let blocks = splitter.split("Here are some options:\n\n**SCHOLARSHIP 1:**\nNAME: A");
        assert_eq!(blocks, vec!["Here are some options:", "NAME: A"]);
    }

    #[test]
    fn test_no_delimiter_is_single_block() {
        let splitter = RecordSplitter::numbered("SCHOLARSHIP");
        assert_eq!(splitter.split("NAME: Only one"), vec!["NAME: Only one"]);
        assert!(splitter.split("   \n").is_empty());
    }

    #[test]
    fn test_keyword_mid_line_does_not_split() {
        let splitter = RecordSplitter::numbered("SCHOLARSHIP");
        let blocks = splitter.split("SCHOLARSHIP 1:\nDESCRIPTION: Like SCHOLARSHIP 2: but bigger");
        assert_eq!(blocks.len(), 1);
    }
}
