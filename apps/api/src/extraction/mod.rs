// Response extraction: turns free-form model output into labelled spans.
// Everything here is pure and allocation-light; no module in this tree
// matches on raw model text without going through these helpers.

pub mod records;
pub mod sections;
pub mod tokens;

pub use records::RecordSplitter;
pub use sections::SectionGrammar;
pub use tokens::{find_out_of_ten, find_percentage, first_integer, first_paragraph};
