// Scholarship search over the local catalog. No LLM involvement:
// criteria in, one padded page of catalog records out.

pub mod catalog;
pub mod filter;
pub mod handlers;

pub use catalog::ScholarshipCatalog;
