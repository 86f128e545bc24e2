// Advising operations: prompt building, one completion call, label extraction.
// All model calls go through llm_client::CompletionProvider. Transport failures
// degrade to per-operation fallback results instead of HTTP errors.

pub mod admissions;
pub mod essay;
pub mod form;
pub mod handlers;
pub mod internship;
pub mod prompts;
pub mod resume;
pub mod suggestions;
