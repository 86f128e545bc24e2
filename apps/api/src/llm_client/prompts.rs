// Shared prompt fragments and template rendering.
// Each advising operation defines its own template in advising::prompts.
// This file contains the cross-cutting pieces.

/// Output-contract rules appended to every labelled prompt. The extractor only
/// recognizes labels that open a line, so the model is told to keep them there.
pub const LABEL_FORMAT_RULES: &str = "\
    Output rules: write every label exactly as shown, in uppercase, \
    at the start of its own line, followed by a colon. \
    Do not rename, translate, or omit labels. \
    Do not add any text before the first label.";

/// Placeholder for optional profile fields the user left empty.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Renders `{key}` placeholders in a single pass.
///
/// Substituted values are never rescanned, so user text containing `{college}`
/// or similar reaches the model verbatim. Unknown placeholders are left as-is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substitution = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (close, *value))
        });

        match substitution {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Returns the trimmed value, or `placeholder` when it is absent or blank.
pub fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder)
}
