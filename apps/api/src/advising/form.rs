//! Serde helpers for browser form fields.
//!
//! Form inputs arrive as strings, but numeric inputs are sometimes posted as
//! JSON numbers. Both are accepted as free text; nothing is validated here.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum FreeText {
    Text(String),
    Number(serde_json::Number),
}

impl FreeText {
    fn into_string(self) -> String {
        match self {
            FreeText::Text(text) => text,
            FreeText::Number(number) => number.to_string(),
        }
    }
}

/// String or number, `null` → empty string.
pub fn free_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_free_text(deserializer)?.unwrap_or_default())
}

/// String or number, `null` → `None`.
pub fn optional_free_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<FreeText>::deserialize(deserializer)?.map(FreeText::into_string))
}
