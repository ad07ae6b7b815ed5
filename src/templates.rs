/// The templates module implements the bidirectional format pattern. A single
/// placeholder syntax drives both directions: substituting tag values into a
/// filename, and deriving a regex that parses tag values back out of one.
use std::collections::HashMap;
use std::path::MAIN_SEPARATOR;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::common::DEFAULT_FORMAT;
use crate::error::{FreitagExpectedError, Result};

/// Placeholder delimiter. Escaped before being embedded in the placeholder
/// regex, so a metacharacter delimiter would still compile.
pub const DELIMITER: &str = "%";

/// Placeholder identifiers are runs of ASCII lowercase letters.
pub const ID_PATTERN: &str = "[a-z]+";

static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("{}({})", regex::escape(DELIMITER), ID_PATTERN)).unwrap());

/// Resolves a placeholder name to a value. Absent or unrecognized names
/// resolve to the empty string, never an error.
pub trait FieldLookup {
    fn field(&self, name: &str) -> String;
}

impl FieldLookup for HashMap<String, String> {
    fn field(&self, name: &str) -> String {
        self.get(name).cloned().unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct FormatTemplate {
    text: String,
}

impl Default for FormatTemplate {
    fn default() -> FormatTemplate {
        FormatTemplate::new(DEFAULT_FORMAT)
    }
}

impl FormatTemplate {
    pub fn new(text: impl Into<String>) -> FormatTemplate {
        FormatTemplate { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Substitute every placeholder with the source's value for it. Text that
    /// does not match the placeholder syntax is left literal. The result is
    /// trimmed, so an empty leading numeric field does not leave stray
    /// whitespace.
    pub fn format<F: FieldLookup + ?Sized>(&self, fields: &F) -> String {
        PLACEHOLDER_REGEX.replace_all(&self.text, |caps: &Captures| fields.field(&caps[1])).trim().to_string()
    }

    /// Parse `candidate` with a regex derived from this pattern, returning the
    /// captured value of every placeholder. The search is anchorless; a
    /// candidate the derived regex matches nowhere yields
    /// [`FreitagExpectedError::NoMatch`].
    pub fn extract(&self, candidate: &str) -> Result<HashMap<String, String>> {
        let regex = self.to_regex()?;
        let caps = regex.captures(candidate).ok_or_else(|| FreitagExpectedError::NoMatch {
            format: self.text.clone(),
            candidate: candidate.to_string(),
        })?;

        let mut values = HashMap::new();
        for name in regex.capture_names().flatten() {
            if let Some(m) = caps.name(name) {
                values.insert(name.to_string(), m.as_str().to_string());
            }
        }
        Ok(values)
    }

    // Escape the pattern so every literal character matches itself, then swap
    // each placeholder for a named capture group. The escape runs first: the
    // placeholder syntax survives it, literal separators do not stay meta.
    fn to_regex(&self) -> Result<Regex> {
        let escaped = regex::escape(&self.text);
        let derived = PLACEHOLDER_REGEX.replace_all(&escaped, |caps: &Captures| tag_regex(&caps[1]));
        Regex::new(&derived).map_err(|e| {
            FreitagExpectedError::InvalidFormat {
                format: self.text.clone(),
                message: e.to_string(),
            }
            .into()
        })
    }
}

// A tag matches any run of characters up to the next path separator. The
// tracknumber group is non-greedy so it does not swallow a following literal
// separator such as " - ".
fn tag_regex(name: &str) -> String {
    let mut value = format!("[^{}]*", regex::escape(&MAIN_SEPARATOR.to_string()));
    if name == "tracknumber" {
        value.push('?');
    }
    format!("(?P<{}>{})", name, value)
}
