/// The common module is our grab bag of small shared pieces: the default
/// format pattern, the recognized tag set, and the word-capitalization helper
/// used by humanize.

pub const DEFAULT_FORMAT: &str = "%tracknumber - %artist - %title.mp3";

/// The closed set of tag names freitag recognizes. Updates for any other name
/// are silently dropped, never an error.
pub const SUPPORTED_TAGS: &[&str] = &["album", "artist", "title", "discnumber", "tracknumber", "date"];

pub fn is_supported_tag(name: &str) -> bool {
    SUPPORTED_TAGS.contains(&name)
}

/// Capitalize every whitespace-separated word: first letter upper, the rest
/// lower. Runs of whitespace collapse to a single space.
pub fn capwords(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
