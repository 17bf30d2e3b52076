use std::sync::OnceLock;

use regex::{
    NoExpand,
    Regex,
    RegexBuilder,
};
use serde::{
    Deserialize,
    Deserializer,
};

/// CJK Unified Ideographs. Korean hanja annotations are written in this block.
pub fn is_hanja(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// Drops everything that is not a hanja: brackets, spacing, placeholders like "-" or "none".
pub fn strip_to_hanja(text: &str) -> String {
    text.chars().filter(|c| is_hanja(*c)).collect()
}

/// Collapses every whitespace run into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let re = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("static pattern"));
    re.replace_all(text, " ").into_owned()
}

/// First `count` characters of `text` (not bytes).
pub fn take_chars(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}

/// Compiled size allowed for one literal pattern, the regex crate's own default.
pub const PATTERN_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Builds a regex that matches `needle` literally.
pub fn literal_pattern(needle: &str, case_insensitive: bool) -> Result<Regex, regex::Error> {
    literal_pattern_within(needle, case_insensitive, PATTERN_SIZE_LIMIT)
}

pub fn literal_pattern_within(
    needle: &str,
    case_insensitive: bool,
    size_limit: usize,
) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(case_insensitive)
        .size_limit(size_limit)
        .build()
}

/// [`ReplaceLiteral::replace_literal`] with an explicit pattern size limit.
pub fn replace_literal_within(
    text: &str,
    needle: &str,
    replacement: &str,
    case_insensitive: bool,
    size_limit: usize,
) -> String {
    if needle.is_empty() {
        return text.to_string();
    }

    match literal_pattern_within(needle, case_insensitive, size_limit) {
        Ok(re) => re.replace_all(text, NoExpand(replacement)).into_owned(),
        Err(e) => {
            log::warn!("Leaving text unmasked, no pattern for {:?}: {}", needle, e);
            text.to_string()
        }
    }
}

pub trait ReplaceLiteral {
    /// Replaces every literal occurrence of `needle` with `replacement`.
    ///
    /// Never fails: an empty needle or a pattern the regex engine rejects leaves the
    /// text as it was.
    fn replace_literal(&self, needle: &str, replacement: &str, case_insensitive: bool) -> String;
}

impl ReplaceLiteral for str {
    fn replace_literal(&self, needle: &str, replacement: &str, case_insensitive: bool) -> String {
        replace_literal_within(self, needle, replacement, case_insensitive, PATTERN_SIZE_LIMIT)
    }
}

impl ReplaceLiteral for String {
    fn replace_literal(&self, needle: &str, replacement: &str, case_insensitive: bool) -> String {
        self.as_str().replace_literal(needle, replacement, case_insensitive)
    }
}

/// Accepts ids written either as JSON numbers or strings.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Integer(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}

/// Treats an explicit `null` like a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
