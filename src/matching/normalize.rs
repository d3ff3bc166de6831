//! Canonical form for mixed Japanese/English listing and catalog text.

use regex::Regex;
use std::sync::LazyLock;

/// Half-width and full-width parenthetical asides, contents included.
static RE_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)|（[^）]*）").expect("valid parenthesis regex"));

/// Anything outside ASCII word chars, whitespace, kana, CJK ideographs and
/// the fullwidth/halfwidth forms block.
static RE_DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9_\s\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{4E00}-\x{9FFF}\x{FF00}-\x{FFEF}]")
        .expect("valid character-class regex")
});

static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Normalize text for comparison.
///
/// Pipeline:
/// 1. Lowercase
/// 2. Drop `(...)` and `（...）` asides
/// 3. Replace every character outside the allowed ranges with a space
/// 4. Collapse whitespace runs and trim
///
/// Total over its input: empty text yields an empty string.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let lower = text.to_lowercase();
    let without_asides = RE_PARENS.replace_all(&lower, " ");
    let cleaned = RE_DISALLOWED.replace_all(&without_asides, " ");
    RE_WHITESPACE.replace_all(&cleaned, " ").trim().to_string()
}
