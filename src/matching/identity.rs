//! Bare-name derivation: the character/product identity left after the
//! product-line prefix and edition suffix are removed.

use regex::Regex;
use std::sync::LazyLock;

use super::normalize::normalize;

/// Leading fractional-scale notation such as `1/7` or `1/8 Scale`.
static RE_SCALE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d+\s*/\s*\d+\s*(?:scale|スケール)?").expect("valid scale prefix regex")
});

/// Trailing qualifier introduced by a colon or tilde, or by a dash with
/// whitespace before it, that names an edition. In-word hyphens
/// (`Spider-Man`) never start a qualifier.
static RE_EDITION_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:\s+[-–—]|\s*[:：~〜])\s*[^-–—:：~〜]*(?:special|limited|dx|deluxe|bonus|complete|edition|ver\.?|version|限定|特典|特別|デラックス|豪華|完全|バージョン|付き)[^-–—:：~〜]*$",
    )
    .expect("valid edition suffix regex")
});

const SEPARATORS: &[char] = &[' ', '-', '–', '—', ':', '：', '~', '〜', '/', '・'];

const STOP_WORDS: &[&str] = &[
    "the", "and", "with", "ver", "version", "edition", "figure", "scale", "special", "limited",
];

/// Strip a product-line prefix and any edition/version suffix.
///
/// `Nendoroid Hitori Gotoh` → `Hitori Gotoh`;
/// `Saber/Artoria Pendragon: Heroic Spirit Formal Dress Ver.` → `Saber/Artoria Pendragon`.
pub fn bare_name(name: &str, prefixes: &[String]) -> String {
    let mut rest = name.trim();

    for prefix in prefixes {
        let head = rest.get(..prefix.len());
        if !prefix.is_empty() && head.is_some_and(|h| h.to_lowercase() == prefix.to_lowercase()) {
            rest = &rest[prefix.len()..];
            break;
        }
    }
    rest = rest.trim_start_matches(SEPARATORS);

    if let Some(m) = RE_SCALE_PREFIX.find(rest) {
        rest = rest[m.end()..].trim_start_matches(SEPARATORS);
    }

    let without_edition = RE_EDITION_SUFFIX.replace(rest, "");
    let trimmed = strip_trailing_version(without_edition.trim());
    trimmed.trim_end_matches(SEPARATORS).trim().to_string()
}

/// Remove a trailing `<term> Ver.` or `<term>Ver.` token pair.
fn strip_trailing_version(text: &str) -> &str {
    let tokens: Vec<(usize, &str)> = token_spans(text);
    let Some(&(last_start, last)) = tokens.last() else {
        return text;
    };

    if is_version_marker(last) {
        return match tokens.len() {
            0 | 1 => text[..last_start].trim_end(),
            n => text[..tokens[n - 2].0].trim_end(),
        };
    }
    if split_glued_version(last).is_some() {
        return text[..last_start].trim_end();
    }
    text
}

/// The version term attached to a trailing or inline `Ver.` marker, if any.
///
/// `Hitori Gotoh Casual Ver.` → `casual`; `後藤ひとり 私服Ver.` → `私服`.
pub fn version_term(name: &str) -> Option<String> {
    let tokens = token_spans(name);
    for (i, &(_, token)) in tokens.iter().enumerate() {
        if is_version_marker(token) {
            if i > 0 {
                return Some(clean_term(tokens[i - 1].1));
            }
            continue;
        }
        if let Some(prefix) = split_glued_version(token) {
            return Some(clean_term(prefix));
        }
    }
    None
}

/// Identity words usable for the lower-confidence word-level path.
///
/// ASCII words need three or more characters and must not be stop words;
/// CJK words need two or more.
pub fn identity_words(bare: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for word in normalize(bare).split(' ') {
        let long_enough = if word.is_ascii() {
            word.chars().count() >= 3 && !STOP_WORDS.contains(&word)
        } else {
            word.chars().count() >= 2
        };
        if long_enough && !words.iter().any(|w| w == word) {
            words.push(word.to_string());
        }
    }
    words
}

fn token_spans(text: &str) -> Vec<(usize, &str)> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                spans.push((s, &text[s..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        spans.push((s, &text[s..]));
    }
    spans
}

fn is_version_marker(token: &str) -> bool {
    let t = token.trim_end_matches('.').to_lowercase();
    t == "ver" || t == "version" || t == "バージョン"
}

/// Split `私服Ver.` / `2023ver` into the prefix before the marker.
///
/// The prefix must not end in an ASCII letter so words like `Silver` are left alone.
fn split_glued_version(token: &str) -> Option<&str> {
    let lower = token.trim_end_matches('.').to_lowercase();
    if lower.len() != token.trim_end_matches('.').len() {
        return None;
    }
    let marker_len = ["version", "ver", "バージョン"]
        .iter()
        .find(|m| lower.ends_with(*m) && lower.len() > m.len())
        .map(|m| m.len())?;
    let prefix = token.get(..lower.len() - marker_len)?;
    let last = prefix.chars().last()?;
    if last.is_ascii_alphabetic() {
        return None;
    }
    let prefix = prefix.trim_end_matches(SEPARATORS);
    if prefix.is_empty() {
        None
    } else {
        Some(prefix)
    }
}

fn clean_term(term: &str) -> String {
    term.trim_matches(SEPARATORS).to_lowercase()
}
