//! Query and text normalization.
//!
//! Search queries are built from user file tags, which carry punctuation and
//! medium markers ("CD1", "disc 2") that make the catalog return nothing for
//! otherwise good matches. Response text in turn carries the `&quot;` HTML
//! entity, which must never leak into the records handed to the host.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximal runs of non-word characters. Unicode-aware so non-English tags
/// survive normalization.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").unwrap());

/// Disc/CD markers: "CD1", "disc 2", "Disc10".
static MEDIUM_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(?:cd|disc)\s*\d+").unwrap());

/// Normalizes a free-text search query.
///
/// Collapses every run of non-word characters to a single space, removes
/// disc/CD medium markers, and trims. Normalization is idempotent.
pub fn normalize_query(query: &str) -> String {
    let spaced = NON_WORD.replace_all(query, " ");
    let stripped = MEDIUM_MARKER.replace_all(&spaced, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Unescapes the HTML entities the catalog embeds in free-text fields.
pub fn unescape_entities(text: &str) -> String {
    text.replace("&quot;", "\"")
}
