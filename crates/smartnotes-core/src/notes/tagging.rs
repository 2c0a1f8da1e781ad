//! Heuristic auto-tagging: hashtags and keywords pulled from note text.
//!
//! Everything here is a pure function of its input so it can be tested
//! without a store.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;

/// Maximum number of keyword tags derived from a single note.
pub const MAX_KEYWORDS: usize = 3;

static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\w+)").expect("valid hashtag regex"));

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z]{4,}\b").expect("valid keyword regex"));

const STOP_WORDS: &[&str] = &[
    "that", "this", "with", "have", "from", "they", "been", "were", "said", "each", "which",
    "their", "there", "would", "make", "like", "into", "time", "than", "them", "some", "what",
    "when", "will", "your",
];

/// All `#word` hashtags in order of appearance, lowercased, duplicates kept.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    HASHTAG_RE
        .captures_iter(text)
        .map(|caps| caps[1].to_lowercase())
        .collect()
}

/// Up to [`MAX_KEYWORDS`] distinct alphabetic words of four or more letters
/// that are not stop words, in first-occurrence order.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut seen = HashSet::new();

    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| !STOP_WORDS.contains(word))
        .filter(|word| seen.insert(*word))
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}

/// Hashtags and keywords of `text`, deduplicated.
pub fn extract_tags(text: &str) -> BTreeSet<String> {
    extract_hashtags(text)
        .into_iter()
        .chain(extract_keywords(text))
        .collect()
}

/// Normalize a user-supplied tag: trim, lowercase, and drop leading `#`.
/// Returns `None` when nothing is left.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let tag = raw.trim().to_lowercase();
    let tag = tag.trim_start_matches('#').trim();
    if tag.is_empty() {
        None
    } else {
        Some(tag.to_string())
    }
}
