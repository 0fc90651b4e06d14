//! Markdown excerpt derivation for sidebar rows.
//!
//! # Responsibility
//! - Reduce a markdown note body to a short plain-text excerpt.
//!
//! # Invariants
//! - Images are removed entirely; links keep their visible text.
//! - Output is whitespace-normalized and capped at `EXCERPT_MAX_CHARS`.

use once_cell::sync::Lazy;
use regex::Regex;

const EXCERPT_MAX_CHARS: usize = 80;

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*]\(([^)]+)\)").expect("valid image regex"));
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static MARKUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\*_`#>~\-\[\]\(\)!]+"#).expect("valid markup regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Derives the sidebar excerpt for a markdown body.
///
/// Returns `None` when nothing visible remains after stripping markup.
pub fn excerpt(content: &str) -> Option<String> {
    let without_images = IMAGE_RE.replace_all(content, " ");
    let without_links = LINK_RE.replace_all(&without_images, "$1");
    let without_markup = MARKUP_RE.replace_all(&without_links, " ");
    let normalized = WHITESPACE_RE.replace_all(&without_markup, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(EXCERPT_MAX_CHARS).collect())
    }
}
