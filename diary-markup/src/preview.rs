//! Plain-text previews of rendered entries
//!
//! Listings show a short, tag-free teaser of every entry. Only the first
//! rendered line is ever previewed; the output never goes back through the
//! markup rules.

use crate::engine::LINE_BREAK;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Longest preview body, in characters, before the ellipsis.
pub const PREVIEW_MAX_CHARS: usize = 120;

/// Appended to truncated previews.
pub const ELLIPSIS: &str = "...";

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    pub max_chars: usize,
    pub ellipsis: String,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            max_chars: PREVIEW_MAX_CHARS,
            ellipsis: ELLIPSIS.to_string(),
        }
    }
}

/// Preview with the default 120 character limit.
pub fn preview(html: &str) -> String {
    preview_with(html, &PreviewOptions::default())
}

/// First line, tags removed, truncated to `options.max_chars` characters.
pub fn preview_with(html: &str, options: &PreviewOptions) -> String {
    let text = strip_tags(first_segment(html));
    truncate(&text, options)
}

/// Everything before the first `<br>`.
pub fn first_segment(html: &str) -> &str {
    match html.split_once(LINE_BREAK) {
        Some((head, _)) => head,
        None => html,
    }
}

pub fn strip_tags(html: &str) -> Cow<'_, str> {
    TAG_RE.replace_all(html, "")
}

fn truncate(text: &str, options: &PreviewOptions) -> String {
    match text.char_indices().nth(options.max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], options.ellipsis),
        None => text.to_string(),
    }
}
