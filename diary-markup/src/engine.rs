//! Line driver: split, escape, apply rules, join
//!
//! The engine owns a [`RuleSet`] and an optional input guard. Splitting on
//! [`LINE_SEPARATOR`] happens exactly once, before any rule runs, and the
//! results are joined with [`LINE_BREAK`], so the number of lines in always
//! equals the number of `<br>`-separated segments out.

use crate::error::MarkupError;
use crate::rules::{RuleSet, DEFAULT_LINK_CLASS};

/// Separator used by submitted form text.
pub const LINE_SEPARATOR: &str = "\r\n";

/// Marker joining rendered lines.
pub const LINE_BREAK: &str = "<br>";

/// Wrapping a whole line in this marker opts it out of formatting.
pub const ESCAPE_MARKER: &str = "@@";

/// Default input limit, in characters.
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 20_000;

/// Settings for building a [`MarkupEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// CSS class on generated anchors
    pub link_class: String,
    /// Longest input, in characters, accepted by [`MarkupEngine::try_render`].
    /// `None` disables the guard.
    pub max_input_length: Option<usize>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            link_class: DEFAULT_LINK_CLASS.to_string(),
            max_input_length: Some(DEFAULT_MAX_INPUT_LENGTH),
        }
    }
}

/// Renders raw diary text to an HTML fragment.
///
/// The engine holds no mutable state; one instance can serve any number of
/// threads at once.
#[derive(Debug, Clone)]
pub struct MarkupEngine {
    rules: RuleSet,
    max_input_length: Option<usize>,
}

impl MarkupEngine {
    pub fn new(options: EngineOptions) -> Self {
        MarkupEngine {
            rules: RuleSet::with_link_class(options.link_class),
            max_input_length: options.max_input_length,
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn max_input_length(&self) -> Option<usize> {
        self.max_input_length
    }

    /// Render a whole block of text. Never fails; the length guard is not
    /// consulted here (see [`MarkupEngine::try_render`]).
    pub fn render(&self, raw: &str) -> String {
        let mut escaped = 0usize;
        let lines: Vec<String> = raw
            .split(LINE_SEPARATOR)
            .map(|line| match unescape(line) {
                Some(verbatim) => {
                    escaped += 1;
                    verbatim.to_string()
                }
                None => self.render_line(line),
            })
            .collect();

        log::debug!(
            "rendered {} line(s), {escaped} escaped, {} -> {} bytes",
            lines.len(),
            raw.len(),
            lines.iter().map(String::len).sum::<usize>()
        );
        lines.join(LINE_BREAK)
    }

    /// Run the rule table over one line. The escape marker is not checked.
    pub fn render_line(&self, line: &str) -> String {
        self.rules.apply(line)
    }

    /// Render after checking the input against the configured length limit.
    pub fn try_render(&self, raw: &str) -> Result<String, MarkupError> {
        self.check_length(raw)?;
        Ok(self.render(raw))
    }

    /// Render raw bytes, rejecting anything that is not UTF-8 text.
    pub fn render_bytes(&self, raw: &[u8]) -> Result<String, MarkupError> {
        let text = std::str::from_utf8(raw).map_err(|e| {
            MarkupError::InvalidArgument(format!("input is not valid UTF-8 text: {e}"))
        })?;
        self.try_render(text)
    }

    pub fn check_length(&self, raw: &str) -> Result<(), MarkupError> {
        let Some(limit) = self.max_input_length else {
            return Ok(());
        };
        let length = raw.chars().count();
        if length > limit {
            log::warn!("rejecting {length} characters of input (limit {limit})");
            return Err(MarkupError::input_too_long(length, limit));
        }
        Ok(())
    }
}

impl Default for MarkupEngine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

/// The verbatim body of an escaped line, or `None` if the line is not
/// wrapped in [`ESCAPE_MARKER`]. `@@` and `@@@` escape to an empty line.
pub fn unescape(line: &str) -> Option<&str> {
    if !(line.starts_with(ESCAPE_MARKER) && line.ends_with(ESCAPE_MARKER)) {
        return None;
    }
    let start = ESCAPE_MARKER.len();
    let end = line.len() - ESCAPE_MARKER.len();
    Some(line.get(start..end).unwrap_or(""))
}
