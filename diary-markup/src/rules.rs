//! The ordered rule table
//!
//! Every line that is not escaped runs through the same eight rules, top to
//! bottom. Each rule is a global substitution over the current state of the
//! line, so later rules see the output of earlier ones (a bold link is
//! produced by the link rule first and wrapped by the bold rule second).
//!
//! | order | rule          | sigil             | output                 |
//! |-------|---------------|-------------------|------------------------|
//! | 1     | link          | `[text](https://…)` | `<a class=… href=…>`  |
//! | 2     | bold          | `**text**`        | `<b>`                  |
//! | 3     | italic        | `//text//`        | `<i>`                  |
//! | 4     | underline     | `__text__`        | `<u>`                  |
//! | 5     | strikethrough | `~~text~~`        | `<del>`                |
//! | 6     | heading       | `# Title`         | `<h1>`..`<h3>`         |
//! | 7     | superscript   | `^^text^^`        | `<sup>`                |
//! | 8     | subscript     | `,,text,,`        | `<sub>`                |
//!
//! Bold, italic, underline and strikethrough accept any characters between
//! their sigils (greedy, so `**a** b **c**` becomes one bold span); superscript
//! and subscript accept no whitespace.

use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};
use std::borrow::Cow;
use std::fmt;

/// CSS class put on every generated anchor unless configured otherwise.
pub const DEFAULT_LINK_CLASS: &str = "textlink";

static LINK_PARTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\S+)\]|\((\S+)\)").expect("valid link parts regex"));

static STANDARD_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    RuleKind::STANDARD_ORDER
        .iter()
        .map(|kind| Rule::compile(*kind).expect("standard markup patterns are valid"))
        .collect()
});

/// The inline styles that share a single transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Superscript,
    Subscript,
}

impl FontStyle {
    pub const ALL: [FontStyle; 6] = [
        FontStyle::Bold,
        FontStyle::Italic,
        FontStyle::Underline,
        FontStyle::Strikethrough,
        FontStyle::Superscript,
        FontStyle::Subscript,
    ];

    /// The doubled sigil wrapping the styled text.
    pub fn sigil(self) -> &'static str {
        match self {
            FontStyle::Bold => "**",
            FontStyle::Italic => "//",
            FontStyle::Underline => "__",
            FontStyle::Strikethrough => "~~",
            FontStyle::Superscript => "^^",
            FontStyle::Subscript => ",,",
        }
    }

    /// The HTML element name emitted for this style.
    pub fn tag(self) -> &'static str {
        match self {
            FontStyle::Bold => "b",
            FontStyle::Italic => "i",
            FontStyle::Underline => "u",
            FontStyle::Strikethrough => "del",
            FontStyle::Superscript => "sup",
            FontStyle::Subscript => "sub",
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            FontStyle::Bold => r"\*{2}.+\*{2}",
            FontStyle::Italic => r"/{2}.+/{2}",
            FontStyle::Underline => r"_{2}.+_{2}",
            FontStyle::Strikethrough => r"~{2}.+~{2}",
            FontStyle::Superscript => r"\^{2}\S+\^{2}",
            FontStyle::Subscript => r",{2}\S+,{2}",
        }
    }

    /// Resolve the style of a matched span from its opening sigil.
    ///
    /// Every font pattern starts with its own sigil, so exactly one style
    /// answers for any span the table produces.
    pub fn from_span(span: &str) -> Option<FontStyle> {
        Self::ALL
            .into_iter()
            .find(|style| span.starts_with(style.sigil()))
    }

    pub fn wrap(self, inner: &str) -> String {
        let tag = self.tag();
        format!("<{tag}>{inner}</{tag}>")
    }
}

/// One entry of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Link,
    Font(FontStyle),
    Heading,
}

impl RuleKind {
    /// The fixed evaluation order.
    pub const STANDARD_ORDER: [RuleKind; 8] = [
        RuleKind::Link,
        RuleKind::Font(FontStyle::Bold),
        RuleKind::Font(FontStyle::Italic),
        RuleKind::Font(FontStyle::Underline),
        RuleKind::Font(FontStyle::Strikethrough),
        RuleKind::Heading,
        RuleKind::Font(FontStyle::Superscript),
        RuleKind::Font(FontStyle::Subscript),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Link => "link",
            RuleKind::Heading => "heading",
            RuleKind::Font(FontStyle::Bold) => "bold",
            RuleKind::Font(FontStyle::Italic) => "italic",
            RuleKind::Font(FontStyle::Underline) => "underline",
            RuleKind::Font(FontStyle::Strikethrough) => "strikethrough",
            RuleKind::Font(FontStyle::Superscript) => "superscript",
            RuleKind::Font(FontStyle::Subscript) => "subscript",
        }
    }

    /// What a user types to trigger the rule.
    pub fn example(&self) -> &'static str {
        match self {
            RuleKind::Link => "[text](https://example.com)",
            RuleKind::Heading => "# Title",
            RuleKind::Font(FontStyle::Bold) => "**text**",
            RuleKind::Font(FontStyle::Italic) => "//text//",
            RuleKind::Font(FontStyle::Underline) => "__text__",
            RuleKind::Font(FontStyle::Strikethrough) => "~~text~~",
            RuleKind::Font(FontStyle::Superscript) => "^^text^^",
            RuleKind::Font(FontStyle::Subscript) => ",,text,,",
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            RuleKind::Link => r"\[\S+\]\(http(s?)://\S+\)",
            RuleKind::Heading => r"^#{1,3}\s?[^#\n]+\n?$",
            RuleKind::Font(style) => style.pattern(),
        }
    }

    fn transform(&self, span: &str, link_class: &str) -> String {
        match self {
            RuleKind::Link => link(span, link_class),
            RuleKind::Heading => heading(span),
            RuleKind::Font(_) => font_mod(span),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A compiled rule: its kind plus the case-insensitive, Unicode-aware matcher.
#[derive(Debug, Clone)]
pub struct Rule {
    kind: RuleKind,
    regex: Regex,
}

impl Rule {
    pub fn compile(kind: RuleKind) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(kind.pattern())
            .case_insensitive(true)
            .unicode(true)
            .build()?;
        Ok(Rule { kind, regex })
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }
}

/// The ordered rule table together with the settings its transforms need.
///
/// Compiled patterns are shared process-wide; cloning a `RuleSet` or building
/// one with a different link class does not recompile anything.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    link_class: String,
}

impl RuleSet {
    pub fn standard() -> Self {
        Self::with_link_class(DEFAULT_LINK_CLASS)
    }

    pub fn with_link_class(link_class: impl Into<String>) -> Self {
        RuleSet {
            rules: STANDARD_RULES.clone(),
            link_class: link_class.into(),
        }
    }

    pub fn link_class(&self) -> &str {
        &self.link_class
    }

    pub fn iter(&self) -> impl Iterator<Item = RuleKind> + '_ {
        self.rules.iter().map(Rule::kind)
    }

    /// Run every rule over a single line, in order.
    pub fn apply(&self, line: &str) -> String {
        let mut current = line.to_string();
        for rule in &self.rules {
            let replaced = rule.regex.replace_all(&current, |caps: &Captures<'_>| {
                let span = &caps[0];
                log::trace!("{} rule matched {span:?}", rule.kind);
                rule.kind.transform(span, &self.link_class)
            });
            if let Cow::Owned(next) = replaced {
                current = next;
            }
        }
        current
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// `[text](url)` to an anchor. If the bracket and paren groups cannot both be
/// pulled out of the span, the span is returned untouched.
pub fn link(span: &str, link_class: &str) -> String {
    let mut parts = LINK_PARTS.captures_iter(span);
    let text = parts.next().and_then(|caps| caps.get(1));
    let href = parts.next().and_then(|caps| caps.get(2));

    match (text, href) {
        (Some(text), Some(href)) => format!(
            r#"<a class="{link_class}" href="{}">{}</a>"#,
            href.as_str(),
            text.as_str()
        ),
        _ => {
            log::debug!("link groups not found in {span:?}, keeping it as text");
            span.to_string()
        }
    }
}

/// Shared transform for every doubled-sigil style.
pub fn font_mod(span: &str) -> String {
    let Some(style) = FontStyle::from_span(span) else {
        return span.to_string();
    };
    let sigil_len = style.sigil().len();
    let inner = span
        .len()
        .checked_sub(sigil_len)
        .and_then(|end| span.get(sigil_len..end));

    match inner {
        Some(inner) => style.wrap(inner),
        None => span.to_string(),
    }
}

/// `## Title` to `<h2>Title</h2>`. No `#` at all is a no-op.
pub fn heading(span: &str) -> String {
    let level = span.chars().filter(|&c| c == '#').count();
    if level == 0 {
        return span.to_string();
    }
    // A single trailing LF sits outside the heading element.
    let (body, newline) = match span.strip_suffix('\n') {
        Some(body) => (body, "\n"),
        None => (span, ""),
    };
    let title = body.replace('#', "");
    format!("<h{level}>{}</h{level}>{newline}", title.trim())
}
