//! Sigil markup for diary entries and comments
//!
//!     Users write plain text with a handful of doubled sigils; this crate turns it into the
//!     HTML fragment that gets stored and displayed. It is deliberately small: no nesting, no
//!     block structure beyond one heading per line, no sanitizing. The engine only ever emits
//!     the tags listed in [`rules`].
//!
//!     This is a pure lib. Routing, sessions, forms and storage live elsewhere and only hand
//!     us text or take HTML back.
//!
//!     The file structure :
//!     .
//!     ├── error.rs      # MarkupError, the single error kind
//!     ├── rules.rs      # Ordered rule table and the per-rule transforms
//!     ├── engine.rs     # Line splitting, escape handling, join
//!     ├── preview.rs    # Tag-free previews for listings
//!     ├── entry.rs      # Stored entries: render once on compose
//!     └── listing.rs    # Front page pagination over entries
//!
//! Pipeline
//!
//!     raw text ──split "\r\n"──▶ lines ──escaped? ─yes─▶ verbatim
//!                                         │
//!                                         no
//!                                         ▼
//!                                 link → bold → italic → underline →
//!                                 strikethrough → heading → sup → sub
//!                                         │
//!                                         ▼
//!                               lines joined with "<br>"
//!
//!     Rules are global substitutions applied in a fixed order and may stack: a later rule sees
//!     the output of an earlier one on the same line.
//!
//! Example
//!
//! ```
//! assert_eq!(diary_markup::render("**hi**"), "<b>hi</b>");
//! assert_eq!(diary_markup::render("# Title\r\nbody"), "<h1>Title</h1><br>body");
//! assert_eq!(diary_markup::preview("<h1>Title</h1><br>body"), "Title");
//! ```
pub mod engine;
pub mod entry;
pub mod error;
pub mod listing;
pub mod preview;
pub mod rules;

pub use engine::{EngineOptions, MarkupEngine, LINE_BREAK, LINE_SEPARATOR};
pub use entry::{Draft, Entry, EntryError};
pub use error::MarkupError;
pub use listing::{frontpage, Page, PageRequest};
pub use preview::{preview_with, PreviewOptions};
pub use rules::{FontStyle, RuleKind, RuleSet};

use once_cell::sync::Lazy;

static DEFAULT_ENGINE: Lazy<MarkupEngine> = Lazy::new(MarkupEngine::default);

/// Render raw text with the default engine.
pub fn render(raw: &str) -> String {
    DEFAULT_ENGINE.render(raw)
}

/// Preview rendered HTML with the default 120 character limit.
pub fn preview(html: &str) -> String {
    preview::preview(html)
}
