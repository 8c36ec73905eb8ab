//! Diary entries as the storage layer sees them
//!
//! An entry is rendered once, when it is composed, and only the resulting HTML
//! is kept. Reading an entry back never re-runs the markup rules.

use crate::engine::MarkupEngine;
use crate::error::MarkupError;
use crate::preview::{preview_with, PreviewOptions};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EntryError {
    #[error(transparent)]
    Markup(#[from] MarkupError),
    #[error("Entry author must not be empty")]
    EmptyAuthor,
    #[error("Malformed entry data: {0}")]
    Json(#[from] serde_json::Error),
}

/// What a user submits: raw text plus who wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub text: String,
    pub author: String,
    pub private: bool,
}

impl Draft {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Draft {
            text: text.into(),
            author: author.into(),
            private: false,
        }
    }

    pub fn private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }
}

/// A stored entry. Every field is required when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub eid: u64,
    pub author: String,
    pub private: bool,
    pub timestamp: DateTime<Utc>,
    pub html: String,
}

impl Entry {
    /// Render a draft into a storable entry, applying the engine's input guard.
    pub fn compose(
        engine: &MarkupEngine,
        draft: &Draft,
        eid: u64,
        timestamp: DateTime<Utc>,
    ) -> Result<Entry, EntryError> {
        let author = draft.author.trim();
        if author.is_empty() {
            return Err(EntryError::EmptyAuthor);
        }
        let html = engine.try_render(&draft.text)?;
        log::debug!("composed entry {eid} by {author}");
        Ok(Entry {
            eid,
            author: author.to_string(),
            private: draft.private,
            timestamp,
            html,
        })
    }

    pub fn preview(&self, options: &PreviewOptions) -> String {
        preview_with(&self.html, options)
    }

    /// Public entries are visible to everyone, private ones only to their author.
    pub fn is_visible_to(&self, viewer: Option<&str>) -> bool {
        !self.private || viewer == Some(self.author.as_str())
    }
}

/// Parse a JSON array of stored entries.
pub fn load_entries(json: &str) -> Result<Vec<Entry>, EntryError> {
    Ok(serde_json::from_str(json)?)
}

pub fn entries_to_json(entries: &[Entry]) -> Result<String, EntryError> {
    Ok(serde_json::to_string_pretty(entries)?)
}
