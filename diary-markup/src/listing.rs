//! Front-page listing over stored entries

use crate::entry::Entry;
use crate::preview::PreviewOptions;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Which page to build and for whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest<'a> {
    /// Zero-based page index
    pub page: usize,
    pub page_size: usize,
    /// Logged-in user, if any; private entries are only listed for their author
    pub viewer: Option<&'a str>,
}

impl Default for PageRequest<'_> {
    fn default() -> Self {
        PageRequest {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            viewer: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySummary {
    pub eid: u64,
    pub author: String,
    pub timestamp: DateTime<Utc>,
    pub preview: String,
}

impl EntrySummary {
    pub fn from_entry(entry: &Entry, options: &PreviewOptions) -> Self {
        EntrySummary {
            eid: entry.eid,
            author: entry.author.clone(),
            timestamp: entry.timestamp,
            preview: entry.preview(options),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub page: usize,
    pub entries: Vec<EntrySummary>,
    pub has_more: bool,
}

/// Newest entries first (ties broken by the higher id), paginated.
/// A page size of zero is treated as one.
pub fn frontpage(entries: &[Entry], request: &PageRequest<'_>, options: &PreviewOptions) -> Page {
    let page_size = request.page_size.max(1);

    let mut visible: Vec<&Entry> = entries
        .iter()
        .filter(|entry| entry.is_visible_to(request.viewer))
        .collect();
    visible.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| b.eid.cmp(&a.eid))
    });

    let start = request.page.saturating_mul(page_size);
    let summaries = visible
        .iter()
        .skip(start)
        .take(page_size)
        .map(|entry| EntrySummary::from_entry(entry, options))
        .collect();

    Page {
        page: request.page,
        entries: summaries,
        has_more: visible.len() > start.saturating_add(page_size),
    }
}
