//! Front page assembly over stored entries

use chrono::{DateTime, TimeZone, Utc};
use diary_markup::entry::load_entries;
use diary_markup::{frontpage, Draft, Entry, MarkupEngine, PageRequest, PreviewOptions};

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, d, 8, 30, 0).unwrap()
}

fn entries() -> Vec<Entry> {
    let engine = MarkupEngine::default();
    let drafts = [
        (1, day(1), Draft::new("# First\r\nbody", "jana")),
        (2, day(3), Draft::new("**Third** day", "petr")),
        (3, day(2), Draft::new("Second, private", "jana").private(true)),
        (4, day(4), Draft::new("Fourth", "jana")),
        (5, day(4), Draft::new("Fourth again", "petr")),
    ];
    drafts
        .into_iter()
        .map(|(eid, ts, draft)| Entry::compose(&engine, &draft, eid, ts).unwrap())
        .collect()
}

fn ids(page: &diary_markup::Page) -> Vec<u64> {
    page.entries.iter().map(|e| e.eid).collect()
}

#[test]
fn test_newest_first_with_id_tiebreak() {
    let request = PageRequest {
        page_size: 10,
        ..PageRequest::default()
    };
    let page = frontpage(&entries(), &request, &PreviewOptions::default());
    assert_eq!(ids(&page), vec![5, 4, 2, 1]);
    assert!(!page.has_more);
}

#[test]
fn test_private_entries_listed_for_author_only() {
    let options = PreviewOptions::default();
    let as_jana = PageRequest {
        viewer: Some("jana"),
        ..PageRequest::default()
    };
    let as_petr = PageRequest {
        viewer: Some("petr"),
        ..PageRequest::default()
    };

    assert_eq!(ids(&frontpage(&entries(), &as_jana, &options)), vec![5, 4, 2, 3, 1]);
    assert_eq!(ids(&frontpage(&entries(), &as_petr, &options)), vec![5, 4, 2, 1]);
}

#[test]
fn test_pagination() {
    let options = PreviewOptions::default();
    let first = PageRequest {
        page: 0,
        page_size: 3,
        viewer: None,
    };
    let second = PageRequest { page: 1, ..first };
    let beyond = PageRequest { page: 7, ..first };

    let page = frontpage(&entries(), &first, &options);
    assert_eq!(ids(&page), vec![5, 4, 2]);
    assert!(page.has_more);

    let page = frontpage(&entries(), &second, &options);
    assert_eq!(page.page, 1);
    assert_eq!(ids(&page), vec![1]);
    assert!(!page.has_more);

    let page = frontpage(&entries(), &beyond, &options);
    assert!(page.entries.is_empty());
    assert!(!page.has_more);
}

#[test]
fn test_zero_page_size_lists_one() {
    let request = PageRequest {
        page_size: 0,
        ..PageRequest::default()
    };
    let page = frontpage(&entries(), &request, &PreviewOptions::default());
    assert_eq!(ids(&page), vec![5]);
    assert!(page.has_more);
}

#[test]
fn test_summaries_carry_previews() {
    let page = frontpage(&entries(), &PageRequest::default(), &PreviewOptions::default());
    let previews: Vec<&str> = page.entries.iter().map(|e| e.preview.as_str()).collect();
    assert_eq!(previews, vec!["Fourth again", "Fourth", "Third day", "First"]);
}

#[test]
fn test_listing_from_stored_json() {
    let json = r#"[
        {"eid": 1, "author": "jana", "private": false,
         "timestamp": "2024-05-01T08:30:00Z", "html": "<h1>Old</h1>"},
        {"eid": 2, "author": "jana", "private": false,
         "timestamp": "2024-05-09T08:30:00Z", "html": "New<br>tail"}
    ]"#;
    let stored = load_entries(json).unwrap();
    let page = frontpage(&stored, &PageRequest::default(), &PreviewOptions::default());
    assert_eq!(ids(&page), vec![2, 1]);
    assert_eq!(page.entries[0].preview, "New");
    assert_eq!(page.entries[1].preview, "Old");
}
