/// Pagination contract tests
///
/// Drive the cursor paginator against an in-memory ordered source the same
/// way the repositories drive PostgreSQL: keep rows strictly older than the
/// cursor, take limit+1 newest-first, and let `Page::assemble` trim.
use chrono::{DateTime, Duration, TimeZone, Utc};
use timeline_service::pagination::{LimitRange, Page, PageItem, PageParams};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
struct SourceRow {
    id: Uuid,
    created_at: DateTime<Utc>,
}

impl PageItem for SourceRow {
    fn page_timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// `count` rows authored at 1-minute intervals, newest first.
fn minutes_apart(count: usize) -> Vec<SourceRow> {
    let newest = Utc.with_ymd_and_hms(2025, 1, 22, 10, 0, 0).unwrap();
    (0..count)
        .map(|i| SourceRow {
            id: Uuid::new_v4(),
            created_at: newest - Duration::minutes(i as i64),
        })
        .collect()
}

fn params(limit: i64, cursor: Option<&str>) -> PageParams {
    PageParams::new(Some(limit), cursor, LimitRange::FEED).unwrap()
}

/// The repositories' probe, in memory: `created_at < cursor`, newest first,
/// `LIMIT limit + 1`.
fn fetch_page(source: &[SourceRow], params: &PageParams) -> Page<SourceRow> {
    let rows: Vec<SourceRow> = source
        .iter()
        .filter(|row| {
            params
                .cursor_time()
                .map_or(true, |cursor| row.created_at < cursor)
        })
        .take(params.probe_limit() as usize)
        .cloned()
        .collect();

    Page::assemble(rows, params.limit())
}

#[test]
fn twenty_five_posts_paginate_as_ten_ten_five() {
    let source = minutes_apart(25);

    let first = fetch_page(&source, &params(10, None));
    assert_eq!(first.items.len(), 10);
    assert!(first.has_more);
    let cursor1 = first.next_cursor_encoded().expect("first page has a cursor");
    // The cursor is the creation timestamp of the 10th-newest post.
    assert_eq!(
        first.next_cursor.unwrap().timestamp(),
        source[9].created_at
    );

    let second = fetch_page(&source, &params(10, Some(&cursor1)));
    assert_eq!(second.items.len(), 10);
    assert!(second.has_more);
    let cursor2 = second.next_cursor_encoded().expect("second page has a cursor");

    let third = fetch_page(&source, &params(10, Some(&cursor2)));
    assert_eq!(third.items.len(), 5);
    assert!(!third.has_more);
    assert!(third.next_cursor_encoded().is_none());
}

#[test]
fn chained_pages_are_disjoint_and_cover_the_source_in_order() {
    let source = minutes_apart(23);
    let limit = 7;

    let mut collected: Vec<Uuid> = Vec::new();
    let mut cursor: Option<String> = None;
    loop {
        let page = fetch_page(&source, &params(limit, cursor.as_deref()));
        for item in &page.items {
            assert!(
                !collected.contains(&item.id),
                "item repeated across pages"
            );
            collected.push(item.id);
        }
        match page.next_cursor_encoded() {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    let expected: Vec<Uuid> = source.iter().map(|row| row.id).collect();
    assert_eq!(collected, expected);
}

#[test]
fn exactly_limit_rows_is_the_last_page() {
    let source = minutes_apart(10);
    let page = fetch_page(&source, &params(10, None));

    assert_eq!(page.items.len(), 10);
    assert!(!page.has_more);
    assert!(page.next_cursor_encoded().is_none());
}

#[test]
fn one_past_the_limit_leaves_a_single_item_second_page() {
    let source = minutes_apart(11);

    let first = fetch_page(&source, &params(10, None));
    assert_eq!(first.items.len(), 10);
    assert!(first.has_more);

    let cursor = first.next_cursor_encoded().unwrap();
    let second = fetch_page(&source, &params(10, Some(&cursor)));
    assert_eq!(second.items.len(), 1);
    assert!(!second.has_more);
    assert!(second.next_cursor_encoded().is_none());
}

#[test]
fn repeating_a_request_returns_the_same_page() {
    let source = minutes_apart(15);
    let request = params(10, None);

    let first = fetch_page(&source, &request);
    let replay = fetch_page(&source, &request);

    assert_eq!(
        first.items.iter().map(|row| row.id).collect::<Vec<_>>(),
        replay.items.iter().map(|row| row.id).collect::<Vec<_>>()
    );
    assert_eq!(first.has_more, replay.has_more);
    assert_eq!(first.next_cursor_encoded(), replay.next_cursor_encoded());
}

#[test]
fn empty_source_yields_an_empty_last_page() {
    let page = fetch_page(&[], &params(10, None));
    assert!(page.items.is_empty());
    assert!(!page.has_more);
    assert!(page.next_cursor_encoded().is_none());
}
