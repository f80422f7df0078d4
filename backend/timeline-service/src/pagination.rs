//! Cursor pagination over creation-timestamp keysets.
//!
//! Every listing in this service (feed, comments, follower/following lists)
//! pages the same way: fetch `limit + 1` rows ordered by
//! `(created_at DESC, id DESC)`, constrained to `created_at < cursor` when a
//! cursor is present, then trim the probe row. The cursor is the creation
//! timestamp of the last returned item, carried as a full-precision RFC 3339
//! string so a round trip through the client loses nothing.

use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

/// Validation failures for listing parameters. Surfaced to clients as 400s
/// with the offending field named; an unparseable cursor is never ignored.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageParamsError {
    #[error("limit must be between {min} and {max}")]
    LimitOutOfRange { min: i64, max: i64 },

    #[error("invalid cursor: expected an RFC 3339 timestamp")]
    InvalidCursor,
}

/// Allowed limit range for a listing endpoint.
#[derive(Debug, Clone, Copy)]
pub struct LimitRange {
    pub min: i64,
    pub max: i64,
    pub default: i64,
}

impl LimitRange {
    pub const FEED: LimitRange = LimitRange {
        min: 1,
        max: 50,
        default: 10,
    };

    pub const COMMENTS: LimitRange = LimitRange {
        min: 1,
        max: 50,
        default: 20,
    };

    pub const FOLLOW_LIST: LimitRange = LimitRange {
        min: 1,
        max: 50,
        default: 20,
    };

    fn resolve(&self, requested: Option<i64>) -> Result<i64, PageParamsError> {
        match requested {
            None => Ok(self.default),
            Some(limit) if limit < self.min || limit > self.max => {
                Err(PageParamsError::LimitOutOfRange {
                    min: self.min,
                    max: self.max,
                })
            }
            Some(limit) => Ok(limit),
        }
    }
}

/// Continuation token: the creation timestamp of the last item of the
/// previous page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor(DateTime<Utc>);

impl Cursor {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Cursor(timestamp)
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.0
    }

    /// Parse a client-supplied cursor. Strict RFC 3339 only.
    pub fn parse(raw: &str) -> Result<Self, PageParamsError> {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| Cursor(dt.with_timezone(&Utc)))
            .map_err(|_| PageParamsError::InvalidCursor)
    }

    /// Serialize with microsecond precision, matching TIMESTAMPTZ resolution.
    pub fn encode(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Micros, true)
    }
}

/// Validated listing parameters, built at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    limit: i64,
    cursor: Option<Cursor>,
}

impl PageParams {
    pub fn new(
        limit: Option<i64>,
        cursor: Option<&str>,
        range: LimitRange,
    ) -> Result<Self, PageParamsError> {
        let limit = range.resolve(limit)?;
        let cursor = cursor.map(Cursor::parse).transpose()?;
        Ok(PageParams { limit, cursor })
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Rows to fetch: one past the limit, to learn whether more exist.
    pub fn probe_limit(&self) -> i64 {
        self.limit + 1
    }

    pub fn cursor_time(&self) -> Option<DateTime<Utc>> {
        self.cursor.map(|c| c.timestamp())
    }
}

/// A row that can anchor a continuation cursor.
pub trait PageItem {
    fn page_timestamp(&self) -> DateTime<Utc>;
}

/// One trimmed page of a listing.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_more: bool,
    pub next_cursor: Option<Cursor>,
}

impl<T: PageItem> Page<T> {
    /// Trim a `limit + 1` probe result down to a page.
    ///
    /// `has_more` is true iff the probe row existed; `next_cursor` is set
    /// iff `has_more`, anchored at the last item actually returned.
    pub fn assemble(mut rows: Vec<T>, limit: i64) -> Self {
        let has_more = rows.len() as i64 > limit;
        if has_more {
            rows.truncate(limit as usize);
        }
        let next_cursor = if has_more {
            rows.last().map(|row| Cursor::new(row.page_timestamp()))
        } else {
            None
        };

        Page {
            items: rows,
            has_more,
            next_cursor,
        }
    }

    /// Wire form of the continuation cursor.
    pub fn next_cursor_encoded(&self) -> Option<String> {
        self.next_cursor.as_ref().map(Cursor::encode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Row(DateTime<Utc>);

    impl PageItem for Row {
        fn page_timestamp(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 123_456_000).unwrap()
    }

    #[test]
    fn cursor_round_trips_at_microsecond_precision() {
        let cursor = Cursor::new(ts(0));
        let encoded = cursor.encode();
        assert_eq!(Cursor::parse(&encoded).unwrap(), cursor);
    }

    #[test]
    fn invalid_cursor_is_rejected() {
        assert_eq!(Cursor::parse("yesterday"), Err(PageParamsError::InvalidCursor));
        assert_eq!(Cursor::parse("1700000000"), Err(PageParamsError::InvalidCursor));
    }

    #[test]
    fn limit_defaults_and_bounds() {
        let params = PageParams::new(None, None, LimitRange::FEED).unwrap();
        assert_eq!(params.limit(), 10);
        assert_eq!(params.probe_limit(), 11);

        let params = PageParams::new(Some(50), None, LimitRange::FEED).unwrap();
        assert_eq!(params.limit(), 50);

        assert_eq!(
            PageParams::new(Some(0), None, LimitRange::FEED),
            Err(PageParamsError::LimitOutOfRange { min: 1, max: 50 })
        );
        assert_eq!(
            PageParams::new(Some(51), None, LimitRange::COMMENTS),
            Err(PageParamsError::LimitOutOfRange { min: 1, max: 50 })
        );
    }

    #[test]
    fn empty_source_yields_empty_page() {
        let page = Page::assemble(Vec::<Row>::new(), 10);
        assert!(page.items.is_empty());
        assert!(!page.has_more);
        assert!(page.next_cursor.is_none());
    }

    #[test]
    fn exactly_limit_rows_means_no_more() {
        let rows: Vec<Row> = (0..10).rev().map(|i| Row(ts(i))).collect();
        let page = Page::assemble(rows, 10);
        assert_eq!(page.items.len(), 10);
        assert!(!page.has_more);
        assert!(page.next_cursor.is_none());
    }

    #[test]
    fn probe_row_sets_has_more_and_cursor() {
        let rows: Vec<Row> = (0..11).rev().map(|i| Row(ts(i))).collect();
        let page = Page::assemble(rows, 10);
        assert_eq!(page.items.len(), 10);
        assert!(page.has_more);

        // The cursor anchors at the last *returned* row, not the probe row.
        let last_returned = page.items.last().unwrap().0;
        assert_eq!(page.next_cursor.unwrap().timestamp(), last_returned);
        assert_eq!(last_returned, ts(1));
    }
}
