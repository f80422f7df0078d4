//! Listing visibility rules.
//!
//! Two rules narrow every candidate set before the pagination probe runs, so
//! exclusion never underfills a page:
//!
//! - soft-deleted content is invisible to everyone;
//! - a post a viewer has reported is invisible to that viewer only. Other
//!   viewers still see it until moderation deletes it. Report suppression
//!   applies to post listings; comment and follow listings only filter
//!   soft-deletes.

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use uuid::Uuid;

/// Lifecycle state of soft-deletable content (posts, comments).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentState {
    Active,
    Deleted { deleted_at: DateTime<Utc> },
}

impl ContentState {
    /// Derive the state from a nullable `deleted_at` column.
    pub fn from_deleted_at(deleted_at: Option<DateTime<Utc>>) -> Self {
        match deleted_at {
            None => ContentState::Active,
            Some(at) => ContentState::Deleted { deleted_at: at },
        }
    }

    /// Soft-delete transition. Deleting already-deleted content keeps the
    /// original deletion time.
    pub fn delete(self, at: DateTime<Utc>) -> Self {
        match self {
            ContentState::Active => ContentState::Deleted { deleted_at: at },
            deleted @ ContentState::Deleted { .. } => deleted,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, ContentState::Active)
    }
}

/// Per-viewer suppression set for post listings.
#[derive(Debug, Clone)]
pub struct ViewerVisibility {
    reported_post_ids: HashSet<Uuid>,
}

impl ViewerVisibility {
    pub fn new(reported_post_ids: Vec<Uuid>) -> Self {
        Self {
            reported_post_ids: reported_post_ids.into_iter().collect(),
        }
    }

    /// Ids to exclude in the candidate query, ahead of the limit+1 probe.
    pub fn excluded_ids(&self) -> Vec<Uuid> {
        self.reported_post_ids.iter().copied().collect()
    }

    /// Pure form of the same rule: visible content the viewer has not
    /// reported.
    pub fn admits(&self, post_id: Uuid, state: ContentState) -> bool {
        state.is_visible() && !self.reported_post_ids.contains(&post_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn delete_transition_is_idempotent() {
        let state = ContentState::Active.delete(at(10));
        assert_eq!(state, ContentState::Deleted { deleted_at: at(10) });

        // A second delete does not move the deletion time.
        assert_eq!(state.delete(at(20)), ContentState::Deleted { deleted_at: at(10) });
    }

    #[test]
    fn state_derives_from_column() {
        assert!(ContentState::from_deleted_at(None).is_visible());
        assert!(!ContentState::from_deleted_at(Some(at(5))).is_visible());
    }

    #[test]
    fn report_suppression_is_viewer_specific() {
        let reported_post = Uuid::new_v4();
        let other_post = Uuid::new_v4();

        let reporter = ViewerVisibility::new(vec![reported_post]);
        let bystander = ViewerVisibility::new(vec![]);

        assert!(!reporter.admits(reported_post, ContentState::Active));
        assert!(reporter.admits(other_post, ContentState::Active));

        // The same post stays visible to a viewer who has not reported it.
        assert!(bystander.admits(reported_post, ContentState::Active));
    }

    #[test]
    fn deleted_content_is_invisible_to_everyone() {
        let post = Uuid::new_v4();
        let viewer = ViewerVisibility::new(vec![]);
        assert!(!viewer.admits(post, ContentState::from_deleted_at(Some(at(1)))));
    }
}
