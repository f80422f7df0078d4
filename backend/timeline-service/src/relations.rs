//! Batch relationship resolution.
//!
//! Listings enrich each page item with viewer-relative flags (liked, followed,
//! follows me) and per-item counts. The repositories issue exactly one query
//! per relation kind over the whole page (`ANY($ids)` / `GROUP BY`); the
//! helpers here turn those grouped results into per-subject maps, zero-filled
//! for subjects absent from the result set.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Follow relationship between the viewer and one listed user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowStatus {
    pub is_followed_by_me: bool,
    pub is_following_me: bool,
}

/// Deduplicate subject ids before querying, preserving first-seen order.
pub fn dedup_ids(ids: &[Uuid]) -> Vec<Uuid> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

/// Map each requested subject to whether it appeared in a relation query
/// result. Absent subjects map to `false`.
pub fn presence_map(
    requested: &[Uuid],
    present: impl IntoIterator<Item = Uuid>,
) -> HashMap<Uuid, bool> {
    let present: HashSet<Uuid> = present.into_iter().collect();
    requested
        .iter()
        .map(|id| (*id, present.contains(id)))
        .collect()
}

/// Map each requested subject to its grouped count. Absent subjects map to 0.
pub fn count_map(requested: &[Uuid], counts: Vec<(Uuid, i64)>) -> HashMap<Uuid, i64> {
    let grouped: HashMap<Uuid, i64> = counts.into_iter().collect();
    requested
        .iter()
        .map(|id| (*id, grouped.get(id).copied().unwrap_or(0)))
        .collect()
}

/// Combine directional follow-edge results into per-user status flags.
pub fn follow_status_map(
    requested: &[Uuid],
    followed_by_viewer: Vec<Uuid>,
    following_viewer: Vec<Uuid>,
) -> HashMap<Uuid, FollowStatus> {
    let followed = presence_map(requested, followed_by_viewer);
    let following = presence_map(requested, following_viewer);
    requested
        .iter()
        .map(|id| {
            (
                *id,
                FollowStatus {
                    is_followed_by_me: followed.get(id).copied().unwrap_or(false),
                    is_following_me: following.get(id).copied().unwrap_or(false),
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_map_zero_fills_absent_subjects() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();

        let map = presence_map(&[a, b, c], vec![a, b]);
        assert_eq!(map[&a], true);
        assert_eq!(map[&b], true);
        assert_eq!(map[&c], false);
    }

    #[test]
    fn count_map_zero_fills_absent_subjects() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let map = count_map(&[a, b], vec![(a, 7)]);
        assert_eq!(map[&a], 7);
        assert_eq!(map[&b], 0);
    }

    #[test]
    fn empty_request_yields_empty_maps() {
        assert!(presence_map(&[], vec![Uuid::new_v4()]).is_empty());
        assert!(count_map(&[], vec![]).is_empty());
        assert!(follow_status_map(&[], vec![], vec![]).is_empty());
    }

    #[test]
    fn dedup_preserves_first_seen_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(dedup_ids(&[a, b, a, b, a]), vec![a, b]);
    }

    #[test]
    fn follow_status_directions_are_independent() {
        let mutual = Uuid::new_v4();
        let fan = Uuid::new_v4();
        let idol = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let map = follow_status_map(
            &[mutual, fan, idol, stranger],
            vec![mutual, idol],
            vec![mutual, fan],
        );

        assert_eq!(
            map[&mutual],
            FollowStatus { is_followed_by_me: true, is_following_me: true }
        );
        assert_eq!(
            map[&idol],
            FollowStatus { is_followed_by_me: true, is_following_me: false }
        );
        assert_eq!(
            map[&fan],
            FollowStatus { is_followed_by_me: false, is_following_me: true }
        );
        assert_eq!(map[&stranger], FollowStatus::default());
    }
}
