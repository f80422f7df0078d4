/// Response shape tests
///
/// The listing envelopes share `{ items, hasMore, nextCursor }` with a
/// per-type items key; clients depend on the exact camelCase field names.
use chrono::{TimeZone, Utc};
use serde_json::json;
use timeline_service::models::{
    AuthorResponse, CaptionResponse, FeedPostResponse, FollowUserResponse, PaginatedComments,
    PaginatedPosts, PaginatedUsers, PostImageResponse,
};
use timeline_service::relations::FollowStatus;
use uuid::Uuid;

fn sample_post() -> FeedPostResponse {
    FeedPostResponse {
        id: Uuid::new_v4(),
        author: AuthorResponse {
            id: Uuid::new_v4(),
            username: "mina".to_string(),
            profile_image_url: None,
        },
        images: vec![PostImageResponse {
            id: Uuid::new_v4(),
            image_url: "https://cdn.example.com/a.jpg".to_string(),
            order_index: 0,
            original_file_name: Some("a.jpg".to_string()),
            mime_type: Some("image/jpeg".to_string()),
        }],
        caption: Some(CaptionResponse {
            id: Uuid::new_v4(),
            text: "first light".to_string(),
            is_bold: false,
            is_italic: true,
            font_size: 14,
        }),
        like_count: 3,
        is_liked_by_me: true,
        comment_count: 1,
        created_at: Utc.with_ymd_and_hms(2025, 1, 22, 10, 0, 0).unwrap(),
    }
}

#[test]
fn feed_envelope_uses_camel_case_keys() {
    let page = PaginatedPosts {
        posts: vec![sample_post()],
        has_more: true,
        next_cursor: Some("2025-01-22T10:00:00.000000Z".to_string()),
    };

    let value = serde_json::to_value(&page).unwrap();
    assert!(value.get("posts").is_some());
    assert_eq!(value["hasMore"], json!(true));
    assert_eq!(value["nextCursor"], json!("2025-01-22T10:00:00.000000Z"));

    let item = &value["posts"][0];
    assert!(item.get("likeCount").is_some());
    assert_eq!(item["isLikedByMe"], json!(true));
    assert!(item.get("commentCount").is_some());
    assert!(item.get("createdAt").is_some());
    assert!(item["author"].get("profileImageUrl").is_some());
    assert!(item["images"][0].get("imageUrl").is_some());
    assert!(item["images"][0].get("orderIndex").is_some());
    assert_eq!(item["caption"]["isItalic"], json!(true));
}

#[test]
fn exhausted_feed_envelope_has_null_cursor() {
    let page = PaginatedPosts {
        posts: vec![],
        has_more: false,
        next_cursor: None,
    };

    let value = serde_json::to_value(&page).unwrap();
    assert_eq!(value["hasMore"], json!(false));
    assert_eq!(value["nextCursor"], serde_json::Value::Null);
}

#[test]
fn follow_list_entry_carries_both_status_flags() {
    let page = PaginatedUsers {
        users: vec![FollowUserResponse {
            id: Uuid::new_v4(),
            username: "jun".to_string(),
            profile_image_url: Some("https://cdn.example.com/p.jpg".to_string()),
            follow_status: FollowStatus {
                is_followed_by_me: true,
                is_following_me: false,
            },
            followed_at: Utc.with_ymd_and_hms(2025, 1, 20, 9, 30, 0).unwrap(),
        }],
        has_more: false,
        next_cursor: None,
    };

    let value = serde_json::to_value(&page).unwrap();
    let entry = &value["users"][0];
    assert_eq!(entry["followStatus"]["isFollowedByMe"], json!(true));
    assert_eq!(entry["followStatus"]["isFollowingMe"], json!(false));
    assert!(entry.get("followedAt").is_some());
}

#[test]
fn comment_envelope_deserializes_from_wire_json() {
    let json = r#"{
        "comments": [
            {
                "id": "7e6ff0f4-3db4-4c9f-9b3a-8f1a2a6f3c11",
                "text": "nice shot",
                "author": {
                    "id": "2c1ff0f4-3db4-4c9f-9b3a-8f1a2a6f3c22",
                    "username": "mina",
                    "profileImageUrl": null
                },
                "createdAt": "2025-01-22T10:00:00Z"
            }
        ],
        "hasMore": false,
        "nextCursor": null
    }"#;

    let page: PaginatedComments =
        serde_json::from_str(json).expect("Failed to deserialize PaginatedComments");

    assert_eq!(page.comments.len(), 1);
    assert_eq!(page.comments[0].text, "nice shot");
    assert_eq!(page.comments[0].author.username, "mina");
    assert!(!page.has_more);
    assert!(page.next_cursor.is_none());
}
