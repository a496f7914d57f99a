//! Sample data for tests.
//!
//! Ids are derived from small integers so expectations stay readable:
//! `user_id(1)` is `00000000-0000-0000-0000-000000000001`.

use chrono::{DateTime, TimeZone, Utc};
use pulseboard_types::{PostId, PostRecord, Session, User, UserId};
use uuid::Uuid;

pub fn user_id(n: u128) -> UserId {
    UserId::new(Uuid::from_u128(n))
}

pub fn post_id(n: u128) -> PostId {
    PostId::new(Uuid::from_u128(0xA000 + n))
}

/// Non-expiring session for `user_id(n)`
pub fn session_for(n: u128) -> Session {
    Session {
        access_token: format!("access-token-{}", n),
        token_type: "bearer".to_string(),
        refresh_token: Some(format!("refresh-token-{}", n)),
        expires_at: None,
        user: User {
            id: user_id(n),
            email: Some(format!("user{}@example.com", n)),
        },
    }
}

/// Day `day` of March 2025 at noon UTC
pub fn march(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap()
}

/// Scraped post owned by `owner`
pub fn post(n: u128, owner: UserId, published_at: Option<DateTime<Utc>>) -> PostRecord {
    PostRecord {
        id: post_id(n),
        user_id: owner,
        url: Some(format!("https://instagram.com/p/post{}", n)),
        post_type: Some(if n % 2 == 0 { "reel" } else { "carousel" }.to_string()),
        views: Some(1_000 * n as i64),
        likes: Some(100 * n as i64),
        comments: Some(10 * n as i64),
        shares: Some(n as i64),
        saves: Some(2 * n as i64),
        engagement_rate: Some(5.0 + n as f64 / 10.0),
        published_at,
        scraped_at: published_at,
    }
}

/// Three posts for `user_id(1)` published on March 1, 3 and 2 (in that order),
/// plus one post for `user_id(2)`.
pub fn mixed_owner_posts() -> Vec<PostRecord> {
    vec![
        post(1, user_id(1), Some(march(1))),
        post(3, user_id(1), Some(march(3))),
        post(2, user_id(1), Some(march(2))),
        post(9, user_id(2), Some(march(9))),
    ]
}
