use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::ids::{PostId, UserId};

/// Backend table holding scraped post rows
pub const POSTS_TABLE: &str = "posts";

/// Longest summary comparison window, in days
pub const MAX_WINDOW_DAYS: i64 = 3650;

/// One scraped social-media post and its engagement metrics.
///
/// Rows are written by the ingestion process; the dashboard only reads them.
/// Every metric is optional because a post may be registered before it has
/// been scraped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: PostId,
    pub user_id: UserId,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub post_type: Option<String>,
    #[serde(default)]
    pub views: Option<i64>,
    #[serde(default)]
    pub likes: Option<i64>,
    #[serde(default)]
    pub comments: Option<i64>,
    #[serde(default)]
    pub shares: Option<i64>,
    #[serde(default)]
    pub saves: Option<i64>,
    #[serde(default)]
    pub engagement_rate: Option<f64>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub scraped_at: Option<DateTime<Utc>>,
}

impl PostRecord {
    /// Bare record for a post that has not been scraped yet
    pub fn unscraped(id: PostId, user_id: UserId) -> Self {
        Self {
            id,
            user_id,
            url: None,
            post_type: None,
            views: None,
            likes: None,
            comments: None,
            shares: None,
            saves: None,
            engagement_rate: None,
            published_at: None,
            scraped_at: None,
        }
    }

    pub fn is_scraped(&self) -> bool {
        self.scraped_at.is_some()
    }

    /// Sum of likes, comments, shares and saves (absent counts as zero)
    pub fn interactions(&self) -> i64 {
        [self.likes, self.comments, self.shares, self.saves]
            .into_iter()
            .flatten()
            .sum()
    }
}

/// Newest `published_at` first; absent timestamps sort after every dated post.
pub fn compare_published_desc(a: &PostRecord, b: &PostRecord) -> Ordering {
    match (a.published_at, b.published_at) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort by [`compare_published_desc`]
pub fn sort_published_desc(posts: &mut [PostRecord]) {
    posts.sort_by(compare_published_desc);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn post(n: u128, published: Option<DateTime<Utc>>) -> PostRecord {
        let mut post = PostRecord::unscraped(
            PostId::new(Uuid::from_u128(n)),
            UserId::new(Uuid::from_u128(1)),
        );
        post.published_at = published;
        post
    }

    #[test]
    fn test_deserialize_nulls_and_missing_keys() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000010",
            "user_id": "00000000-0000-0000-0000-000000000001",
            "url": null,
            "views": 120
        }"#;
        let record: PostRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.views, Some(120));
        assert_eq!(record.url, None);
        assert_eq!(record.likes, None);
        assert!(!record.is_scraped());
    }

    #[test]
    fn test_interactions_skip_absent_metrics() {
        let mut record = post(10, None);
        record.likes = Some(5);
        record.shares = Some(2);
        assert_eq!(record.interactions(), 7);
    }

    #[test]
    fn test_sort_published_desc_absent_last() {
        let t1 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
        let t3 = Utc.with_ymd_and_hms(2025, 1, 3, 0, 0, 0).unwrap();

        let mut posts = vec![
            post(1, Some(t1)),
            post(2, None),
            post(3, Some(t3)),
            post(4, None),
            post(5, Some(t2)),
        ];
        sort_published_desc(&mut posts);

        let order: Vec<u128> = posts.iter().map(|p| p.id.as_uuid().as_u128()).collect();
        assert_eq!(order, vec![3, 5, 1, 2, 4]);
    }
}
