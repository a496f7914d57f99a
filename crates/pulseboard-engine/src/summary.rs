use chrono::{DateTime, Duration, Utc};
use pulseboard_types::{MAX_WINDOW_DAYS, PostRecord};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::metrics::{MetricCard, MetricFormat};

#[derive(Debug, Default, Clone, Copy)]
struct WindowTotals {
    posts: usize,
    views: i64,
    likes: i64,
    comments: i64,
    shares: i64,
    engagement_sum: f64,
    engagement_samples: usize,
}

impl WindowTotals {
    fn add(&mut self, post: &PostRecord) {
        self.posts += 1;
        self.views += post.views.unwrap_or(0);
        self.likes += post.likes.unwrap_or(0);
        self.comments += post.comments.unwrap_or(0);
        self.shares += post.shares.unwrap_or(0);
        if let Some(rate) = post.engagement_rate {
            self.engagement_sum += rate;
            self.engagement_samples += 1;
        }
    }

    fn avg_engagement(&self) -> Option<f64> {
        if self.engagement_samples == 0 {
            None
        } else {
            Some(self.engagement_sum / self.engagement_samples as f64)
        }
    }
}

/// KPI cards comparing the latest window of published posts to the one before it
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub window_days: i64,
    pub total_posts: usize,
    /// Posts without a publish timestamp (not placed in any window)
    pub unpublished_posts: usize,
    pub cards: Vec<MetricCard>,
}

impl DashboardSummary {
    /// Current window is `(now - w, now]`, previous is `(now - 2w, now - w]`.
    ///
    /// `window_days` is clamped to `1..=MAX_WINDOW_DAYS`. Window starts that
    /// fall before the earliest representable instant saturate to it.
    pub fn build(posts: &[PostRecord], now: DateTime<Utc>, window_days: i64) -> Self {
        let window_days = window_days.clamp(1, MAX_WINDOW_DAYS);
        let window = Duration::try_days(window_days).unwrap_or_else(|| Duration::days(1));
        let current_start = now
            .checked_sub_signed(window)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let previous_start = current_start
            .checked_sub_signed(window)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        let mut current = WindowTotals::default();
        let mut previous = WindowTotals::default();
        let mut unpublished_posts = 0;

        for post in posts {
            match post.published_at {
                Some(ts) if ts > current_start && ts <= now => current.add(post),
                Some(ts) if ts > previous_start && ts <= current_start => previous.add(post),
                Some(_) => {}
                None => unpublished_posts += 1,
            }
        }

        let count_card = |title: &str, cur: i64, prev: i64| {
            MetricCard::new(title, cur as f64, MetricFormat::Count).with_previous(prev as f64)
        };

        let mut engagement = MetricCard::new(
            "Engagement",
            current.avg_engagement().unwrap_or(0.0),
            MetricFormat::Percent,
        );
        engagement.previous = previous.avg_engagement();

        let cards = vec![
            count_card("Posts", current.posts as i64, previous.posts as i64),
            count_card("Views", current.views, previous.views),
            count_card("Likes", current.likes, previous.likes),
            count_card("Comments", current.comments, previous.comments),
            count_card("Shares", current.shares, previous.shares),
            engagement,
        ];

        Self {
            window_days: window.num_days(),
            total_posts: posts.len(),
            unpublished_posts,
            cards,
        }
    }

    pub fn card(&self, title: &str) -> Option<&MetricCard> {
        self.cards.iter().find(|card| card.title == title)
    }
}

/// Aggregates for one post type tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeStats {
    pub post_type: String,
    pub posts: usize,
    pub views: i64,
    pub likes: i64,
}

/// Per-type totals, most viewed first
#[derive(Debug, Clone, Serialize)]
pub struct TypeBreakdown {
    pub rows: Vec<TypeStats>,
}

impl TypeBreakdown {
    pub fn build(posts: &[PostRecord]) -> Self {
        let mut by_type: BTreeMap<String, TypeStats> = BTreeMap::new();

        for post in posts {
            let key = post
                .post_type
                .clone()
                .unwrap_or_else(|| "unknown".to_string());
            let entry = by_type.entry(key.clone()).or_insert_with(|| TypeStats {
                post_type: key,
                posts: 0,
                views: 0,
                likes: 0,
            });
            entry.posts += 1;
            entry.views += post.views.unwrap_or(0);
            entry.likes += post.likes.unwrap_or(0);
        }

        let mut rows: Vec<TypeStats> = by_type.into_values().collect();
        // BTreeMap order is by name; stable sort keeps it for equal views
        rows.sort_by(|a, b| b.views.cmp(&a.views));

        Self { rows }
    }
}
