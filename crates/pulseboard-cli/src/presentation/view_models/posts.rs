use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::CsvExport;

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRowViewModel {
    pub id: String,
    #[serde(skip)]
    pub short_id: String,
    pub post_type: Option<String>,
    pub url: Option<String>,
    pub views: Option<i64>,
    pub likes: Option<i64>,
    pub comments: Option<i64>,
    pub shares: Option<i64>,
    pub saves: Option<i64>,
    pub engagement_rate: Option<f64>,
    pub published_at: Option<DateTime<Utc>>,
    pub scraped_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct PostListViewModel {
    pub posts: Vec<PostRowViewModel>,
}

// --------------------------------------------------------
// Display / CSV
// --------------------------------------------------------

impl fmt::Display for PostListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use crate::presentation::views::PostListView;
        write!(f, "{}", PostListView::new(self))
    }
}

fn opt_to_string<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

impl CsvExport for PostListViewModel {
    fn csv_header(&self) -> Vec<&'static str> {
        vec![
            "id",
            "published_at",
            "post_type",
            "views",
            "likes",
            "comments",
            "shares",
            "saves",
            "engagement_rate",
            "url",
        ]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        self.posts
            .iter()
            .map(|post| {
                vec![
                    post.id.clone(),
                    post.published_at
                        .map(|ts| ts.to_rfc3339())
                        .unwrap_or_default(),
                    opt_to_string(&post.post_type),
                    opt_to_string(&post.views),
                    opt_to_string(&post.likes),
                    opt_to_string(&post.comments),
                    opt_to_string(&post.shares),
                    opt_to_string(&post.saves),
                    opt_to_string(&post.engagement_rate),
                    opt_to_string(&post.url),
                ]
            })
            .collect()
    }
}
