use std::fmt;

use crate::presentation::formatters::{format_date, format_optional_count, format_percent};
use crate::presentation::view_models::PostListViewModel;

pub struct PostListView<'a> {
    data: &'a PostListViewModel,
}

impl<'a> PostListView<'a> {
    pub fn new(data: &'a PostListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for PostListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.posts.is_empty() {
            writeln!(f, "No posts found.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:<9} {:<11} {:<9} {:>7} {:>7} {:>8} {:>6}  URL",
            "ID", "PUBLISHED", "TYPE", "VIEWS", "LIKES", "COMMENTS", "ENG"
        )?;
        writeln!(f, "{}", "-".repeat(80))?;

        for post in &self.data.posts {
            writeln!(
                f,
                "{:<9} {:<11} {:<9} {:>7} {:>7} {:>8} {:>6}  {}",
                post.short_id,
                format_date(post.published_at),
                post.post_type.as_deref().unwrap_or("-"),
                format_optional_count(post.views),
                format_optional_count(post.likes),
                format_optional_count(post.comments),
                post.engagement_rate
                    .map(format_percent)
                    .unwrap_or_else(|| "-".to_string()),
                post.url.as_deref().unwrap_or("")
            )?;
        }

        Ok(())
    }
}
