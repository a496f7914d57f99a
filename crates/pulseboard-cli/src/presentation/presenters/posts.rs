use pulseboard_types::PostRecord;

use crate::presentation::formatters::{format_date, format_optional_count, format_percent};
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, PostListViewModel, PostRowViewModel, PostTableRowViewModel,
};

pub fn present_post_row(post: &PostRecord) -> PostRowViewModel {
    PostRowViewModel {
        id: post.id.to_string(),
        short_id: post.id.short(),
        post_type: post.post_type.clone(),
        url: post.url.clone(),
        views: post.views,
        likes: post.likes,
        comments: post.comments,
        shares: post.shares,
        saves: post.saves,
        engagement_rate: post.engagement_rate,
        published_at: post.published_at,
        scraped_at: post.scraped_at,
    }
}

pub fn present_table_row(post: &PostRecord) -> PostTableRowViewModel {
    PostTableRowViewModel {
        short_id: post.id.short(),
        published: format_date(post.published_at),
        post_type: post.post_type.clone().unwrap_or_else(|| "-".to_string()),
        views: format_optional_count(post.views),
        likes: format_optional_count(post.likes),
        comments: format_optional_count(post.comments),
        engagement: post
            .engagement_rate
            .map(format_percent)
            .unwrap_or_else(|| "-".to_string()),
    }
}

pub fn present_post_list(posts: &[PostRecord]) -> CommandResultViewModel<PostListViewModel> {
    let content = PostListViewModel {
        posts: posts.iter().map(present_post_row).collect(),
    };

    let result = CommandResultViewModel::new(content);
    if posts.is_empty() {
        return result.with_suggestion(
            Guidance::new("Posts appear here once the scraper has stored them"),
        );
    }
    result
}
