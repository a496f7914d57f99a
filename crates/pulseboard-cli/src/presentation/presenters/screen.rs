//! Builds the dashboard screen from the feed snapshot and the router.

use chrono::{DateTime, Utc};
use pulseboard_engine::{DashboardSummary, Navigation, TypeBreakdown};
use pulseboard_runtime::FeedState;
use pulseboard_types::PostRecord;

use super::posts::present_table_row;
use super::summary::{present_analytics_rows, present_metric_card};
use crate::presentation::formatters::{
    format_optional_count, format_percent, format_relative_time, format_timestamp,
};
use crate::presentation::router::{Route, Router};
use crate::presentation::view_models::{
    AnalyticsViewModel, NavEntryViewModel, OverviewViewModel, PageViewModel, PostDetailViewModel,
    PostTableViewModel, ScreenViewModel, SettingsViewModel, SidebarViewModel, StatusBarViewModel,
    StatusLevel,
};

/// Inputs that do not change while the dashboard is open
#[derive(Debug, Clone)]
pub struct ScreenContext {
    pub window_days: i64,
    pub recent_limit: usize,
    pub settings: SettingsViewModel,
}

pub fn present_screen(
    state: &FeedState,
    router: &Router,
    selected: usize,
    nav: &Navigation,
    ctx: &ScreenContext,
    now: DateTime<Utc>,
) -> ScreenViewModel {
    let path = router.current();

    ScreenViewModel {
        sidebar: present_sidebar(nav, path),
        page: present_page(state, router.route(), selected, ctx, now),
        status_bar: present_status_bar(state, path),
    }
}

pub fn present_sidebar(nav: &Navigation, path: &str) -> SidebarViewModel {
    let active = nav.active_index(path);
    SidebarViewModel {
        items: nav
            .items()
            .iter()
            .enumerate()
            .map(|(idx, item)| NavEntryViewModel {
                icon: item.icon,
                name: item.name,
                path: item.path,
                active: active == Some(idx),
            })
            .collect(),
    }
}

fn message(title: &str, text: impl Into<String>, level: StatusLevel) -> PageViewModel {
    PageViewModel::Message {
        title: title.to_string(),
        text: text.into(),
        level,
    }
}

fn present_page(
    state: &FeedState,
    route: Route,
    selected: usize,
    ctx: &ScreenContext,
    now: DateTime<Utc>,
) -> PageViewModel {
    let needs_posts = !matches!(route, Route::Settings | Route::NotFound(_));
    if needs_posts && state.data.is_empty() {
        if let Some(error) = &state.error {
            return message("Error", error.clone(), StatusLevel::Error);
        }
        if state.is_loading {
            return message("Loading", "Loading posts...", StatusLevel::Info);
        }
    }

    match route {
        Route::Overview => PageViewModel::Overview(present_overview(&state.data, ctx, now)),
        Route::Posts if state.data.is_empty() => message(
            "Posts",
            "No posts yet. They show up here once the scraper has stored them.",
            StatusLevel::Info,
        ),
        Route::Posts => PageViewModel::Posts(PostTableViewModel {
            title: format!("Posts ({})", state.data.len()),
            rows: state.data.iter().map(present_table_row).collect(),
            selected: Some(selected.min(state.data.len() - 1)),
        }),
        Route::Post(id) => match state.data.iter().find(|post| post.id.to_string() == id) {
            Some(post) => PageViewModel::PostDetail(present_post_detail(post, now)),
            None => message(
                "Not found",
                format!("Post {} was not found", id),
                StatusLevel::Warning,
            ),
        },
        Route::Analytics => PageViewModel::Analytics(AnalyticsViewModel {
            title: "Views by post type".to_string(),
            rows: present_analytics_rows(&TypeBreakdown::build(&state.data)),
        }),
        Route::Settings => PageViewModel::Settings(ctx.settings.clone()),
        Route::NotFound(path) => message(
            "Not found",
            format!("No page at {}", path),
            StatusLevel::Warning,
        ),
    }
}

fn present_overview(posts: &[PostRecord], ctx: &ScreenContext, now: DateTime<Utc>) -> OverviewViewModel {
    let summary = DashboardSummary::build(posts, now, ctx.window_days);

    OverviewViewModel {
        cards_title: format!("Last {} days", summary.window_days),
        cards: summary.cards.iter().map(present_metric_card).collect(),
        recent: PostTableViewModel {
            title: "Recent posts".to_string(),
            rows: posts
                .iter()
                .take(ctx.recent_limit)
                .map(present_table_row)
                .collect(),
            selected: None,
        },
    }
}

pub fn present_post_detail(post: &PostRecord, now: DateTime<Utc>) -> PostDetailViewModel {
    let published = match post.published_at {
        Some(ts) => format!(
            "{} ({})",
            format_timestamp(Some(ts)),
            format_relative_time(ts, now)
        ),
        None => "unpublished".to_string(),
    };

    PostDetailViewModel {
        title: format!("Post {}", post.id.short()),
        fields: vec![
            ("Type", post.post_type.clone().unwrap_or_else(|| "-".to_string())),
            ("Published", published),
            ("Views", format_optional_count(post.views)),
            ("Likes", format_optional_count(post.likes)),
            ("Comments", format_optional_count(post.comments)),
            ("Shares", format_optional_count(post.shares)),
            ("Saves", format_optional_count(post.saves)),
            (
                "Engagement",
                post.engagement_rate
                    .map(format_percent)
                    .unwrap_or_else(|| "-".to_string()),
            ),
            ("Scraped", format_timestamp(post.scraped_at)),
            ("URL", post.url.clone().unwrap_or_else(|| "-".to_string())),
            ("ID", post.id.to_string()),
        ],
    }
}

pub fn present_status_bar(state: &FeedState, path: &str) -> StatusBarViewModel {
    let (level, message) = match (&state.error, state.is_loading) {
        (Some(error), _) => (StatusLevel::Error, error.clone()),
        (None, true) => (StatusLevel::Info, "Loading...".to_string()),
        (None, false) => (StatusLevel::Success, "Up to date".to_string()),
    };

    StatusBarViewModel {
        level,
        message,
        record_count: state.data.len(),
        path: path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ctx() -> ScreenContext {
        ScreenContext {
            window_days: 7,
            recent_limit: 2,
            settings: SettingsViewModel { entries: vec![] },
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_initial_state_shows_loading() {
        let state = FeedState::default();
        let screen = present_screen(
            &state,
            &Router::new(),
            0,
            &Navigation::default(),
            &ctx(),
            now(),
        );

        assert!(matches!(
            screen.page,
            PageViewModel::Message { level: StatusLevel::Info, .. }
        ));
        assert_eq!(screen.status_bar.message, "Loading...");
        assert!(screen.sidebar.items[0].active);
    }

    #[test]
    fn test_error_without_rows_fills_page() {
        let state = FeedState {
            data: vec![],
            is_loading: false,
            error: Some("Session not found".to_string()),
        };
        let screen = present_screen(
            &state,
            &Router::at("/posts"),
            0,
            &Navigation::default(),
            &ctx(),
            now(),
        );

        assert_eq!(
            screen.page,
            PageViewModel::Message {
                title: "Error".to_string(),
                text: "Session not found".to_string(),
                level: StatusLevel::Error,
            }
        );
        assert_eq!(screen.status_bar.level, StatusLevel::Error);
        assert!(screen.sidebar.items[1].active);
    }

    #[test]
    fn test_settings_ignores_feed_state() {
        let screen = present_screen(
            &FeedState::default(),
            &Router::at("/settings"),
            0,
            &Navigation::default(),
            &ctx(),
            now(),
        );
        assert!(matches!(screen.page, PageViewModel::Settings(_)));
    }

    #[test]
    fn test_unknown_route_highlights_nothing() {
        let screen = present_screen(
            &FeedState::default(),
            &Router::at("/billing"),
            0,
            &Navigation::default(),
            &ctx(),
            now(),
        );
        assert!(screen.sidebar.items.iter().all(|item| !item.active));
        assert!(matches!(
            screen.page,
            PageViewModel::Message { level: StatusLevel::Warning, .. }
        ));
    }
}
