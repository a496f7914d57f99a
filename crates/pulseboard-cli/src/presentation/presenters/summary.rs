use pulseboard_engine::{DashboardSummary, MetricCard, MetricFormat, TypeBreakdown};

use crate::presentation::formatters::{format_change, format_compact, format_percent};
use crate::presentation::view_models::{
    AnalyticsRowViewModel, CommandResultViewModel, MetricCardViewModel, StatusBadge,
    SummaryViewModel, TypeRowViewModel,
};

pub fn present_metric_card(card: &MetricCard) -> MetricCardViewModel {
    let display_value = match card.format {
        MetricFormat::Count => format_compact(card.value.round() as i64),
        MetricFormat::Percent => format_percent(card.value),
    };
    let change = card.change();
    let trend = card.trend();

    MetricCardViewModel {
        title: card.title.clone(),
        value: card.value,
        display_value,
        previous: card.previous,
        change_percent: change,
        change_display: trend.map(|_| format_change(change)),
        trend,
    }
}

pub fn present_type_rows(breakdown: &TypeBreakdown) -> Vec<TypeRowViewModel> {
    let total_views: i64 = breakdown.rows.iter().map(|row| row.views).sum();

    breakdown
        .rows
        .iter()
        .map(|row| TypeRowViewModel {
            post_type: row.post_type.clone(),
            posts: row.posts,
            views: row.views,
            likes: row.likes,
            view_share: if total_views > 0 {
                row.views as f64 / total_views as f64
            } else {
                0.0
            },
        })
        .collect()
}

pub fn present_analytics_rows(breakdown: &TypeBreakdown) -> Vec<AnalyticsRowViewModel> {
    present_type_rows(breakdown)
        .into_iter()
        .map(|row| AnalyticsRowViewModel {
            posts: row.posts.to_string(),
            views: format_compact(row.views),
            likes: format_compact(row.likes),
            share: row.view_share,
            share_display: format_percent(row.view_share * 100.0),
            post_type: row.post_type,
        })
        .collect()
}

pub fn present_summary(
    summary: &DashboardSummary,
    breakdown: &TypeBreakdown,
) -> CommandResultViewModel<SummaryViewModel> {
    let content = SummaryViewModel {
        window_days: summary.window_days,
        total_posts: summary.total_posts,
        unpublished_posts: summary.unpublished_posts,
        cards: summary.cards.iter().map(present_metric_card).collect(),
        types: present_type_rows(breakdown),
    };

    let result = CommandResultViewModel::new(content);
    if summary.total_posts == 0 {
        return result.with_badge(StatusBadge::info("No posts yet"));
    }
    result
}
