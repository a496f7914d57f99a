use anyhow::Result;
use chrono::Utc;
use pulseboard_engine::{DashboardSummary, TypeBreakdown};
use pulseboard_runtime::{FeedState, Pulseboard};
use tokio::runtime::Runtime;

use super::HandlerContext;
use crate::presentation::presenters;

/// One refresh of the feed; a failed refresh is the command's error
fn load(app: &Pulseboard, runtime: &Runtime, limit: Option<usize>) -> Result<FeedState> {
    let mut feed = app.posts_feed()?;
    if let Some(limit) = limit {
        feed = feed.with_limit(limit);
    }
    runtime.block_on(feed.refresh())?;
    Ok(feed.state())
}

pub fn list(ctx: &HandlerContext, runtime: &Runtime, limit: Option<usize>) -> Result<()> {
    let app = Pulseboard::open(ctx.data_dir())?;
    let state = load(&app, runtime, limit)?;
    ctx.render(presenters::present_post_list(&state.data))
}

pub fn summary(ctx: &HandlerContext, runtime: &Runtime, window_days: Option<i64>) -> Result<()> {
    let app = Pulseboard::open(ctx.data_dir())?;
    let window_days = window_days.unwrap_or(app.config().dashboard.window_days);

    let state = load(&app, runtime, None)?;
    let summary = DashboardSummary::build(&state.data, Utc::now(), window_days);
    let breakdown = TypeBreakdown::build(&state.data);
    ctx.render(presenters::present_summary(&summary, &breakdown))
}
