//! Dashboard handler
//!
//! Owns the feed for the lifetime of the TUI. The initial load and every
//! `r` refresh run as tasks on the tokio runtime while the renderer loop
//! keeps drawing from the feed's watch channel.

use std::sync::Arc;

use anyhow::Result;
use is_terminal::IsTerminal;
use pulseboard_runtime::Pulseboard;
use tokio::runtime::Runtime;
use tracing::{info, warn};

use super::HandlerContext;
use crate::presentation::TuiRenderer;
use crate::presentation::presenters::{self, ScreenContext};

pub fn handle(ctx: &HandlerContext, runtime: &Runtime) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        warn!("stdout is not a terminal, printing the summary instead");
        return super::posts::summary(ctx, runtime, None);
    }

    let app = Pulseboard::open(ctx.data_dir())?;
    let feed = Arc::new(app.posts_feed()?);

    let signed_in_as = app.stored_session()?.map(|session| {
        session
            .user
            .email
            .unwrap_or_else(|| session.user.id.to_string())
    });
    let context = ScreenContext {
        window_days: app.config().dashboard.window_days,
        recent_limit: app.config().dashboard.recent_limit,
        settings: presenters::present_settings(ctx.data_dir(), app.config(), signed_in_as),
    };

    {
        let feed = feed.clone();
        runtime.spawn(async move {
            feed.mount().await;
        });
    }

    let handle = runtime.handle().clone();
    let refresh_feed = feed.clone();
    let on_refresh = move || {
        let feed = refresh_feed.clone();
        handle.spawn(async move {
            // Outcome lands in the feed state the renderer is watching
            let _ = feed.refresh().await;
        });
    };

    info!(data_dir = %ctx.data_dir().display(), "dashboard opened");
    TuiRenderer::new(context).run(feed.subscribe(), on_refresh)
}
