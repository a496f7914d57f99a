//! TUI Renderer for the dashboard
//!
//! Runs the terminal event loop. Post data lives in the feed; each tick the
//! loop takes the latest `FeedState` snapshot from the watch channel, builds a
//! `ScreenViewModel` through `DashboardApp` and draws it with the view widgets.
//!
//! Refreshes are requested through a callback so the loop never blocks on the
//! network. The terminal is restored on every exit path, panics included.

mod app;

pub use app::{AppAction, DashboardApp};

use std::io;
use std::panic;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use pulseboard_runtime::FeedState;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use tokio::sync::watch;

use crate::presentation::presenters::ScreenContext;
use crate::presentation::view_models::{PageViewModel, ScreenViewModel};
use crate::presentation::views::tui::{
    AnalyticsView, MessageView, MetricCardsView, PostDetailView, PostsTableView, SettingsView,
    SidebarView, StatusBarView,
};

const SIDEBAR_WIDTH: u16 = 22;

pub struct TuiRenderer {
    app: DashboardApp,
    context: ScreenContext,
}

impl TuiRenderer {
    pub fn new(context: ScreenContext) -> Self {
        Self {
            app: DashboardApp::new(),
            context,
        }
    }

    /// Take over the terminal until the user quits.
    ///
    /// `on_refresh` is called for every `r` press and must return immediately.
    pub fn run(mut self, feed: watch::Receiver<FeedState>, on_refresh: impl FnMut()) -> Result<()> {
        enable_raw_mode()?;
        let guard = TerminalGuard::new();
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        install_panic_hook();
        let result = self.event_loop(&mut terminal, feed, on_refresh);
        // back to the default hook
        let _ = panic::take_hook();

        guard.release()?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        feed: watch::Receiver<FeedState>,
        mut on_refresh: impl FnMut(),
    ) -> Result<()> {
        loop {
            let state = feed.borrow().clone();
            let screen = self.app.screen(&state, &self.context, Utc::now());
            terminal.draw(|f| draw(f, &screen))?;

            // Timeout doubles as the redraw tick for background refreshes
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                match self.app.handle_key(key, &state.data) {
                    AppAction::Quit => break,
                    AppAction::Refresh => on_refresh(),
                    AppAction::None => {}
                }
            }
        }

        Ok(())
    }
}

/// Leaves raw mode and the alternate screen when dropped, unwinding included
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
    armed: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self::with_restore(restore_terminal)
    }

    fn with_restore(restore: fn() -> io::Result<()>) -> Self {
        Self {
            restore,
            armed: true,
        }
    }

    /// Restore now and report the outcome instead of ignoring it on drop
    fn release(mut self) -> io::Result<()> {
        self.armed = false;
        (self.restore)()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = (self.restore)();
        }
    }
}

/// Attempts every step even if an earlier one fails; returns the first error
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    raw.and(screen)
}

/// The panic message must be printed after leaving the alternate screen
fn install_panic_hook() {
    let default = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default(info);
    }));
}

/// Layout: [Sidebar | Page] above a full-width status bar
pub fn draw(f: &mut Frame, screen: &ScreenViewModel) {
    let rows = Layout::vertical([Constraint::Min(5), Constraint::Length(3)]).split(f.area());
    let columns = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(rows[0]);

    f.render_widget(SidebarView::new(&screen.sidebar), columns[0]);

    let page_area = columns[1];
    match &screen.page {
        PageViewModel::Message { title, text, level } => {
            f.render_widget(MessageView::new(title, text, *level), page_area);
        }
        PageViewModel::Overview(overview) => {
            let chunks =
                Layout::vertical([Constraint::Length(6), Constraint::Min(4)]).split(page_area);
            f.render_widget(
                MetricCardsView::new(&overview.cards, &overview.cards_title),
                chunks[0],
            );
            f.render_widget(PostsTableView::new(&overview.recent), chunks[1]);
        }
        PageViewModel::Posts(table) => {
            f.render_widget(PostsTableView::new(table), page_area);
        }
        PageViewModel::PostDetail(detail) => {
            f.render_widget(PostDetailView::new(detail), page_area);
        }
        PageViewModel::Analytics(analytics) => {
            f.render_widget(AnalyticsView::new(analytics), page_area);
        }
        PageViewModel::Settings(settings) => {
            f.render_widget(SettingsView::new(settings), page_area);
        }
    }

    f.render_widget(StatusBarView::new(&screen.status_bar), rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static RESTORES: AtomicUsize = AtomicUsize::new(0);

    fn count_restore() -> io::Result<()> {
        RESTORES.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    #[test]
    fn test_guard_restores_on_panic_and_release() {
        let result = panic::catch_unwind(|| {
            let _guard = TerminalGuard::with_restore(count_restore);
            panic!("draw failed");
        });
        assert!(result.is_err());
        assert_eq!(RESTORES.load(Ordering::SeqCst), 1);

        TerminalGuard::with_restore(count_restore).release().unwrap();
        assert_eq!(RESTORES.load(Ordering::SeqCst), 2, "release restores once");
    }
}
