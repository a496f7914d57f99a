//! Dashboard UI state: current route, back stack and row selection.
//!
//! Owns no post data. Keys are interpreted against the rows the feed held
//! when the key arrived.

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pulseboard_engine::Navigation;
use pulseboard_runtime::FeedState;
use pulseboard_types::PostRecord;

use crate::presentation::presenters::{ScreenContext, present_screen};
use crate::presentation::router::{Route, Router};
use crate::presentation::view_models::ScreenViewModel;

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    None,
    Refresh,
    Quit,
}

pub struct DashboardApp {
    router: Router,
    nav: Navigation,
    selected: usize,
}

impl DashboardApp {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            nav: Navigation::default(),
            selected: 0,
        }
    }

    pub fn current_path(&self) -> &str {
        self.router.current()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn screen(
        &self,
        state: &FeedState,
        ctx: &ScreenContext,
        now: DateTime<Utc>,
    ) -> ScreenViewModel {
        present_screen(state, &self.router, self.selected, &self.nav, ctx, now)
    }

    pub fn handle_key(&mut self, key: KeyEvent, posts: &[PostRecord]) -> AppAction {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return AppAction::None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return AppAction::Quit;
            }
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Char('r') => return AppAction::Refresh,
            KeyCode::Tab => {
                let next = self.nav.next_path(self.router.current());
                self.switch_section(next);
            }
            KeyCode::BackTab => {
                let previous = self.nav.previous_path(self.router.current());
                self.switch_section(previous);
            }
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                if let Some(path) = self.nav.path_at(index) {
                    self.switch_section(path);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.router.route() == Route::Posts && !posts.is_empty() {
                    self.selected = (self.selected + 1).min(posts.len() - 1);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.router.route() == Route::Posts {
                    self.selected = self.selected.saturating_sub(1);
                }
            }
            KeyCode::Enter => {
                if self.router.route() == Route::Posts
                    && let Some(post) = posts.get(self.selected.min(posts.len().saturating_sub(1)))
                {
                    self.router.navigate(Route::post_path(&post.id.to_string()));
                }
            }
            KeyCode::Esc => {
                self.router.back();
            }
            _ => {}
        }

        AppAction::None
    }

    fn switch_section(&mut self, path: &str) {
        if self.router.switch_to(path) {
            self.selected = 0;
        }
    }
}

impl Default for DashboardApp {
    fn default() -> Self {
        Self::new()
    }
}
