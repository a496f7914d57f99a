//! Dashboard routes.
//!
//! Paths mirror the web dashboard: `/`, `/posts`, `/posts/<id>`,
//! `/analytics`, `/settings`. Switching sections replaces the current path;
//! only drilling into a post pushes onto the back stack, so `Esc` returns
//! from a detail page to the list it was opened from.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Overview,
    Posts,
    Post(String),
    Analytics,
    Settings,
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Overview,
            "/posts" => Route::Posts,
            "/analytics" => Route::Analytics,
            "/settings" => Route::Settings,
            _ => match trimmed.strip_prefix("/posts/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::Post(id.to_string()),
                _ => Route::NotFound(path.to_string()),
            },
        }
    }

    pub fn post_path(id: &str) -> String {
        format!("/posts/{}", id)
    }
}

/// Deepest back stack kept; older entries are dropped first
pub const MAX_HISTORY: usize = 32;

#[derive(Debug, Clone)]
pub struct Router {
    current: String,
    history: Vec<String>,
}

impl Router {
    pub fn new() -> Self {
        Self::at("/")
    }

    pub fn at(path: impl Into<String>) -> Self {
        Self {
            current: path.into(),
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn route(&self) -> Route {
        Route::parse(&self.current)
    }

    /// Top-level section change. Clears the back stack.
    ///
    /// Returns false when already at `path`
    pub fn switch_to(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if path == self.current {
            return false;
        }
        self.current = path;
        self.history.clear();
        true
    }

    /// Drill-down that `back` can undo.
    ///
    /// Returns false when already at `path`
    pub fn navigate(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if path == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, path);
        if self.history.len() == MAX_HISTORY {
            self.history.remove(0);
        }
        self.history.push(previous);
        true
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Returns false when there is nowhere to go back to
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Route::Overview);
        assert_eq!(Route::parse("/posts"), Route::Posts);
        assert_eq!(Route::parse("/posts/"), Route::Posts);
        assert_eq!(Route::parse("/posts/abc"), Route::Post("abc".to_string()));
        assert_eq!(Route::parse("/analytics"), Route::Analytics);
        assert_eq!(Route::parse("/settings"), Route::Settings);
        assert_eq!(
            Route::parse("/posts/abc/edit"),
            Route::NotFound("/posts/abc/edit".to_string())
        );
        assert_eq!(
            Route::parse("/billing"),
            Route::NotFound("/billing".to_string())
        );
    }

    #[test]
    fn test_navigate_and_back() {
        let mut router = Router::new();
        assert!(router.switch_to("/posts"));
        assert!(router.navigate(Route::post_path("abc")));
        assert!(!router.navigate("/posts/abc"));

        assert!(router.back());
        assert_eq!(router.current(), "/posts");
        assert!(!router.back());
        assert_eq!(router.current(), "/posts");
    }

    #[test]
    fn test_section_switches_leave_no_history() {
        let mut router = Router::new();
        for _ in 0..1_000 {
            router.switch_to("/posts");
            router.switch_to("/analytics");
        }
        assert_eq!(router.depth(), 0);
        assert!(!router.switch_to("/analytics"));

        router.switch_to("/posts");
        router.navigate(Route::post_path("abc"));
        assert!(router.switch_to("/settings"));
        assert_eq!(router.depth(), 0);
        assert!(!router.back());
    }

    #[test]
    fn test_history_is_capped() {
        let mut router = Router::at("/posts");
        for n in 0..(MAX_HISTORY + 10) {
            router.navigate(Route::post_path(&n.to_string()));
        }
        assert_eq!(router.depth(), MAX_HISTORY);

        while router.back() {}
        // the oldest entries, including "/posts", were dropped
        assert_eq!(router.current(), Route::post_path("9"));
    }
}
