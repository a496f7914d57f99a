use pulseboard_types::{NAV_ITEMS, NavItem};

/// Ordered sidebar entries with active-route selection
#[derive(Debug, Clone)]
pub struct Navigation {
    items: Vec<NavItem>,
}

impl Navigation {
    pub fn new(items: Vec<NavItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Index of the entry highlighted for `path`.
    ///
    /// Among matching entries the one with the longest path wins, so a nested
    /// route such as `/posts/<id>` lights up `/posts` rather than `/`.
    pub fn active_index(&self, path: &str) -> Option<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.matches(path))
            .max_by_key(|(_, item)| item.path.len())
            .map(|(idx, _)| idx)
    }

    pub fn active(&self, path: &str) -> Option<&NavItem> {
        self.active_index(path).map(|idx| &self.items[idx])
    }

    /// Path of the entry after the active one, wrapping around
    pub fn next_path(&self, path: &str) -> &'static str {
        self.step(path, 1)
    }

    /// Path of the entry before the active one, wrapping around
    pub fn previous_path(&self, path: &str) -> &'static str {
        self.step(path, self.items.len().saturating_sub(1))
    }

    /// Path of the entry at `index` (0-based), if any
    pub fn path_at(&self, index: usize) -> Option<&'static str> {
        self.items.get(index).map(|item| item.path)
    }

    fn step(&self, path: &str, offset: usize) -> &'static str {
        if self.items.is_empty() {
            return "/";
        }
        let current = self.active_index(path).unwrap_or(0);
        self.items[(current + offset) % self.items.len()].path
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new(NAV_ITEMS.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_exact() {
        let nav = Navigation::default();
        assert_eq!(nav.active("/").map(|i| i.name), Some("Overview"));
        assert_eq!(nav.active("/settings").map(|i| i.name), Some("Settings"));
    }

    #[test]
    fn test_active_prefix_prefers_longest() {
        let nav = Navigation::default();
        assert_eq!(
            nav.active("/posts/00000000-0000-0000-0000-000000000001")
                .map(|i| i.name),
            Some("Posts")
        );
    }

    #[test]
    fn test_nested_items_longest_wins() {
        let nav = Navigation::new(vec![
            NavItem::new("Posts", "/posts", ""),
            NavItem::new("Drafts", "/posts/drafts", ""),
        ]);
        assert_eq!(nav.active_index("/posts/drafts/1"), Some(1));
        assert_eq!(nav.active_index("/posts/1"), Some(0));
    }

    #[test]
    fn test_unknown_path_has_no_active_item() {
        let nav = Navigation::default();
        assert_eq!(nav.active("/billing"), None);
    }

    #[test]
    fn test_cycling_wraps() {
        let nav = Navigation::default();
        assert_eq!(nav.next_path("/"), "/posts");
        assert_eq!(nav.next_path("/settings"), "/");
        assert_eq!(nav.previous_path("/"), "/settings");
        assert_eq!(nav.previous_path("/posts/abc"), "/");
    }
}
