use serde::Serialize;

/// Static sidebar entry: display name, route path and icon glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

impl NavItem {
    pub const fn new(name: &'static str, path: &'static str, icon: &'static str) -> Self {
        Self { name, path, icon }
    }

    /// Exact match, or prefix match on a path-segment boundary.
    /// The root item only matches exactly.
    pub fn matches(&self, current: &str) -> bool {
        if current == self.path {
            return true;
        }
        if self.path == "/" {
            return false;
        }
        current
            .strip_prefix(self.path)
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Sidebar entries, in display order
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem::new("Overview", "/", "◆"),
    NavItem::new("Posts", "/posts", "▤"),
    NavItem::new("Analytics", "/analytics", "▲"),
    NavItem::new("Settings", "/settings", "⚙"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let posts = NavItem::new("Posts", "/posts", "");
        assert!(posts.matches("/posts"));
        assert!(!posts.matches("/analytics"));
    }

    #[test]
    fn test_prefix_match_requires_segment_boundary() {
        let posts = NavItem::new("Posts", "/posts", "");
        assert!(posts.matches("/posts/abc"));
        assert!(!posts.matches("/postsx"));
    }

    #[test]
    fn test_root_matches_only_itself() {
        let root = NavItem::new("Overview", "/", "");
        assert!(root.matches("/"));
        assert!(!root.matches("/posts"));
    }
}
