use pulseboard_types::*;

#[test]
fn test_truncate() {
    let short = "short";
    assert_eq!(truncate(short, 10), "short");

    let long = "https://instagram.com/p/very-long-permalink";
    let truncated = truncate(long, 10);
    assert_eq!(truncated.chars().count(), 10);
    assert!(truncated.ends_with('…'));
}

#[test]
fn test_mask_secret() {
    assert_eq!(mask_secret("abcd"), "****");
    assert_eq!(mask_secret("eyJhbGciOiJIUzI1NiJ9"), "eyJh…NiJ9");
}

#[test]
fn test_nav_items_are_unique_paths() {
    let mut paths: Vec<&str> = NAV_ITEMS.iter().map(|item| item.path).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), NAV_ITEMS.len());
}
