pub fn format_compact(count: i64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}k", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Missing counts render as a dash rather than zero
pub fn format_optional_count(count: Option<i64>) -> String {
    count.map(format_compact).unwrap_or_else(|| "-".to_string())
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Signed change such as `+12.5%` or `-3.0%`
pub fn format_change(change: f64) -> String {
    if change > 0.0 {
        format!("+{:.1}%", change)
    } else {
        format!("{:.1}%", change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(0), "0");
        assert_eq!(format_compact(999), "999");
        assert_eq!(format_compact(1_000), "1.0k");
        assert_eq!(format_compact(12_345), "12.3k");
        assert_eq!(format_compact(3_400_000), "3.4M");
    }

    #[test]
    fn test_format_optional_count() {
        assert_eq!(format_optional_count(None), "-");
        assert_eq!(format_optional_count(Some(1_500)), "1.5k");
    }

    #[test]
    fn test_format_change_sign() {
        assert_eq!(format_change(12.5), "+12.5%");
        assert_eq!(format_change(-3.0), "-3.0%");
        assert_eq!(format_change(0.0), "0.0%");
    }
}
