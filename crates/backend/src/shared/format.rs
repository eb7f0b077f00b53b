/// Format an integer with thousands separators (dots)
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Compact currency label for KPI cards: `$1.2M`, `$15K`, `$950`
pub fn format_currency(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.0}K", value / 1_000.0)
    } else {
        format!("${:.0}", value)
    }
}

/// Arrow shown next to a change percentage
pub fn trend_arrow(change: f64) -> &'static str {
    if change > 0.0 {
        "↗"
    } else if change < 0.0 {
        "↘"
    } else {
        "→"
    }
}

/// Five-star rendering of an average review score; filled stars use the
/// integer part of the score
pub fn review_stars(score: Option<f64>) -> String {
    let filled = score
        .filter(|s| s.is_finite())
        .map_or(0, |s| s.clamp(0.0, 5.0) as usize);
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(950.4), "$950");
        assert_eq!(format_currency(15_400.0), "$15K");
        assert_eq!(format_currency(1_234_567.0), "$1.2M");
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn test_trend_arrow() {
        assert_eq!(trend_arrow(3.2), "↗");
        assert_eq!(trend_arrow(-0.1), "↘");
        assert_eq!(trend_arrow(0.0), "→");
    }

    #[test]
    fn test_review_stars() {
        assert_eq!(review_stars(Some(4.1)), "★★★★☆");
        assert_eq!(review_stars(Some(5.0)), "★★★★★");
        assert_eq!(review_stars(None), "☆☆☆☆☆");
    }
}
