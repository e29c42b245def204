use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// A yellow key label followed by its description, as used in help lines.
pub fn key_hint<'a>(key: &'a str, description: &'a str) -> [Span<'a>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(description),
    ]
}

/// How long ago a refresh landed, in coarse human units.
pub fn format_age(then: i64, now: i64) -> String {
    let secs = now.saturating_sub(then).max(0) / 1000;
    match secs {
        0..=1 => "just now".to_string(),
        2..=59 => format!("{}s ago", secs),
        60..=3599 => format!("{}m ago", secs / 60),
        _ => format!("{}h ago", secs / 3600),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_buckets() {
        assert_eq!(format_age(0, 500), "just now");
        assert_eq!(format_age(0, 5_000), "5s ago");
        assert_eq!(format_age(0, 125_000), "2m ago");
        assert_eq!(format_age(0, 7_200_000), "2h ago");
        assert_eq!(format_age(10_000, 0), "just now");
    }
}
