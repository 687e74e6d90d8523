/// Treats empty strings the same as a missing value.
pub(super) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Keeps the first `max_chars` characters, appending `...` if anything was cut.
pub(super) fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Formats an amount without a trailing `.0` for whole numbers.
pub(super) fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate_with_ellipsis("Review resume", 50), "Review resume");
        let exact = "x".repeat(50);
        assert_eq!(truncate_with_ellipsis(&exact, 50), exact);
    }

    #[test]
    fn test_truncate_cuts_on_char_boundary() {
        let long = "é".repeat(60);
        let cut = truncate_with_ellipsis(&long, 50);
        assert_eq!(cut.chars().count(), 53);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_non_empty_treats_blank_as_missing() {
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some("HR".to_string())), Some("HR"));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1000.0), "1000");
        assert_eq!(format_amount(1500.5), "1500.5");
    }
}
