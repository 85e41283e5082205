/// Descriptions longer than this get collapsed behind a Read More toggle.
pub const DESCRIPTION_PREVIEW_LIMIT: usize = 80;

/// Collapsed rows clamp the text with CSS; the toggle only appears past the
/// character limit.
pub fn needs_toggle(description: &str) -> bool {
    description.chars().count() > DESCRIPTION_PREVIEW_LIMIT
}

/// Single-expansion toggle: selecting the open row closes it, selecting
/// another row moves the expansion there.
pub fn toggle_expanded(current: Option<&str>, id: &str) -> Option<String> {
    if current == Some(id) {
        None
    } else {
        Some(id.to_string())
    }
}

pub fn validate_title(title: &str) -> Result<String, String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err("Title is required".into());
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_appears_only_past_the_limit() {
        assert!(!needs_toggle(&"a".repeat(DESCRIPTION_PREVIEW_LIMIT)));
        assert!(needs_toggle(&"b".repeat(DESCRIPTION_PREVIEW_LIMIT + 1)));
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        assert!(!needs_toggle(&"あ".repeat(DESCRIPTION_PREVIEW_LIMIT)));
    }

    #[test]
    fn toggling_the_open_row_closes_it() {
        assert_eq!(toggle_expanded(None, "t-1").as_deref(), Some("t-1"));
        assert_eq!(toggle_expanded(Some("t-1"), "t-1"), None);
        assert_eq!(toggle_expanded(Some("t-1"), "t-2").as_deref(), Some("t-2"));
    }

    #[test]
    fn title_validation_trims_whitespace() {
        assert_eq!(validate_title("  Ship report  ").unwrap(), "Ship report");
        assert_eq!(validate_title("   ").unwrap_err(), "Title is required");
        assert_eq!(validate_title("").unwrap_err(), "Title is required");
    }
}
