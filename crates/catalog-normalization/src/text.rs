//! Text cell cleanup.

/// Trims a raw cell and maps empty values to `None`.
///
/// Leading/trailing whitespace and a stray byte-order mark are removed;
/// internal whitespace is preserved.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_outer_whitespace_only() {
        assert_eq!(
            normalize_text("  TV Show \t"),
            Some("TV Show".to_string())
        );
        assert_eq!(
            normalize_text(" Kirsten  Johnson "),
            Some("Kirsten  Johnson".to_string())
        );
    }

    #[test]
    fn empty_is_none() {
        assert_eq!(normalize_text(""), None);
        assert_eq!(normalize_text("   "), None);
        assert_eq!(normalize_text("\u{feff}"), None);
    }

    #[test]
    fn strips_bom() {
        assert_eq!(normalize_text("\u{feff}Movie"), Some("Movie".to_string()));
    }
}
