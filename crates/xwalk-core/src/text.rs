//! Whitespace normalization shared by every model's text fields.

/// Trim surrounding whitespace, reusing the allocation when nothing changes.
pub(crate) fn trimmed(value: impl Into<String>) -> String {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_owned()
    }
}

/// [`trimmed`] lifted over an optional field.
pub(crate) fn trimmed_opt(value: Option<impl Into<String>>) -> Option<String> {
    value.map(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_both_ends() {
        assert_eq!(trimmed("  Deduplicate \n"), "Deduplicate");
        assert_eq!(trimmed("\tx"), "x");
    }

    #[test]
    fn test_untouched_value_is_kept() {
        assert_eq!(trimmed("DEDUPE"), "DEDUPE");
        assert_eq!(trimmed(""), "");
    }

    #[test]
    fn test_optional() {
        assert_eq!(trimmed_opt(Some(" a ")), Some("a".to_string()));
        assert_eq!(trimmed_opt(None::<String>), None);
    }
}
