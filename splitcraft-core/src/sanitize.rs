//! Name sanitization for generated files and sheet titles

use regex::Regex;
use std::sync::OnceLock;

/// Title length ceiling of the xlsx format.
pub const SHEET_TITLE_MAX: usize = 31;

static ILLEGAL_CHARS: OnceLock<Regex> = OnceLock::new();

/// Replace every character illegal in file and sheet names with `_`.
///
/// No collision detection: two keys that sanitize to the same text end up
/// naming the same output.
pub fn sanitize(name: &str) -> String {
    let pattern = ILLEGAL_CHARS.get_or_init(|| Regex::new(r#"[\\/:*?"<>|]"#).unwrap());
    pattern.replace_all(name, "_").into_owned()
}

/// Truncate an already sanitized name to a legal sheet title.
pub fn sheet_title(name: &str) -> String {
    name.chars().take(SHEET_TITLE_MAX).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_illegal_chars() {
        assert_eq!(sanitize("A/B:C"), "A_B_C");
        assert_eq!(sanitize(r#"a\b/c:d*e?f"g<h>i|j"#), "a_b_c_d_e_f_g_h_i_j");
    }

    #[test]
    fn test_sanitize_keeps_clean_names() {
        assert_eq!(sanitize("Finance 2024"), "Finance 2024");
    }

    #[test]
    fn test_sheet_title_truncates_to_31_chars() {
        let long = "abcdefghijklmnopqrstuvwxyz0123456789";
        let title = sheet_title(long);
        assert_eq!(title.chars().count(), SHEET_TITLE_MAX);
        assert_eq!(title, &long[..31]);
    }

    #[test]
    fn test_sheet_title_keeps_short_names() {
        assert_eq!(sheet_title("Ops"), "Ops");
    }
}
