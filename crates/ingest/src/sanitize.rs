//! Sanitizers for client-supplied strings.

/// Strips control characters and trims whitespace; `None` if nothing is left.
pub(crate) fn sanitize_optional_string(value: Option<&str>) -> Option<String> {
    value.and_then(|raw| {
        let filtered: String = raw.chars().filter(|c| !c.is_control()).collect();
        let trimmed = filtered.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Reduces a client file name to its final path component.
///
/// Both `/` and `\` separate components. `.` and `..` are rejected.
pub(crate) fn sanitize_file_name(value: Option<&str>) -> Option<String> {
    let last = value?.rsplit(['/', '\\']).next()?;
    sanitize_optional_string(Some(last)).filter(|name| name != "." && name != "..")
}

/// Restricts a store key prefix to `[A-Za-z0-9._-]`, at most 64 characters.
pub(crate) fn key_prefix(value: &str) -> String {
    let prefix: String = value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .take(64)
        .collect();
    let prefix = prefix.trim_start_matches('.');
    if prefix.is_empty() {
        "upload".to_string()
    } else {
        prefix.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_control_characters() {
        assert_eq!(
            sanitize_optional_string(Some("  book\u{0007}.txt\n")),
            Some("book.txt".to_string())
        );
        assert_eq!(sanitize_optional_string(Some(" \t ")), None);
        assert_eq!(sanitize_optional_string(None), None);
    }

    #[test]
    fn file_name_loses_directories() {
        assert_eq!(
            sanitize_file_name(Some("../../etc/passwd")),
            Some("passwd".to_string())
        );
        assert_eq!(
            sanitize_file_name(Some(r"C:\Users\me\kingJames.txt")),
            Some("kingJames.txt".to_string())
        );
        assert_eq!(sanitize_file_name(Some("dir/..")), None);
        assert_eq!(sanitize_file_name(Some("trailing/")), None);
    }

    #[test]
    fn key_prefix_is_filesystem_safe() {
        assert_eq!(key_prefix("kingJames.txt"), "kingJames.txt");
        assert_eq!(key_prefix("../../x y"), "xy");
        assert_eq!(key_prefix("///"), "upload");
        assert_eq!(key_prefix(&"a".repeat(100)).len(), 64);
    }
}
