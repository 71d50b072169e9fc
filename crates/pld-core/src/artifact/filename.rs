//! Destination filename derivation.

/// Extracts the last path segment from a URL.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path_segments()?.filter(|s| !s.is_empty()).last()?;
    Some(segment.to_string())
}

/// Makes `name` safe to join onto the output directory.
///
/// Path separators, NUL and control characters become `_`. Names that are
/// empty or reserved (`.` / `..`) after trimming are rejected.
pub fn safe_filename(name: &str) -> Option<String> {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_segment() {
        assert_eq!(
            filename_from_url_path("https://example.com/a/b/plugin.jar").as_deref(),
            Some("plugin.jar")
        );
        assert_eq!(
            filename_from_url_path("https://example.com/plugin.jar?token=abc").as_deref(),
            Some("plugin.jar")
        );
    }

    #[test]
    fn root_or_unparseable() {
        assert_eq!(filename_from_url_path("https://example.com/"), None);
        assert_eq!(filename_from_url_path("not a url"), None);
    }

    #[test]
    fn separators_replaced() {
        assert_eq!(safe_filename("../evil.jar").as_deref(), Some(".._evil.jar"));
        assert_eq!(safe_filename("a\\b.jar").as_deref(), Some("a_b.jar"));
        assert_eq!(safe_filename(" .. "), None);
        assert_eq!(safe_filename(""), None);
    }
}
