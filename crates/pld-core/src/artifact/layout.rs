//! Maven repository layout URL derivation.

/// Derives `base/group/with/slashes/artifact/version/artifact-version.jar`.
///
/// Returns `None` if any coordinate is empty.
pub fn repository_url(base: &str, group_id: &str, artifact_id: &str, version: &str) -> Option<String> {
    if base.is_empty() || group_id.is_empty() || artifact_id.is_empty() || version.is_empty() {
        return None;
    }
    Some(format!(
        "{}/{}/{}/{}/{}-{}.jar",
        base.trim_end_matches('/'),
        group_id.replace('.', "/"),
        artifact_id,
        version,
        artifact_id,
        version
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        assert_eq!(
            repository_url("https://r.example.com/maven", "net.kyori", "adventure-api", "4.14.0")
                .as_deref(),
            Some("https://r.example.com/maven/net/kyori/adventure-api/4.14.0/adventure-api-4.14.0.jar")
        );
    }

    #[test]
    fn trailing_slash_on_base() {
        assert_eq!(
            repository_url("https://r.example.com/", "g", "a", "1").as_deref(),
            Some("https://r.example.com/g/a/1/a-1.jar")
        );
    }

    #[test]
    fn missing_parts() {
        assert_eq!(repository_url("", "g", "a", "1"), None);
        assert_eq!(repository_url("https://r", "", "a", "1"), None);
        assert_eq!(repository_url("https://r", "g", "", "1"), None);
        assert_eq!(repository_url("https://r", "g", "a", ""), None);
    }
}
