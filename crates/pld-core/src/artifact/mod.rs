//! Artifact data model: identity, coordinates and source location of one
//! downloadable plugin or library.

mod filename;
mod layout;

pub use filename::{filename_from_url_path, safe_filename};
pub use layout::repository_url;

use std::collections::BTreeSet;
use std::fmt;

/// Deduplication and conflict key for an artifact, independent of version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Identity {
    /// `(groupId, artifactId)` pair.
    Coordinates { group_id: String, artifact_id: String },
    /// Direct-URL artifacts without coordinates are keyed by their URL.
    Url(String),
}

impl Identity {
    pub fn coordinates(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Identity::Coordinates {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Coordinates {
                group_id,
                artifact_id,
            } => write!(f, "{}:{}", group_id, artifact_id),
            Identity::Url(url) => f.write_str(url),
        }
    }
}

/// Where the bytes of an artifact come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// Explicit download URL; always wins over derivation.
    Direct(String),
    /// Maven-style repository base URL; the final URL is derived from coordinates.
    Repository(String),
    /// Neither was given.
    Unspecified,
}

/// Group/artifact/version triple used for the local repository install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCoordinates {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

/// One downloadable unit. Immutable once built from a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    pub group_id: String,
    pub artifact_id: String,
    /// Compared for exact equality only.
    pub version: String,
    pub source: SourceLocation,
    /// Explicit destination filename, overriding the URL basename.
    pub save_as: Option<String>,
    /// Key into the manifest's credentials map.
    pub credentials_ref: Option<String>,
    pub tags: BTreeSet<String>,
    /// Present when the artifact must also be installed into a local repository.
    pub install: Option<InstallCoordinates>,
}

impl ArtifactDescriptor {
    /// Descriptor for a repository-hosted artifact with no tags or side effects.
    pub fn from_repository(
        repository: impl Into<String>,
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            source: SourceLocation::Repository(repository.into()),
            save_as: None,
            credentials_ref: None,
            tags: BTreeSet::new(),
            install: None,
        }
    }

    /// Descriptor for a direct-URL artifact with no coordinates.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            group_id: String::new(),
            artifact_id: String::new(),
            version: String::new(),
            source: SourceLocation::Direct(url.into()),
            save_as: None,
            credentials_ref: None,
            tags: BTreeSet::new(),
            install: None,
        }
    }

    pub fn identity(&self) -> Identity {
        if self.group_id.is_empty() && self.artifact_id.is_empty() {
            Identity::Url(self.download_url().unwrap_or_default())
        } else {
            Identity::coordinates(self.group_id.clone(), self.artifact_id.clone())
        }
    }

    /// Resolved download URL, or `None` when the source or coordinates are incomplete.
    pub fn download_url(&self) -> Option<String> {
        match &self.source {
            SourceLocation::Direct(url) if !url.is_empty() => Some(url.clone()),
            SourceLocation::Direct(_) | SourceLocation::Unspecified => None,
            SourceLocation::Repository(base) => {
                repository_url(base, &self.group_id, &self.artifact_id, &self.version)
            }
        }
    }

    /// Destination filename in the output directory.
    pub fn filename(&self) -> Option<String> {
        if let Some(name) = self.save_as.as_deref().filter(|s| !s.is_empty()) {
            return safe_filename(name);
        }
        self.download_url()
            .and_then(|u| filename_from_url_path(&u))
            .and_then(|n| safe_filename(&n))
    }

    /// `group:artifact:version` label for log lines.
    pub fn label(&self) -> String {
        match self.identity() {
            Identity::Url(url) => url,
            id => format!("{}:{}", id, self.version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_url_uses_slashed_group() {
        let a = ArtifactDescriptor::from_repository(
            "https://repo.example.com/releases",
            "com.example.plugins",
            "chat",
            "1.2.0",
        );
        assert_eq!(
            a.download_url().as_deref(),
            Some("https://repo.example.com/releases/com/example/plugins/chat/1.2.0/chat-1.2.0.jar")
        );
        assert_eq!(a.filename().as_deref(), Some("chat-1.2.0.jar"));
    }

    #[test]
    fn explicit_url_overrides_derivation() {
        let mut a = ArtifactDescriptor::from_repository("https://repo.example.com", "g", "a", "1");
        a.source = SourceLocation::Direct("https://cdn.example.com/files/other.jar".into());
        assert_eq!(
            a.download_url().as_deref(),
            Some("https://cdn.example.com/files/other.jar")
        );
        assert_eq!(a.filename().as_deref(), Some("other.jar"));
    }

    #[test]
    fn save_as_overrides_basename() {
        let mut a = ArtifactDescriptor::from_url("https://cdn.example.com/dl?id=7");
        a.save_as = Some("Essentials.jar".into());
        assert_eq!(a.filename().as_deref(), Some("Essentials.jar"));
    }

    #[test]
    fn incomplete_coordinates_have_no_url() {
        let a = ArtifactDescriptor::from_repository("https://repo.example.com", "g", "a", "");
        assert_eq!(a.download_url(), None);
        assert_eq!(a.filename(), None);

        let mut b = ArtifactDescriptor::from_url("");
        b.source = SourceLocation::Unspecified;
        assert_eq!(b.download_url(), None);
    }

    #[test]
    fn identity_ignores_version() {
        let a = ArtifactDescriptor::from_repository("r", "com.example", "x", "1.0");
        let b = ArtifactDescriptor::from_repository("other", "com.example", "x", "2.0");
        assert_eq!(a.identity(), b.identity());
        assert_eq!(a.identity().to_string(), "com.example:x");
        assert_eq!(a.label(), "com.example:x:1.0");
    }

    #[test]
    fn url_only_artifacts_are_keyed_by_url() {
        let a = ArtifactDescriptor::from_url("https://a.example.com/one.jar");
        let b = ArtifactDescriptor::from_url("https://a.example.com/two.jar");
        assert_ne!(a.identity(), b.identity());
        assert_eq!(
            a.identity(),
            Identity::Url("https://a.example.com/one.jar".into())
        );
    }
}
