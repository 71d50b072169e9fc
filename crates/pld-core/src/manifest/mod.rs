//! Manifest model (`dependencies.json`): credentials plus ordered plugin and
//! library lists.
//!
//! The same shape is used for the root manifest handed to the CLI and for the
//! nested manifests found inside downloaded jars. Only the root manifest's
//! credentials are honored.

mod credentials;
mod parse;

pub use credentials::{CredentialMap, Credentials, EnvLookup, ProcessEnv};

use crate::artifact::{ArtifactDescriptor, InstallCoordinates, SourceLocation};
use crate::error::ManifestError;
use parse::{RawArtifact, RawManifest};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Tag that folds a library into the effective plugin set.
pub const PLUGIN_TAG: &str = "plugin";

#[derive(Debug, Clone, Default)]
pub struct Manifest {
    pub credentials: CredentialMap,
    pub plugins: Vec<ArtifactDescriptor>,
    pub libraries: Vec<ArtifactDescriptor>,
}

impl Manifest {
    /// Loads a root manifest from disk, resolving `$NAME` credential values via `env`.
    pub fn load(path: &Path, env: &dyn EnvLookup) -> Result<Self, ManifestError> {
        let file = File::open(path).map_err(|source| ManifestError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), env)
    }

    pub fn from_reader<R: Read>(reader: R, env: &dyn EnvLookup) -> Result<Self, ManifestError> {
        let raw: RawManifest = serde_json::from_reader(reader)?;
        Self::from_raw(raw, env)
    }

    pub fn from_json(json: &str, env: &dyn EnvLookup) -> Result<Self, ManifestError> {
        let raw: RawManifest = serde_json::from_str(json)?;
        Self::from_raw(raw, env)
    }

    /// Decodes a manifest embedded in an artifact. Credentials are dropped.
    pub fn from_nested_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        let raw: RawManifest = serde_json::from_reader(reader)?;
        Ok(Self {
            credentials: CredentialMap::new(),
            plugins: raw.plugins.into_iter().map(ArtifactDescriptor::from).collect(),
            libraries: raw.libraries.into_iter().map(ArtifactDescriptor::from).collect(),
        })
    }

    fn from_raw(raw: RawManifest, env: &dyn EnvLookup) -> Result<Self, ManifestError> {
        let mut credentials = CredentialMap::new();
        for (name, creds) in raw.credentials {
            let username = credentials::resolve_value(&name, creds.username, env)?;
            let password = credentials::resolve_value(&name, creds.password, env)?;
            credentials.insert(name, Credentials { username, password });
        }
        Ok(Self {
            credentials,
            plugins: raw.plugins.into_iter().map(ArtifactDescriptor::from).collect(),
            libraries: raw.libraries.into_iter().map(ArtifactDescriptor::from).collect(),
        })
    }

    /// Plugins followed by every library tagged `plugin`, in declaration order.
    pub fn effective_plugins(&self) -> Vec<ArtifactDescriptor> {
        self.plugins
            .iter()
            .chain(self.libraries.iter().filter(|l| l.tags.contains(PLUGIN_TAG)))
            .cloned()
            .collect()
    }

    /// Effective plugins followed by the remaining libraries.
    pub fn all_items(&self) -> Vec<ArtifactDescriptor> {
        let mut items = self.effective_plugins();
        items.extend(
            self.libraries
                .iter()
                .filter(|l| !l.tags.contains(PLUGIN_TAG))
                .cloned(),
        );
        items
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl From<RawArtifact> for ArtifactDescriptor {
    fn from(raw: RawArtifact) -> Self {
        let (group_id, artifact_id, version) = match (
            non_empty(raw.group_id),
            non_empty(raw.artifact_id),
            non_empty(raw.version),
        ) {
            (None, None, version) => match non_empty(raw.artifact) {
                Some(coordinate) => split_coordinate(&coordinate),
                None => (String::new(), String::new(), version.unwrap_or_default()),
            },
            (g, a, v) => (g.unwrap_or_default(), a.unwrap_or_default(), v.unwrap_or_default()),
        };

        let source = match (non_empty(raw.download_url), non_empty(raw.repository_url)) {
            (Some(url), _) => SourceLocation::Direct(url),
            (None, Some(base)) => SourceLocation::Repository(base),
            (None, None) => SourceLocation::Unspecified,
        };

        let install = raw.add_to_local_maven.then(|| {
            let local = raw.local_maven.unwrap_or_default();
            InstallCoordinates {
                group_id: non_empty(local.group_id).unwrap_or_else(|| group_id.clone()),
                artifact_id: non_empty(local.artifact_id).unwrap_or_else(|| artifact_id.clone()),
                version: non_empty(local.version).unwrap_or_else(|| version.clone()),
            }
        });

        ArtifactDescriptor {
            group_id,
            artifact_id,
            version,
            source,
            save_as: non_empty(raw.save_as),
            credentials_ref: non_empty(raw.credentials),
            tags: raw.tags.into_iter().filter(|t| !t.is_empty()).collect(),
            install,
        }
    }
}

/// Splits `group:artifact:version`. Anything else yields empty coordinates,
/// which in turn yields no download URL.
fn split_coordinate(coordinate: &str) -> (String, String, String) {
    let parts: Vec<&str> = coordinate.split(':').collect();
    match parts.as_slice() {
        [g, a, v] => (g.to_string(), a.to_string(), v.to_string()),
        _ => (String::new(), String::new(), String::new()),
    }
}
