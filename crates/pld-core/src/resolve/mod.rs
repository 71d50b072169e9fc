//! Recursive resolution engine.
//!
//! Walks the root artifacts depth-first. Each fetched jar is opened for a
//! nested `dependencies.json` whose plugins are resolved against the same
//! `ResolutionState`. The graph is never built up front; edges only become
//! known once a node is on disk.
//!
//! A branch stops at the first error on that node (conflict, fetch failure,
//! undecodable nested manifest). Siblings and other roots carry on, and every
//! error is returned in traversal order.

mod state;

pub use state::{ResolutionState, Visit};

use crate::artifact::{ArtifactDescriptor, InstallCoordinates};
use crate::error::{InstallError, ResolveError};
use crate::extract;
use crate::fetch::Fetcher;
use crate::install::LocalInstaller;
use crate::manifest::CredentialMap;
use crate::tags::TagFilter;
use std::path::Path;

/// Result of one top-level resolution run.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Every non-skip error, in traversal order.
    pub errors: Vec<ResolveError>,
    /// Identities fetched during the run and their versions.
    pub state: ResolutionState,
}

impl Resolution {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

pub struct Engine<'a> {
    fetcher: &'a dyn Fetcher,
    installer: &'a dyn LocalInstaller,
    credentials: &'a CredentialMap,
    out_dir: &'a Path,
    tag_filter: TagFilter,
    strict_coordinates: bool,
}

impl<'a> Engine<'a> {
    pub fn new(
        fetcher: &'a dyn Fetcher,
        installer: &'a dyn LocalInstaller,
        credentials: &'a CredentialMap,
        out_dir: &'a Path,
    ) -> Self {
        Self {
            fetcher,
            installer,
            credentials,
            out_dir,
            tag_filter: TagFilter::disabled(),
            strict_coordinates: false,
        }
    }

    pub fn with_tag_filter(mut self, filter: TagFilter) -> Self {
        self.tag_filter = filter;
        self
    }

    /// Treat artifacts without a derivable download URL as errors instead of no-ops.
    pub fn strict_coordinates(mut self, strict: bool) -> Self {
        self.strict_coordinates = strict;
        self
    }

    /// Resolves `roots` and everything reachable from them.
    pub fn resolve_all(&self, roots: &[ArtifactDescriptor]) -> Resolution {
        let mut resolution = Resolution::default();
        if self.tag_filter.is_enabled() {
            tracing::info!(
                "filtering based on tags: {}",
                self.tag_filter.tags().collect::<Vec<_>>().join(",")
            );
        }
        tracing::info!("starting root level download of {} artifact(s)", roots.len());
        for root in roots {
            self.resolve_one(root, &mut resolution.state, &mut resolution.errors);
        }
        resolution
    }

    fn resolve_one(
        &self,
        item: &ArtifactDescriptor,
        state: &mut ResolutionState,
        errors: &mut Vec<ResolveError>,
    ) {
        if !self.tag_filter.matches(&item.tags) {
            tracing::info!(
                "skipping {}, not included in tags (has: {})",
                item.label(),
                item.tags.iter().cloned().collect::<Vec<_>>().join(",")
            );
            return;
        }

        let identity = item.identity();
        // No URL means nothing is fetched; such items never enter the state.
        if item.download_url().is_none() {
            if self.strict_coordinates {
                errors.push(ResolveError::InvalidCoordinate { identity });
            } else {
                tracing::warn!("no download URL for {}, skipping", item.label());
            }
            return;
        }

        match state.visit(&identity, &item.version) {
            Visit::Fresh => {}
            Visit::Satisfied => {
                tracing::debug!("{} already downloaded", item.label());
                return;
            }
            Visit::Conflict { resolved } => {
                errors.push(ResolveError::Conflict {
                    identity,
                    requested: item.version.clone(),
                    resolved: resolved.to_string(),
                });
                return;
            }
        }

        let path = match self.fetcher.fetch(item, self.credentials, self.out_dir) {
            Ok(Some(path)) => path,
            Ok(None) if self.strict_coordinates => {
                errors.push(ResolveError::InvalidCoordinate { identity });
                return;
            }
            Ok(None) => {
                tracing::warn!("nothing fetched for {}, skipping", item.label());
                return;
            }
            // Not recorded: a later reference to the same identity gets a fresh attempt.
            Err(source) => {
                errors.push(ResolveError::Fetch {
                    url: item.download_url().unwrap_or_default(),
                    source,
                });
                return;
            }
        };
        state.record(identity.clone(), item.version.clone());

        if let Some(coords) = &item.install {
            if let Err(e) = self.install(&path, coords) {
                errors.push(ResolveError::Install {
                    identity: identity.clone(),
                    source: e,
                });
            }
        }

        let nested = match extract::extract_nested_manifest(&path) {
            Ok(Some(manifest)) => manifest,
            Ok(None) => return,
            Err(source) => {
                errors.push(ResolveError::Manifest {
                    archive: path,
                    source,
                });
                return;
            }
        };

        let dependencies = nested.effective_plugins();
        if !dependencies.is_empty() {
            tracing::info!(
                "found {} dependencies for {}, downloading",
                dependencies.len(),
                item.label()
            );
        }
        for dep in &dependencies {
            self.resolve_one(dep, state, errors);
        }
    }

    fn install(&self, path: &Path, coords: &InstallCoordinates) -> Result<(), InstallError> {
        let output = self.installer.install(path, coords)?;
        if !output.stdout.is_empty() {
            tracing::debug!("installer output:\n{}", output.stdout);
        }
        if !output.stderr.is_empty() {
            tracing::debug!("installer stderr:\n{}", output.stderr);
        }
        tracing::info!(
            "added {}:{}:{} to local repository",
            coords.group_id,
            coords.artifact_id,
            coords.version
        );
        Ok(())
    }
}
