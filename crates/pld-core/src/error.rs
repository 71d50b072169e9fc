//! Error taxonomy for manifest loading and resolution.
//!
//! `ManifestError` is fatal and raised before any network activity.
//! Everything a single artifact can go wrong with is a `ResolveError`; the
//! engine collects those instead of stopping at the first one.

use crate::artifact::Identity;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration error in the input manifest. Fatal.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("error opening JSON file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error decoding JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("environment variable not found: {name} (credentials `{credential}`)")]
    MissingEnv { credential: String, name: String },
}

/// Failure of a single HTTP retrieval.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid credentials reference `{reference}`")]
    MissingCredentials { reference: String },

    #[error("transport: {0}")]
    Transport(#[from] curl::Error),

    #[error("unexpected status code: {0}")]
    Status(u32),

    #[error("storage: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure while looking for or decoding `dependencies.json` inside an archive.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("open archive: {0}")]
    Io(#[from] std::io::Error),

    #[error("read archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("failed to decode nested manifest: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure of the local repository install side effect.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {}: {stderr}", .code.map_or_else(|| "signal".to_string(), |c| format!("status {c}")))]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Non-fatal error for one node of the resolution graph.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("version conflict ({requested}, {resolved}) for {identity}")]
    Conflict {
        identity: Identity,
        requested: String,
        resolved: String,
    },

    #[error("failed to download ({url}): {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("failed to read dependencies of {}: {source}", .archive.display())]
    Manifest {
        archive: PathBuf,
        #[source]
        source: ExtractError,
    },

    #[error("failed to add {identity} to local repository: {source}")]
    Install {
        identity: Identity,
        #[source]
        source: InstallError,
    },

    #[error("no download URL could be derived for {identity}")]
    InvalidCoordinate { identity: Identity },
}

impl ResolveError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ResolveError::Conflict { .. })
    }
}
