//! Single-attempt HTTP retrieval of one artifact into the output directory.
//!
//! The `Fetcher` trait is the seam the resolution engine depends on;
//! `CurlFetcher` is the libcurl-backed implementation.

mod curl_fetcher;

pub use curl_fetcher::{CurlFetcher, FetchOptions};

use crate::artifact::ArtifactDescriptor;
use crate::error::FetchError;
use crate::manifest::{CredentialMap, Credentials};
use std::path::{Path, PathBuf};

pub trait Fetcher {
    /// Downloads `artifact` into `out_dir` and returns the written path.
    ///
    /// Returns `Ok(None)` without touching the network when the artifact has
    /// no usable download URL.
    fn fetch(
        &self,
        artifact: &ArtifactDescriptor,
        credentials: &CredentialMap,
        out_dir: &Path,
    ) -> Result<Option<PathBuf>, FetchError>;
}

/// Looks up the credentials an artifact asks for. A dangling reference is an
/// error: the request must not silently go out anonymously.
pub fn credentials_for<'a>(
    artifact: &ArtifactDescriptor,
    credentials: &'a CredentialMap,
) -> Result<Option<&'a Credentials>, FetchError> {
    match artifact.credentials_ref.as_deref() {
        None => Ok(None),
        Some(reference) => credentials
            .get(reference)
            .map(Some)
            .ok_or_else(|| FetchError::MissingCredentials {
                reference: reference.to_string(),
            }),
    }
}
