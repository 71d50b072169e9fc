//! libcurl-backed fetcher: one GET, body streamed to disk.

use super::{credentials_for, Fetcher};
use crate::artifact::ArtifactDescriptor;
use crate::error::FetchError;
use crate::manifest::{CredentialMap, Credentials};
use crate::output::temp_path;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Filename used when neither `saveAs` nor the URL path yields one.
const DEFAULT_FILENAME: &str = "download.jar";

/// Transport knobs. Timeouts are left at libcurl defaults.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub follow_redirects: bool,
    pub user_agent: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            follow_redirects: true,
            user_agent: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    options: FetchOptions,
}

impl CurlFetcher {
    pub fn new(options: FetchOptions) -> Self {
        Self { options }
    }

    /// GETs `url`, writing the body into `file`. Returns the HTTP status.
    fn get(&self, url: &str, auth: Option<&Credentials>, file: &mut File) -> Result<u32, FetchError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(self.options.follow_redirects)?;
        if let Some(ua) = &self.options.user_agent {
            easy.useragent(ua)?;
        }
        if let Some(creds) = auth {
            let mut basic = curl::easy::Auth::new();
            basic.basic(true);
            easy.http_auth(&basic)?;
            easy.username(&creds.username)?;
            easy.password(&creds.password)?;
        }

        let mut write_error: Option<io::Error> = None;
        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| match file.write_all(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    write_error = Some(e);
                    Ok(0) // abort transfer
                }
            })?;
            transfer.perform()
        };
        if let Some(e) = write_error {
            return Err(FetchError::Io(e));
        }
        performed?;

        Ok(easy.response_code()?)
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(
        &self,
        artifact: &ArtifactDescriptor,
        credentials: &CredentialMap,
        out_dir: &Path,
    ) -> Result<Option<PathBuf>, FetchError> {
        let Some(url) = artifact.download_url() else {
            return Ok(None);
        };
        let auth = credentials_for(artifact, credentials)?;

        let name = artifact
            .filename()
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
        let final_path = out_dir.join(name);
        let part = temp_path(&final_path);

        tracing::info!("downloading {}", url);
        let result = File::create(&part)
            .map_err(FetchError::from)
            .and_then(|mut file| {
                let code = self.get(&url, auth, &mut file)?;
                if !(200..300).contains(&code) {
                    return Err(FetchError::Status(code));
                }
                file.sync_all()?;
                Ok(())
            })
            .and_then(|()| finalize(&part, &final_path));

        match result {
            Ok(()) => {
                tracing::info!("saved {}", final_path.display());
                Ok(Some(final_path))
            }
            Err(e) => {
                let _ = fs::remove_file(&part);
                Err(e)
            }
        }
    }
}

/// Moves a completed `.part` file into place. The temp file is removed if the rename fails.
fn finalize(part: &Path, final_path: &Path) -> Result<(), FetchError> {
    fs::rename(part, final_path).map_err(|e| {
        let _ = fs::remove_file(part);
        FetchError::Io(e)
    })
}
