//! Local repository install side effect.
//!
//! Resolution only sees the `LocalInstaller` trait; `MavenInstaller` shells
//! out to `mvn install:install-file`.

use crate::artifact::InstallCoordinates;
use crate::error::InstallError;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Captured output of a successful install.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallOutput {
    pub stdout: String,
    pub stderr: String,
}

pub trait LocalInstaller {
    fn install(&self, file: &Path, coords: &InstallCoordinates) -> Result<InstallOutput, InstallError>;
}

#[derive(Debug, Clone)]
pub struct MavenInstaller {
    program: String,
    repository: PathBuf,
}

impl MavenInstaller {
    pub fn new(program: impl Into<String>, repository: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            repository: repository.into(),
        }
    }

    fn args(&self, file: &Path, coords: &InstallCoordinates) -> Vec<String> {
        vec![
            "install:install-file".to_string(),
            format!("-Dfile={}", file.display()),
            format!("-DgroupId={}", coords.group_id),
            format!("-DartifactId={}", coords.artifact_id),
            format!("-Dversion={}", coords.version),
            "-Dpackaging=jar".to_string(),
            format!("-DlocalRepositoryPath={}", self.repository.display()),
        ]
    }
}

impl LocalInstaller for MavenInstaller {
    fn install(&self, file: &Path, coords: &InstallCoordinates) -> Result<InstallOutput, InstallError> {
        let output = Command::new(&self.program)
            .args(self.args(file, coords))
            .output()
            .map_err(|source| InstallError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            tracing::debug!("{} stdout:\n{}", self.program, stdout);
            return Err(InstallError::Failed {
                program: self.program.clone(),
                code: output.status.code(),
                stderr,
            });
        }
        Ok(InstallOutput { stdout, stderr })
    }
}
