//! `pld [plugins|libraries]` – load the manifest and resolve it.

use crate::cli::GlobalArgs;
use anyhow::{Context, Result};
use pld_core::artifact::ArtifactDescriptor;
use pld_core::config::PldConfig;
use pld_core::fetch::CurlFetcher;
use pld_core::install::MavenInstaller;
use pld_core::manifest::{Manifest, ProcessEnv};
use pld_core::output;
use pld_core::resolve::Engine;
use pld_core::tags::TagFilter;
use std::path::PathBuf;

const DEFAULT_LOCAL_REPOSITORY: &str = "~/.m2";

/// Which part of the manifest to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Effective plugins, then the remaining libraries.
    All,
    /// `plugins` plus libraries tagged `plugin`.
    Plugins,
    Libraries,
}

impl Scope {
    pub fn roots(self, manifest: &Manifest) -> Result<Vec<ArtifactDescriptor>> {
        match self {
            Scope::All => Ok(manifest.all_items()),
            Scope::Plugins => Ok(manifest.effective_plugins()),
            Scope::Libraries => {
                if manifest.libraries.is_empty() {
                    anyhow::bail!("no libraries defined");
                }
                Ok(manifest.libraries.clone())
            }
        }
    }
}

/// Resolves the local repository path: flag, then config, then `~/.m2`, with `~` expanded.
pub fn local_repository(flag: Option<&str>, cfg: &PldConfig) -> PathBuf {
    let raw = match (flag, cfg.local_repository.as_deref()) {
        (Some(flag), _) => flag.to_string(),
        (None, Some(path)) => path.to_string_lossy().into_owned(),
        (None, None) => DEFAULT_LOCAL_REPOSITORY.to_string(),
    };
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}

/// Returns `Ok(true)` when every artifact resolved, `Ok(false)` after logging each error.
pub fn run_resolve(scope: Scope, args: &GlobalArgs, cfg: &PldConfig) -> Result<bool> {
    let manifest = Manifest::load(&args.config, &ProcessEnv)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    let roots = scope.roots(&manifest)?;

    output::prepare_output_dir(&args.out).context("failed to prepare output folder")?;

    let fetcher = CurlFetcher::new(cfg.fetch_options());
    let installer = MavenInstaller::new(
        cfg.installer_program.clone(),
        local_repository(args.local_maven_repository.as_deref(), cfg),
    );
    let resolution = Engine::new(&fetcher, &installer, &manifest.credentials, &args.out)
        .with_tag_filter(TagFilter::new(args.tags.iter().cloned()))
        .strict_coordinates(args.strict || cfg.strict_coordinates)
        .resolve_all(&roots);

    for (identity, version) in resolution.state.iter() {
        tracing::debug!("resolved {} {}", identity, version);
    }
    for err in &resolution.errors {
        tracing::error!("{}", err);
    }
    tracing::info!(
        "resolved {} artifact(s), {} error(s)",
        resolution.state.len(),
        resolution.errors.len()
    );
    Ok(resolution.is_success())
}
