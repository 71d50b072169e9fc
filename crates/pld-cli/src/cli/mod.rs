//! CLI for the PLD plugin downloader.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pld_core::config;
use std::path::PathBuf;

use commands::{run_resolve, Scope};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pld")]
#[command(
    about = "Download the plugins and libraries a server needs",
    long_about = "Reads a dependencies.json manifest and downloads every listed plugin and \
library into the output folder. Each downloaded jar is inspected for its own \
dependencies.json, whose entries are downloaded too. Version conflicts between \
artifacts with the same group and artifact id are reported as errors."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Manifest to read.
    #[arg(long, global = true, default_value = "dependencies.json", value_name = "PATH")]
    pub config: PathBuf,

    /// Download output folder (created if missing).
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub out: PathBuf,

    /// Comma-separated list of tags to filter artifacts by.
    #[arg(long, global = true, value_delimiter = ',', value_name = "TAGS")]
    pub tags: Vec<String>,

    /// Local Maven repository for `addToLocalMaven` artifacts [default: ~/.m2].
    #[arg(long, global = true, value_name = "PATH")]
    pub local_maven_repository: Option<String>,

    /// Append logs to this file instead of stderr.
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Treat artifacts without a derivable download URL as errors.
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum CliCommand {
    /// Download the plugins (including libraries tagged "plugin") and their dependencies.
    Plugins,

    /// Download the libraries and their dependencies.
    Libraries,
}

impl Cli {
    /// Runs the selected command. `Ok(false)` means resolution reported errors.
    pub fn run(self) -> Result<bool> {
        let cfg = config::load()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let scope = match self.command {
            None => Scope::All,
            Some(CliCommand::Plugins) => Scope::Plugins,
            Some(CliCommand::Libraries) => Scope::Libraries,
        };
        run_resolve(scope, &self.global, &cfg)
    }
}

/// 0 when resolution finished without errors; 1 on resolution errors or a fatal error.
pub fn exit_code(result: &Result<bool>) -> i32 {
    match result {
        Ok(true) => 0,
        Ok(false) | Err(_) => 1,
    }
}
