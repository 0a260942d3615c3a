// pinr/src/cli.rs
//! Defines the command-line argument structure using clap.
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use pinr_common::error::Result;
use pinr_common::Config;

pub mod lookup;
pub mod resolve;

use crate::cli::lookup::Lookup;
use crate::cli::resolve::Resolve;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = "pinr", bin_name = "pinr")]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// TOML configuration file (replaces the PINR_* environment variables)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Artifact resolve endpoint of the repository manager
    #[arg(long, global = true, value_name = "URL")]
    pub metadata_url: Option<String>,

    /// Dependency id prefix of internally published artifacts
    #[arg(long, global = true)]
    pub prefix: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Maximum number of lookups in flight
    #[arg(long, global = true)]
    pub concurrency: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

impl CliArgs {
    /// Loads the configuration (file or environment) and applies flag overrides.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::load()?,
        };
        if let Some(url) = &self.metadata_url {
            config.metadata_url = url.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.internal_prefix = prefix.clone();
        }
        if let Some(secs) = self.timeout {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(limit) = self.concurrency {
            config.max_concurrent_lookups = limit;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Resolve(Resolve),
    Lookup(Lookup),
}

impl Command {
    pub async fn run(&self, config: &Config) -> Result<()> {
        match self {
            Self::Resolve(command) => command.run(config).await,
            Self::Lookup(command) => command.run(config).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_loaded_config() {
        let args = CliArgs::try_parse_from([
            "pinr",
            "--metadata-url",
            "https://nexus.internal/resolve",
            "--prefix",
            "acme-",
            "--timeout",
            "7",
            "--concurrency",
            "2",
            "resolve",
            "deps.json",
        ])
        .unwrap();

        let config = args.load_config().unwrap();
        assert_eq!(config.metadata_url, "https://nexus.internal/resolve");
        assert_eq!(config.internal_prefix, "acme-");
        assert_eq!(config.request_timeout, Duration::from_secs(7));
        assert_eq!(config.max_concurrent_lookups, 2);
        assert!(matches!(args.command, Command::Resolve(_)));
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let args =
            CliArgs::try_parse_from(["pinr", "--concurrency", "0", "resolve", "deps.json"]).unwrap();
        assert!(args.load_config().is_err());
    }

    #[test]
    fn lookup_takes_group_artifact_version() {
        let args = CliArgs::try_parse_from(["pinr", "-vv", "lookup", "com.nth", "mail", "RELEASE"])
            .unwrap();
        assert_eq!(args.verbose, 2);
        match args.command {
            Command::Lookup(lookup) => {
                assert_eq!(lookup.group_id, "com.nth");
                assert_eq!(lookup.version, "RELEASE");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
