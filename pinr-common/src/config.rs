// pinr-common/src/config.rs
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use super::error::{PinrError, Result};
use super::model::version::ChannelMap;

const DEFAULT_METADATA_URL: &str =
    "http://localhost:8081/nexus/service/local/artifact/maven/resolve";
const DEFAULT_RELEASE_CHANNEL: &str = "releases";
const DEFAULT_PRERELEASE_CHANNEL: &str = "snapshot-policy";
const DEFAULT_INTERNAL_PREFIX: &str = "nth-";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const LOOKUPS_PER_CPU: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Full URL of the artifact resolve endpoint, without query string.
    pub metadata_url: String,
    pub release_channel: String,
    pub prerelease_channel: String,
    /// Identifier prefix marking internally published artifacts.
    pub internal_prefix: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub max_concurrent_lookups: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            metadata_url: DEFAULT_METADATA_URL.to_string(),
            release_channel: DEFAULT_RELEASE_CHANNEL.to_string(),
            prerelease_channel: DEFAULT_PRERELEASE_CHANNEL.to_string(),
            internal_prefix: DEFAULT_INTERNAL_PREFIX.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            max_concurrent_lookups: num_cpus::get().max(1) * LOOKUPS_PER_CPU,
        }
    }
}

/// On-disk form of [`Config`]. Every key is optional and falls back to the
/// built-in default.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    metadata_url: Option<String>,
    release_channel: Option<String>,
    prerelease_channel: Option<String>,
    internal_prefix: Option<String>,
    request_timeout_secs: Option<u64>,
    connect_timeout_secs: Option<u64>,
    max_concurrent_lookups: Option<usize>,
}

impl Config {
    /// Loads the configuration from `PINR_*` environment variables layered
    /// over the defaults.
    pub fn load() -> Result<Self> {
        debug!("Loading pinr configuration from environment");
        Self::load_with(|key| env::var(key).ok())
    }

    /// Same as [`Config::load`] but reads variables through `lookup`.
    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = var("PINR_METADATA_URL") {
            config.metadata_url = url;
        }
        if let Some(channel) = var("PINR_RELEASE_CHANNEL") {
            config.release_channel = channel;
        }
        if let Some(channel) = var("PINR_PRERELEASE_CHANNEL") {
            config.prerelease_channel = channel;
        }
        if let Some(prefix) = var("PINR_INTERNAL_PREFIX") {
            config.internal_prefix = prefix;
        }
        if let Some(raw) = var("PINR_REQUEST_TIMEOUT_SECS") {
            config.request_timeout = Duration::from_secs(parse_number(
                "PINR_REQUEST_TIMEOUT_SECS",
                &raw,
            )?);
        }
        if let Some(raw) = var("PINR_CONNECT_TIMEOUT_SECS") {
            config.connect_timeout = Duration::from_secs(parse_number(
                "PINR_CONNECT_TIMEOUT_SECS",
                &raw,
            )?);
        }
        if let Some(raw) = var("PINR_MAX_CONCURRENT_LOOKUPS") {
            config.max_concurrent_lookups = parse_number("PINR_MAX_CONCURRENT_LOOKUPS", &raw)?;
        }

        debug!("Configuration loaded: {:?}", config);
        Ok(config)
    }

    /// Reads a TOML configuration file layered over the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading pinr configuration from {}", path.display());
        let raw = fs::read_to_string(path).map_err(|e| {
            PinrError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        let file: ConfigFile = toml::from_str(&raw)?;

        let mut config = Self::default();
        if let Some(url) = file.metadata_url {
            config.metadata_url = url;
        }
        if let Some(channel) = file.release_channel {
            config.release_channel = channel;
        }
        if let Some(channel) = file.prerelease_channel {
            config.prerelease_channel = channel;
        }
        if let Some(prefix) = file.internal_prefix {
            config.internal_prefix = prefix;
        }
        if let Some(secs) = file.request_timeout_secs {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = file.connect_timeout_secs {
            config.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(limit) = file.max_concurrent_lookups {
            config.max_concurrent_lookups = limit;
        }
        Ok(config)
    }

    /// Checks the values that cannot be caught by the type system. URL
    /// syntax is checked separately when the HTTP transport is built.
    pub fn validate(&self) -> Result<()> {
        if self.metadata_url.trim().is_empty() {
            return Err(PinrError::Config("metadata_url must not be empty".into()));
        }
        if self.release_channel.trim().is_empty() || self.prerelease_channel.trim().is_empty() {
            return Err(PinrError::Config(
                "repository channel names must not be empty".into(),
            ));
        }
        if self.request_timeout.is_zero() || self.connect_timeout.is_zero() {
            return Err(PinrError::Config("timeouts must be greater than zero".into()));
        }
        if self.max_concurrent_lookups == 0 {
            return Err(PinrError::Config(
                "max_concurrent_lookups must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn channel_map(&self) -> ChannelMap {
        ChannelMap::new(&self.release_channel, &self.prerelease_channel)
    }

    /// Whether `id` follows the internal artifact naming convention.
    pub fn is_internal(&self, id: &str) -> bool {
        id.starts_with(&self.internal_prefix)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| PinrError::Config(format!("{key} must be a non-negative integer, got '{raw}'")))
}
