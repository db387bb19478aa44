//! Configuration for the dump side-channel.
//!
//! Embedding transports carry a `[dump]` table in their config file and
//! call [`DumpConfig::build`] to obtain the dumper it describes.
//! Resolution order: environment variables → config file → defaults.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::directory::{DirectoryDumper, FilenamePolicy, MessageIdFilename, TimestampFilename};
use crate::dumper::{NoopDumper, OutgoingDumper};

/// Settings for outgoing-request dumping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpConfig {
    /// Master switch. Disabled builds a dumper that never produces files.
    pub enabled: bool,
    /// Directory dump files are written into. Must exist when enabled.
    pub directory: PathBuf,
    /// Filename derivation scheme.
    pub filename: FilenameScheme,
}

/// How dump filenames are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilenameScheme {
    /// Wall-clock milliseconds. Collides within one millisecond.
    Timestamp,
    /// Message id, with a timestamp fallback for id-less messages.
    MessageId,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            directory: PathBuf::from("/var/spool/as2/outgoing"),
            filename: FilenameScheme::Timestamp,
        }
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("dump directory {0} does not exist")]
    MissingDirectory(PathBuf),
    #[error("dump path {0} is not a directory")]
    NotADirectory(PathBuf),
    #[error("failed to read {0}: {1}")]
    ReadFailed(PathBuf, std::io::Error),
    #[error("failed to parse {0}: {1}")]
    ParseFailed(PathBuf, toml::de::Error),
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl DumpConfig {
    /// Load settings from a TOML file, then apply env overrides.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadFailed(path.clone(), e))?;
        let mut config: DumpConfig =
            toml::from_str(&text).map_err(|e| ConfigError::ParseFailed(path, e))?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply AS2_DUMP__* env var overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("AS2_DUMP__ENABLED") {
            self.enabled = v == "true" || v == "1";
        }
        if let Ok(v) = std::env::var("AS2_DUMP__DIRECTORY") {
            self.directory = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var("AS2_DUMP__FILENAME") {
            match v.as_str() {
                "timestamp" => self.filename = FilenameScheme::Timestamp,
                "message-id" => self.filename = FilenameScheme::MessageId,
                _ => {}
            }
        }
    }

    /// Build the dumper these settings describe.
    ///
    /// Disabled settings yield a [`NoopDumper`]. Enabled settings yield a
    /// [`DirectoryDumper`]; a missing directory is the one hard failure,
    /// everything past construction fails soft per request.
    pub fn build(&self) -> Result<Arc<dyn OutgoingDumper>, ConfigError> {
        if !self.enabled {
            tracing::debug!("outgoing request dumping disabled");
            return Ok(Arc::new(NoopDumper));
        }

        let policy: Box<dyn FilenamePolicy> = match self.filename {
            FilenameScheme::Timestamp => Box::new(TimestampFilename),
            FilenameScheme::MessageId => Box::new(MessageIdFilename),
        };
        let dumper = DirectoryDumper::with_policy(self.directory.clone(), policy)?;
        tracing::info!(directory = %self.directory.display(), "outgoing request dumping enabled");
        Ok(Arc::new(dumper))
    }
}
