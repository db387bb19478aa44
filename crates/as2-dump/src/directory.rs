//! Directory-based dumper — one file per outgoing request.
//!
//! The directory must exist when the dumper is constructed and is never
//! re-checked afterwards. A directory that disappears later makes
//! individual dumps fail soft (`None`), not the component.

use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::ConfigError;
use crate::dumper::{DumpSink, OutgoingDumper};
use crate::message::OutgoingMessage;

/// Prefix of every dump filename produced by the built-in policies.
pub const FILE_PREFIX: &str = "as2-outgoing-";
/// Suffix marking the dump content type (raw HTTP request bytes).
pub const FILE_SUFFIX: &str = ".http";

// ── Filename policies ─────────────────────────────────────────────────────────

/// Filename-derivation policy for [`DirectoryDumper`].
///
/// Injected at construction so alternative naming schemes can replace
/// the default without touching the dump control flow.
pub trait FilenamePolicy: Send + Sync {
    /// Local filename (no path component) under which `msg` is stored.
    fn store_filename(&self, msg: &dyn OutgoingMessage) -> String;
}

/// Default policy: `as2-outgoing-<epoch-millis>.http`.
///
/// Two calls within the same millisecond derive the same name, and the
/// later dump overwrites the earlier one. Known limitation of the
/// time-based scheme; use [`MessageIdFilename`] where that matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampFilename;

impl FilenamePolicy for TimestampFilename {
    fn store_filename(&self, _msg: &dyn OutgoingMessage) -> String {
        format!("{FILE_PREFIX}{}{FILE_SUFFIX}", epoch_millis())
    }
}

/// Message-id keyed policy: `as2-outgoing-<id>.http`.
///
/// The id is sanitized to filesystem-safe characters. Messages without
/// an id fall back to the timestamp form.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageIdFilename;

impl FilenamePolicy for MessageIdFilename {
    fn store_filename(&self, msg: &dyn OutgoingMessage) -> String {
        match msg.message_id() {
            Some(id) => format!("{FILE_PREFIX}{}{FILE_SUFFIX}", sanitize(id)),
            None => TimestampFilename.store_filename(msg),
        }
    }
}

/// Unix time in milliseconds. A clock before the epoch reads as zero.
fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Replace everything outside `[A-Za-z0-9._-]` with `_`.
fn sanitize(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

// ── Dumper ────────────────────────────────────────────────────────────────────

/// Dumps each outgoing request into its own file under a fixed directory.
pub struct DirectoryDumper {
    dump_directory: PathBuf,
    filename_policy: Box<dyn FilenamePolicy>,
}

impl DirectoryDumper {
    /// Dumper over `directory` with the default timestamp filename policy.
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Self::with_policy(directory, Box::new(TimestampFilename))
    }

    /// Dumper over `directory` with an explicit filename policy.
    ///
    /// `directory` must already exist — this constructor validates it but
    /// never creates, locks, or scans it.
    pub fn with_policy(
        directory: impl Into<PathBuf>,
        filename_policy: Box<dyn FilenamePolicy>,
    ) -> Result<Self, ConfigError> {
        let dump_directory = directory.into();
        if !dump_directory.exists() {
            return Err(ConfigError::MissingDirectory(dump_directory));
        }
        if !dump_directory.is_dir() {
            return Err(ConfigError::NotADirectory(dump_directory));
        }
        Ok(Self {
            dump_directory,
            filename_policy,
        })
    }

    /// The directory dump files are written into.
    pub fn dump_directory(&self) -> &Path {
        &self.dump_directory
    }
}

impl OutgoingDumper for DirectoryDumper {
    fn dump_outgoing_request(&self, msg: &dyn OutgoingMessage) -> Option<DumpSink> {
        let destination = self
            .dump_directory
            .join(self.filename_policy.store_filename(msg));
        tracing::info!(path = %destination.display(), "dumping outgoing request");

        match File::create(&destination) {
            Ok(file) => Some(Box::new(BufWriter::new(file))),
            Err(e) => {
                tracing::warn!(
                    path = %destination.display(),
                    error = %e,
                    "could not open dump file, skipping dump"
                );
                None
            }
        }
    }
}

impl fmt::Debug for DirectoryDumper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryDumper")
            .field("dump_directory", &self.dump_directory)
            .finish()
    }
}
