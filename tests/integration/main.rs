//! as2-dump integration tests.
//!
//! These exercise the crate the way an embedding transport layer would:
//! hold the dumper behind `Arc<dyn OutgoingDumper>`, ask for a sink
//! right before "sending", stream the wire bytes into it, and read the
//! dump files back off disk.
//!
//! Every test works in its own directory under the system temp dir and
//! cleans up after itself.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use as2_dump::OutgoingMessage;


// ── Harness ───────────────────────────────────────────────────────────────────

/// Stand-in for a transport message. Carries only the id surface a
/// filename policy may consult; the "wire bytes" live in the test body.
pub struct WireMessage {
    pub id: Option<String>,
}

impl WireMessage {
    pub fn anonymous() -> Self {
        Self { id: None }
    }

    pub fn with_id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
        }
    }
}

impl OutgoingMessage for WireMessage {
    fn message_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Fresh empty directory under the system temp dir, unique per test.
pub fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("as2-dump-it-{label}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

/// The single file in `dir`. Errors if the directory is empty or holds
/// more than one entry.
pub fn sole_file(dir: &Path) -> Result<PathBuf> {
    let mut entries = std::fs::read_dir(dir).context("read dump directory")?;
    let entry = entries
        .next()
        .context("dump directory is empty")?
        .context("read dir entry")?;
    anyhow::ensure!(
        entries.next().is_none(),
        "dump directory holds more than one file"
    );
    Ok(entry.path())
}

/// Whether `name` matches the timestamp scheme `as2-outgoing-<digits>.http`.
pub fn is_timestamp_dump_name(name: &str) -> bool {
    name.strip_prefix("as2-outgoing-")
        .and_then(|rest| rest.strip_suffix(".http"))
        .map(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(false)
}
