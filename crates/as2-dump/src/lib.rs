//! as2-dump — diagnostic dump side-channel for outgoing AS2 requests.
//! Captures a byte-exact copy of what the transport layer puts on the wire.

pub mod config;
pub mod directory;
pub mod dumper;
pub mod message;

pub use config::{ConfigError, DumpConfig, FilenameScheme};
pub use directory::{DirectoryDumper, FilenamePolicy, MessageIdFilename, TimestampFilename};
pub use dumper::{DumpSink, NoopDumper, OutgoingDumper};
pub use message::OutgoingMessage;
