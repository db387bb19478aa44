//! Capability contract for capturing outgoing wire bytes.
//!
//! The transport layer holds an `Arc<dyn OutgoingDumper>` and asks it
//! for a sink right before serializing a request. Dumping is a
//! best-effort diagnostic aid: a dumper that cannot provide a sink
//! says so by returning `None`, and the send proceeds regardless.

use std::io::Write;

use crate::message::OutgoingMessage;

/// Writable byte stream that receives one dumped request.
///
/// Ownership transfers to the caller on return: write the exact wire
/// bytes, then drop (or flush) it. The dumper keeps no reference.
pub type DumpSink = Box<dyn Write + Send>;

/// Trait for dumpers of outgoing requests.
///
/// Intentionally minimal. No lifecycle, no flushing, no inspection of
/// the dumped bytes — that is all the caller's side of the contract.
pub trait OutgoingDumper: Send + Sync {
    /// Obtain a sink for the raw bytes of `msg` about to be sent.
    ///
    /// `None` means dumping is unavailable for this request; the caller
    /// skips it silently. This operation never fails the send path.
    fn dump_outgoing_request(&self, msg: &dyn OutgoingMessage) -> Option<DumpSink>;
}

/// Dumper wired in when dumping is disabled. Always declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDumper;

impl OutgoingDumper for NoopDumper {
    fn dump_outgoing_request(&self, _msg: &dyn OutgoingMessage) -> Option<DumpSink> {
        None
    }
}
