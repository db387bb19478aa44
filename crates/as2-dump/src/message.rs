//! Opaque handle for a request about to be transmitted.

/// A request the transport layer is about to put on the wire.
///
/// The dump side-channel never interprets message content — the handle
/// exists only so a dumper can tell requests apart. The one surface is
/// an optional stable identifier, consumed by filename policies that
/// key dump files on the message rather than the clock.
pub trait OutgoingMessage {
    /// Stable identifier assigned by the transport layer, if any.
    fn message_id(&self) -> Option<&str> {
        None
    }
}
