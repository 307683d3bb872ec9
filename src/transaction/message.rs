//! The message capability: the seam between this crate and the ledger's
//! message-type catalog.
//!
//! The catalog itself (transfers, orders, governance votes, ...) lives
//! outside this crate. All the assembler needs from a payload is two
//! projections: the plain value that goes into the sign payload, and the
//! wire value that goes into the envelope. Dispatch is trait-based — a
//! closed set of message types implementing `Message` beats runtime
//! duck-typing every day of the week.

use serde_json::Value;

use crate::codec::WireValue;

/// A transaction payload the assembler can sign and serialize.
///
/// Implementations must keep the two projections consistent with each
/// other: they describe the same logical message to two different
/// audiences (the signer and the wire).
pub trait Message: Send {
    /// The signable projection: a plain value consumable by the canonical
    /// signable renderer. This ends up inside the sign payload's `msgs`
    /// list, so it must stay within the renderer's supported shapes.
    fn signable_form(&self) -> Value;

    /// The wire projection, already tagged with the message's own
    /// schema-specific type prefix.
    fn wire_form(&self) -> WireValue;
}
