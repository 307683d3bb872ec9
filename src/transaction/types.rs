//! Value types of the signing pipeline: the attached signature, the
//! signature state machine, and the canonical sign payload.

use serde::Serialize;
use serde_json::Value;

use crate::codec::WireValue;
use crate::crypto::CompressedPublicKey;

// ---------------------------------------------------------------------------
// StdSignature
// ---------------------------------------------------------------------------

/// A signature attached to a transaction. Immutable once constructed.
///
/// Carries the account number and sequence it was produced against, because
/// the wire format embeds both next to the signature bytes — a verifier
/// replays the sign payload from these fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StdSignature {
    /// SEC1-compressed public key of the signer.
    pub public_key: CompressedPublicKey,
    /// Raw signature bytes (64-byte compact `r ‖ s` for the stock signer).
    pub signature: Vec<u8>,
    /// Account number the signature was computed against.
    pub account_number: u64,
    /// Sequence number the signature was computed against.
    pub sequence: u64,
}

impl StdSignature {
    /// The wire projection of the signature record: prefixed public key,
    /// signature bytes, account number, sequence — in that order, wrapped
    /// in a length-prefixed untagged record.
    pub fn wire_form(&self) -> WireValue {
        WireValue::record(vec![
            self.public_key.wire_form(),
            WireValue::Bytes(self.signature.clone()),
            WireValue::Uint(self.account_number),
            WireValue::Uint(self.sequence),
        ])
    }
}

// ---------------------------------------------------------------------------
// SignState
// ---------------------------------------------------------------------------

/// Signature state of a transaction.
///
/// This is deliberately a sum type rather than a `Vec<StdSignature>`: the
/// assembler supports exactly one signer, and "at most one signature" is
/// an invariant worth making unrepresentable instead of documenting.
/// Attaching a second signature *replaces* the first — never appends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignState {
    /// Fresh from the builder; `serialize()` will refuse to run.
    Unsigned,
    /// Exactly one signature attached.
    Signed(StdSignature),
}

impl SignState {
    /// Returns `true` once a signature is attached.
    pub fn is_signed(&self) -> bool {
        matches!(self, SignState::Signed(_))
    }

    /// The attached signature, if any.
    pub fn signature(&self) -> Option<&StdSignature> {
        match self {
            SignState::Signed(sig) => Some(sig),
            SignState::Unsigned => None,
        }
    }
}

// ---------------------------------------------------------------------------
// SignPayload
// ---------------------------------------------------------------------------

/// The canonical structure a private key signs.
///
/// Field order is fixed (alphabetical — the canonical renderer sorts keys
/// anyway, but declaring them sorted keeps the struct honest about what
/// goes out). Numeric fields are decimal strings by design: it guarantees
/// the same bytes on every platform regardless of native numeric-precision
/// behavior. Any deviation here breaks signature verification against the
/// reference network.
#[derive(Debug, Clone, Serialize)]
pub struct SignPayload {
    /// Account number, stringified.
    pub account_number: String,
    /// Target network identifier.
    pub chain_id: String,
    /// Reserved; always `null` on the wire.
    pub data: Option<String>,
    /// Free-form memo, empty string when unset.
    pub memo: String,
    /// Signable projections of the attached messages (always one element
    /// in this assembler).
    pub msgs: Vec<Value>,
    /// Sequence number, stringified.
    pub sequence: String,
    /// Origin tag, stringified.
    pub source: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
