//! # Transaction Module
//!
//! Construction, sign-byte generation, signature attachment, and final
//! envelope serialization for ledger transactions.
//!
//! ## Architecture
//!
//! ```text
//! types.rs   — StdSignature, SignState, SignPayload value types
//! message.rs — The Message capability trait (payloads are external)
//! builder.rs — TransactionBuilder + the Transaction assembler itself
//! signing.rs — Orchestration of sign bytes → signer → attached signature
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build** — [`TransactionBuilder`] assembles the fields; `chain_id`
//!    and the message payload are mandatory.
//! 2. **Sign bytes** — [`Transaction::sign_bytes`] renders the canonical
//!    payload. Pure and idempotent; call it as often as you like.
//! 3. **Sign** — [`sign_transaction`] (or the chaining
//!    [`Transaction::sign`]) attaches exactly one signature.
//! 4. **Serialize** — [`Transaction::serialize`] emits the broadcast-ready
//!    hex string. Calling it before signing is a terminal error, not a
//!    retry condition.
//!
//! ## Design Decisions
//!
//! - The signature slot is a sum type ([`SignState`]), not a list. The
//!   wire format supports multi-signature lists; this assembler supports
//!   exactly one signer, and the type system enforces it.
//! - Numeric fields in the sign payload travel as decimal strings. That is
//!   the canonicalization rule of the reference network, chosen so that
//!   platforms with different numeric-precision behavior still produce
//!   identical bytes.
//! - A `Transaction` is single-owner. `sign` and `add_signature` mutate
//!   internal state with no synchronization; concurrent mutation of one
//!   instance is the caller's bug to avoid.
//! - On any error, discard the transaction and build a fresh one. Internal
//!   state is not guaranteed resumable mid-sequence, and transactions are
//!   cheap to rebuild.

use thiserror::Error;

use crate::codec::EncodingError;
use crate::crypto::{PointError, SignerError};

pub mod builder;
pub mod message;
pub mod signing;
pub mod types;

pub use builder::{Transaction, TransactionBuilder};
pub use message::Message;
pub use signing::sign_transaction;
pub use types::{SignPayload, SignState, StdSignature};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised while building, signing, or serializing a transaction.
///
/// Every variant is immediate and non-retryable: this module performs no
/// I/O, so there is nothing to wait out. Treat any error as fatal to the
/// current build attempt.
#[derive(Debug, Error)]
pub enum TxError {
    /// A required construction field was absent (or empty, for `chain_id`).
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// `sign` was called with an empty private-key string.
    #[error("signing requires a private key")]
    MissingKey,

    /// The private-key string is not valid hex.
    #[error("private key is not valid hex")]
    MalformedKey,

    /// `serialize` was called before any signature was attached.
    #[error("transaction has no signature; sign it before serializing")]
    MissingSignature,

    /// The signable renderer rejected the payload shape.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Public-key compression was handed a degenerate point.
    #[error(transparent)]
    InvalidPoint(#[from] PointError),

    /// The signer backend failed.
    #[error(transparent)]
    Signer(#[from] SignerError),
}

// ---------------------------------------------------------------------------
// Shared test fixtures
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod testutil {
    use serde_json::{json, Value};

    use crate::codec::WireValue;
    use crate::config::TypePrefix;
    use crate::transaction::message::Message;

    /// Type prefix used by the test message schema. Any registered-looking
    /// tag works; the assembler treats message tags as opaque.
    pub const NOTE_MSG_PREFIX: TypePrefix = [0x2A, 0x2C, 0x87, 0xFA];

    /// A minimal message payload: one string field.
    #[derive(Debug, Clone)]
    pub struct NoteMsg {
        pub foo: String,
    }

    impl NoteMsg {
        pub fn new(foo: &str) -> Self {
            Self { foo: foo.to_string() }
        }
    }

    impl Message for NoteMsg {
        fn signable_form(&self) -> Value {
            json!({ "foo": self.foo })
        }

        fn wire_form(&self) -> WireValue {
            WireValue::tagged_record(
                NOTE_MSG_PREFIX,
                vec![WireValue::Text(self.foo.clone())],
            )
        }
    }
}
