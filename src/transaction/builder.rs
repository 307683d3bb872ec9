//! Transaction construction and the assembler itself.
//!
//! The [`TransactionBuilder`] enforces a disciplined construction flow:
//! set the fields, call `.build()`, and get back an unsigned
//! [`Transaction`] — or a [`TxError::MissingField`] if `chain_id` or the
//! message payload is absent. Defaults for the numeric fields come from
//! [`crate::config`], explicitly, at build time.
//!
//! The builder does not sign — that happens in [`super::signing`]. This
//! separation keeps construction testable without key material.

use std::fmt;

use serde_json::Value;
use tracing::{debug, trace};

use crate::codec::{render_signable, render_wire, EncodingError, WireValue};
use crate::config::{DEFAULT_ACCOUNT_NUMBER, DEFAULT_SEQUENCE, DEFAULT_SOURCE, STD_TX_PREFIX};
use crate::crypto::{CompressedPublicKey, Signer};
use crate::transaction::message::Message;
use crate::transaction::types::{SignPayload, SignState, StdSignature};
use crate::transaction::TxError;

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A ledger transaction moving through the signing pipeline.
///
/// Constructed once per logical transfer, mutated only by signature
/// attachment, consumed by [`Transaction::serialize`]. Do not reuse one
/// instance across unrelated broadcasts — they are cheap, build a new one.
///
/// # Ownership
///
/// A `Transaction` is single-owner. [`Transaction::sign`] and
/// [`Transaction::add_signature`] mutate internal state without
/// synchronization; if you share an instance across threads, exclusive
/// access during mutation is on you.
pub struct Transaction {
    /// Target network identifier. Immutable after construction, never empty.
    chain_id: String,
    /// Per-account identifier assigned by the ledger.
    account_number: u64,
    /// Monotonic per-account sequence number (replay protection).
    sequence: u64,
    /// Free-form memo; empty string when unset.
    memo: String,
    /// Origin tag identifying the submitting tool or service.
    source: u64,
    /// The message payload. Never absent after construction.
    message: Box<dyn Message>,
    /// Signature state: `Unsigned` fresh from the builder, `Signed` after
    /// [`Transaction::add_signature`].
    sign_state: SignState,
}

impl Transaction {
    /// Returns the canonical bytes a private key signs for this
    /// transaction, using the attached message's signable projection.
    ///
    /// Pure and idempotent: repeated calls on an unmutated transaction
    /// return identical bytes, and two transactions built from
    /// field-identical parameters agree byte for byte.
    pub fn sign_bytes(&self) -> Result<Vec<u8>, TxError> {
        self.sign_bytes_with(None)
    }

    /// Like [`Transaction::sign_bytes`], but signs over `message_override`
    /// instead of the attached message when one is given.
    ///
    /// The override affects only the sign-byte computation; the attached
    /// message still provides the wire form at serialization time.
    pub fn sign_bytes_with(
        &self,
        message_override: Option<&dyn Message>,
    ) -> Result<Vec<u8>, TxError> {
        let msg_form: Value = match message_override {
            Some(msg) => msg.signable_form(),
            None => self.message.signable_form(),
        };

        // Numeric fields travel as decimal strings — canonicalization
        // rule of the reference network, not a convenience.
        let payload = SignPayload {
            account_number: self.account_number.to_string(),
            chain_id: self.chain_id.clone(),
            data: None,
            memo: self.memo.clone(),
            msgs: vec![msg_form],
            sequence: self.sequence.to_string(),
            source: self.source.to_string(),
        };

        let value = serde_json::to_value(&payload).map_err(EncodingError::from)?;
        let bytes = render_signable(&value)?;
        trace!(sign_bytes_len = bytes.len(), chain_id = %self.chain_id, "computed sign bytes");
        Ok(bytes)
    }

    /// Attaches a signature, **replacing** any previously attached one.
    ///
    /// The signature record captures the transaction's current account
    /// number and sequence. Single-signer only: calling this twice leaves
    /// exactly one signature, the second one.
    pub fn add_signature(&mut self, public_key: CompressedPublicKey, signature: Vec<u8>) {
        self.sign_state = SignState::Signed(StdSignature {
            public_key,
            signature,
            account_number: self.account_number,
            sequence: self.sequence,
        });
    }

    /// Signs the transaction with the given signer and hex-encoded private
    /// key, returning `&mut self` for chaining.
    ///
    /// Convenience wrapper around [`super::signing::sign_transaction`];
    /// see there for the exact procedure and the hex-text convention.
    pub fn sign(
        &mut self,
        signer: &dyn Signer,
        private_key_hex: &str,
        message_override: Option<&dyn Message>,
    ) -> Result<&mut Self, TxError> {
        super::signing::sign_transaction(self, signer, private_key_hex, message_override)
    }

    /// Renders the final, broadcast-ready envelope as a lower-case hex
    /// string.
    ///
    /// Envelope field order: messages, signatures, memo, source, data
    /// (empty). Side-effect-free — the transaction is not mutated, though
    /// after this call it has done its job and should be dropped.
    ///
    /// # Errors
    ///
    /// [`TxError::MissingSignature`] if the transaction was never signed.
    /// That is a terminal misuse of the pipeline, not a retry condition.
    pub fn serialize(&self) -> Result<String, TxError> {
        let SignState::Signed(signature) = &self.sign_state else {
            return Err(TxError::MissingSignature);
        };

        let envelope = WireValue::tagged_record(
            STD_TX_PREFIX,
            vec![
                WireValue::List(vec![self.message.wire_form()]),
                WireValue::List(vec![signature.wire_form()]),
                WireValue::Text(self.memo.clone()),
                WireValue::Uint(self.source),
                WireValue::Bytes(Vec::new()),
            ],
        );

        let bytes = render_wire(&envelope);
        debug!(envelope_len = bytes.len(), chain_id = %self.chain_id, "serialized transaction");
        Ok(hex::encode(bytes))
    }

    /// Target network identifier.
    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    /// Account number.
    pub fn account_number(&self) -> u64 {
        self.account_number
    }

    /// Sequence number.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Memo text.
    pub fn memo(&self) -> &str {
        &self.memo
    }

    /// Origin tag.
    pub fn source(&self) -> u64 {
        self.source
    }

    /// Returns `true` once a signature is attached.
    pub fn is_signed(&self) -> bool {
        self.sign_state.is_signed()
    }

    /// The attached signature, if any.
    pub fn signature(&self) -> Option<&StdSignature> {
        self.sign_state.signature()
    }
}

impl fmt::Debug for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transaction")
            .field("chain_id", &self.chain_id)
            .field("account_number", &self.account_number)
            .field("sequence", &self.sequence)
            .field("memo", &self.memo)
            .field("source", &self.source)
            .field("signed", &self.is_signed())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Transaction`] instances.
///
/// # Usage
///
/// ```rust,ignore
/// let tx = TransactionBuilder::new()
///     .chain_id("test-chain")
///     .account_number(1)
///     .sequence(5)
///     .message(my_transfer_msg)
///     .build()?;
/// ```
///
/// `chain_id` and `message` are mandatory; everything else falls back to
/// the explicit defaults in [`crate::config`].
pub struct TransactionBuilder {
    chain_id: Option<String>,
    account_number: u64,
    sequence: u64,
    memo: String,
    source: u64,
    message: Option<Box<dyn Message>>,
}

impl TransactionBuilder {
    /// Creates a builder with the recognized defaults: account number,
    /// sequence, and source all 0, memo empty.
    pub fn new() -> Self {
        Self {
            chain_id: None,
            account_number: DEFAULT_ACCOUNT_NUMBER,
            sequence: DEFAULT_SEQUENCE,
            memo: String::new(),
            source: DEFAULT_SOURCE,
            message: None,
        }
    }

    /// Sets the target network identifier. Required.
    pub fn chain_id(mut self, chain_id: &str) -> Self {
        self.chain_id = Some(chain_id.to_string());
        self
    }

    /// Sets the account number.
    pub fn account_number(mut self, account_number: u64) -> Self {
        self.account_number = account_number;
        self
    }

    /// Sets the sequence number.
    pub fn sequence(mut self, sequence: u64) -> Self {
        self.sequence = sequence;
        self
    }

    /// Sets the memo text.
    pub fn memo(mut self, memo: &str) -> Self {
        self.memo = memo.to_string();
        self
    }

    /// Sets the origin tag.
    pub fn source(mut self, source: u64) -> Self {
        self.source = source;
        self
    }

    /// Attaches the message payload. Required.
    pub fn message(mut self, message: impl Message + 'static) -> Self {
        self.message = Some(Box::new(message));
        self
    }

    /// Consumes the builder and produces an unsigned [`Transaction`].
    ///
    /// # Errors
    ///
    /// [`TxError::MissingField`] when `chain_id` is absent or empty, or
    /// when no message was attached.
    pub fn build(self) -> Result<Transaction, TxError> {
        let chain_id = match self.chain_id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(TxError::MissingField("chain_id")),
        };
        let message = self.message.ok_or(TxError::MissingField("message"))?;

        Ok(Transaction {
            chain_id,
            account_number: self.account_number,
            sequence: self.sequence,
            memo: self.memo,
            source: self.source,
            message,
            sign_state: SignState::Unsigned,
        })
    }
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
