//! # amino-tx — Transaction Signing & Binary Encoding
//!
//! This crate is the signing pipeline for an account-based ledger: it turns
//! a typed message payload into (a) the canonical byte sequence a private
//! key signs, and (b) the final length-prefixed, type-tagged binary
//! envelope — as a lower-case hex string — ready for broadcast.
//!
//! Both outputs are *format contracts*. A single byte of drift in either
//! one and the reference network rejects your transaction, so every
//! encoding rule in this crate is deterministic by construction, not by
//! accident of map iteration order.
//!
//! ## Architecture
//!
//! The crate is split into modules that mirror the actual stages of the
//! pipeline:
//!
//! - **codec** — Canonical signable rendering (sorted-key, whitespace-free
//!   JSON) and the Amino-style wire encoding (varint length prefixes plus
//!   fixed 4-byte type tags).
//! - **crypto** — EC point model, SEC1 public-key compression, and the
//!   [`Signer`](crypto::Signer) capability with a secp256k1 implementation.
//! - **transaction** — The [`Transaction`](transaction::Transaction)
//!   assembler: construction, sign-byte generation, signature attachment,
//!   envelope serialization.
//! - **config** — Wire-format constants and construction defaults. Every
//!   magic number lives there, nowhere else.
//!
//! ## Pipeline
//!
//! 1. **Build** — [`TransactionBuilder`](transaction::TransactionBuilder)
//!    assembles the fields; `chain_id` and the message are mandatory.
//! 2. **Sign bytes** — the assembler projects the message into its signable
//!    form, wraps it in the canonical sign payload (numbers as decimal
//!    strings, keys sorted), and renders deterministic bytes.
//! 3. **Sign** — the external signer signs the *hex text* of those bytes.
//!    Yes, the hex text, not the raw bytes. See
//!    [`transaction::signing`] for why we will not "fix" that.
//! 4. **Serialize** — the signed envelope is rendered in binary and handed
//!    back as lower-case hex.
//!
//! ## Design Philosophy
//!
//! 1. Determinism over cleverness — the output gets signed.
//! 2. Invariants live in the type system: the single-signer rule is an
//!    enum, not a comment.
//! 3. No `unwrap()` outside tests. Encoding money movements is not the
//!    place for panics.

pub mod codec;
pub mod config;
pub mod crypto;
pub mod transaction;

pub use codec::{render_signable, render_wire, EncodingError, WireValue};
pub use crypto::{CompressedPublicKey, EcPoint, Secp256k1Signer, Signer};
pub use transaction::{Message, Transaction, TransactionBuilder, TxError};
