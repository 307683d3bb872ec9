//! # Codec Module
//!
//! The two deterministic encoders at the heart of the signing pipeline.
//!
//! ## Architecture
//!
//! ```text
//! varint.rs    — Base-128, LSB-first unsigned varint encode/decode
//! canonical.rs — Signable renderer: sorted-key, whitespace-free JSON bytes
//! wire.rs      — Wire renderer: length-prefixed, type-tagged binary tree
//! ```
//!
//! The signable renderer produces the bytes a private key signs; the wire
//! renderer produces the bytes a node broadcasts. Both sides of that split
//! are bit-exact format contracts with the reference network, which is why
//! each encoder is its own small, heavily tested unit rather than a pass
//! through a general-purpose serializer.
//!
//! ## Design Decisions
//!
//! - The signable side accepts arbitrary [`serde_json::Value`] input (the
//!   message catalog is external) and therefore can fail with
//!   [`EncodingError`] on unsupported shapes.
//! - The wire side works on the closed [`WireValue`] tree, which makes
//!   unsupported shapes unrepresentable — the renderer is infallible.

pub mod canonical;
pub mod varint;
pub mod wire;

pub use canonical::{render_signable, EncodingError};
pub use varint::{decode_uvarint, encode_uvarint, put_uvarint};
pub use wire::{render_wire, WireValue};
