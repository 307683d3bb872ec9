//! # Crypto Module
//!
//! The crate's boundary with elliptic-curve cryptography.
//!
//! ```text
//! point.rs  — EC point model and SEC1 public-key compression
//! signer.rs — Signer capability trait + secp256k1 implementation
//! ```
//!
//! The signing primitive itself is treated as an external capability: the
//! transaction assembler only asks a [`Signer`] for a signature and a
//! derived public key, and compresses the latter locally. The one concrete
//! implementation we ship, [`Secp256k1Signer`], wraps the audited
//! `secp256k1` bindings — nobody here is rolling their own curve math.

pub mod point;
pub mod signer;

pub use point::{CompressedPublicKey, EcPoint, PointError};
pub use signer::{Secp256k1Signer, Signer, SignerError};
