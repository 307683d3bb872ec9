//! EC point model and SEC1 public-key compression.
//!
//! A public key travels on the wire as 33 bytes: one parity byte (`0x02`
//! for even y, `0x03` for odd y) followed by the 32-byte big-endian x
//! coordinate. The y coordinate is recoverable from x plus the parity bit,
//! which is exactly what the reference network expects — and exactly why
//! the parity byte is not optional decoration.

use std::fmt;

use thiserror::Error;

use crate::codec::WireValue;
use crate::config::{COMPRESSED_KEY_LEN, COORDINATE_LEN, PUBKEY_SECP256K1_PREFIX};

/// Errors raised by public-key compression.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PointError {
    /// The point at infinity has no affine coordinates and therefore no
    /// compressed form. A signer handing us this is broken.
    #[error("cannot compress the point at infinity")]
    Identity,
}

/// A point on the signing curve, as handed over by a [`Signer`]
/// implementation.
///
/// Modeled as a sum type so the degenerate case is impossible to overlook:
/// every consumer has to decide what `Identity` means for them, and for
/// compression the answer is "an error".
///
/// [`Signer`]: crate::crypto::Signer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EcPoint {
    /// The identity element (point at infinity). No affine coordinates.
    Identity,
    /// An affine point with big-endian 32-byte coordinates.
    Affine {
        x: [u8; COORDINATE_LEN],
        y: [u8; COORDINATE_LEN],
    },
}

impl EcPoint {
    /// Returns `true` for the point at infinity.
    pub fn is_identity(&self) -> bool {
        matches!(self, EcPoint::Identity)
    }
}

/// A 33-byte SEC1-compressed public key: parity byte plus x coordinate.
///
/// Immutable once constructed; this is the form that gets embedded in a
/// signature record on the wire.
#[derive(Clone, PartialEq, Eq)]
pub struct CompressedPublicKey {
    bytes: [u8; COMPRESSED_KEY_LEN],
}

impl CompressedPublicKey {
    /// Compresses an affine point into the 33-byte SEC1 form.
    ///
    /// The leading byte is `0x02`, OR-ed with `0x01` when the y coordinate
    /// is odd — i.e. `0x02` for even y, `0x03` for odd y.
    ///
    /// # Errors
    ///
    /// [`PointError::Identity`] if `point` is the point at infinity.
    pub fn compress(point: &EcPoint) -> Result<Self, PointError> {
        let EcPoint::Affine { x, y } = point else {
            return Err(PointError::Identity);
        };

        let mut bytes = [0u8; COMPRESSED_KEY_LEN];
        // Big-endian y: the least significant byte is the last one.
        bytes[0] = 0x02 | (y[COORDINATE_LEN - 1] & 0x01);
        bytes[1..].copy_from_slice(x);
        Ok(Self { bytes })
    }

    /// Wraps raw 33-byte key material without validation.
    ///
    /// Intended for keys that already passed through a real curve library;
    /// this type does not re-check that x is on the curve.
    pub fn from_bytes(bytes: [u8; COMPRESSED_KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// The raw 33 bytes.
    pub fn as_bytes(&self) -> &[u8; COMPRESSED_KEY_LEN] {
        &self.bytes
    }

    /// The parity/format byte: `0x02` or `0x03`.
    pub fn format_byte(&self) -> u8 {
        self.bytes[0]
    }

    /// Hex-encoded representation, 66 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// The wire projection: the registered key-type tag followed by the
    /// length-prefixed key bytes (`tag ‖ varint(33) ‖ key`).
    pub fn wire_form(&self) -> WireValue {
        WireValue::Prefixed(
            PUBKEY_SECP256K1_PREFIX,
            Box::new(WireValue::Bytes(self.bytes.to_vec())),
        )
    }
}

impl fmt::Display for CompressedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for CompressedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompressedPublicKey({}…)", &self.to_hex()[..10])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
