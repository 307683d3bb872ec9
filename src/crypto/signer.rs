//! The signer capability: the seam between transaction assembly and the
//! elliptic-curve signing primitive.
//!
//! The assembler never touches curve math directly. It hands a [`Signer`]
//! the *hex text* of the sign bytes plus raw private-key material, and
//! gets back a signature and, separately, a derived public-key point.
//! Keeping this behind a trait means tests can inject deterministic fakes
//! and downstream users can plug in hardware wallets or remote signers.
//!
//! ## Why the hex text?
//!
//! The reference implementation signs `SHA-256(hex(sign_bytes))` — the
//! signature is computed over the hexadecimal *string*, not the raw bytes.
//! It looks like a double-encoding accident. It is also the format the
//! live network verifies against, so every implementation of [`Signer`]
//! must follow it. Do not "fix" this without a reference node at hand.

use secp256k1::{All, Message, PublicKey, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::crypto::point::EcPoint;

/// Errors raised by a signer backend.
///
/// Deliberately vague about *why* key material was rejected — leaking
/// details about private keys through error messages is a classic footgun.
#[derive(Debug, Error)]
pub enum SignerError {
    /// The private-key bytes are not a valid scalar for the curve.
    #[error("invalid private key: wrong length or not a valid scalar")]
    InvalidPrivateKey,

    /// The backend failed for some other reason.
    #[error("signer backend failure: {0}")]
    Backend(String),
}

/// The external signing capability consumed by the transaction assembler.
pub trait Signer {
    /// Produces a signature over the hex-text representation of the sign
    /// bytes. Returns the raw signature bytes (64-byte compact `r ‖ s` for
    /// ECDSA backends).
    fn sign(&self, sign_bytes_hex: &str, private_key: &[u8]) -> Result<Vec<u8>, SignerError>;

    /// Derives the public-key point for the given private key.
    fn derive_public_key(&self, private_key: &[u8]) -> Result<EcPoint, SignerError>;
}

/// The stock secp256k1 ECDSA signer.
///
/// Signs `SHA-256(sign_bytes_hex)` with deterministic (RFC 6979) nonces
/// and returns the 64-byte compact signature. Public keys are derived via
/// the same backend and handed out as affine coordinates for compression.
pub struct Secp256k1Signer {
    ctx: Secp256k1<All>,
}

impl Secp256k1Signer {
    /// Creates a signer with a fresh secp256k1 context.
    pub fn new() -> Self {
        Self {
            ctx: Secp256k1::new(),
        }
    }

    fn secret_key(private_key: &[u8]) -> Result<SecretKey, SignerError> {
        SecretKey::from_slice(private_key).map_err(|_| SignerError::InvalidPrivateKey)
    }
}

impl Default for Secp256k1Signer {
    fn default() -> Self {
        Self::new()
    }
}

impl Signer for Secp256k1Signer {
    fn sign(&self, sign_bytes_hex: &str, private_key: &[u8]) -> Result<Vec<u8>, SignerError> {
        let secret = Self::secret_key(private_key)?;
        let digest: [u8; 32] = Sha256::digest(sign_bytes_hex.as_bytes()).into();
        let message = Message::from_digest(digest);
        let signature = self.ctx.sign_ecdsa(&message, &secret);
        Ok(signature.serialize_compact().to_vec())
    }

    fn derive_public_key(&self, private_key: &[u8]) -> Result<EcPoint, SignerError> {
        let secret = Self::secret_key(private_key)?;
        let public = PublicKey::from_secret_key(&self.ctx, &secret);

        // Uncompressed SEC1: 0x04 ‖ x(32) ‖ y(32).
        let uncompressed = public.serialize_uncompressed();
        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        x.copy_from_slice(&uncompressed[1..33]);
        y.copy_from_slice(&uncompressed[33..65]);
        Ok(EcPoint::Affine { x, y })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
