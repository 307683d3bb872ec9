//! Signing orchestration: sign bytes → external signer → attached
//! signature.
//!
//! Signing is a separate step from building because key material may not
//! be available at construction time (hardware wallet, remote signer).
//! The procedure, in order:
//!
//! 1. Compute the canonical sign bytes.
//! 2. Hand the signer the **lower-case hex text** of those bytes — not the
//!    raw bytes. This double-encoding is the reference network's signing
//!    convention; every conforming implementation signs the hex string,
//!    and a transaction signed over the raw bytes fails verification on
//!    chain. Preserve it.
//! 3. Derive and compress the public key, then attach the signature,
//!    replacing any previous one.

use tracing::debug;

use crate::crypto::{CompressedPublicKey, Signer};
use crate::transaction::builder::Transaction;
use crate::transaction::message::Message;
use crate::transaction::TxError;

/// Signs `tx` with `signer` using the hex-encoded private key.
///
/// When `message_override` is given, the sign bytes are computed over the
/// override's signable form instead of the attached message's.
///
/// Returns the now-signed transaction for chaining.
///
/// # Errors
///
/// - [`TxError::MissingKey`] when `private_key_hex` is empty.
/// - [`TxError::MalformedKey`] when it is not valid hex.
/// - [`TxError::Signer`] when the backend rejects the key or fails.
/// - [`TxError::InvalidPoint`] when key derivation yields the identity.
pub fn sign_transaction<'a>(
    tx: &'a mut Transaction,
    signer: &dyn Signer,
    private_key_hex: &str,
    message_override: Option<&dyn Message>,
) -> Result<&'a mut Transaction, TxError> {
    if private_key_hex.is_empty() {
        return Err(TxError::MissingKey);
    }
    let private_key = hex::decode(private_key_hex).map_err(|_| TxError::MalformedKey)?;

    let sign_bytes = tx.sign_bytes_with(message_override)?;
    // The hex-text convention: the signer sees the string, not the bytes.
    let sign_bytes_hex = hex::encode(&sign_bytes);
    let signature = signer.sign(&sign_bytes_hex, &private_key)?;

    let point = signer.derive_public_key(&private_key)?;
    let public_key = CompressedPublicKey::compress(&point)?;

    debug!(
        public_key = %public_key,
        signature_len = signature.len(),
        sequence = tx.sequence(),
        "attaching signature"
    );
    tx.add_signature(public_key, signature);
    Ok(tx)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
