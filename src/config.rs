//! # Wire-Format Constants & Construction Defaults
//!
//! Every magic number in the crate lives here. If you're hardcoding a type
//! prefix somewhere else, you're doing it wrong.
//!
//! The two 4-byte type prefixes below are *registered* identifiers on the
//! reference network. They are not ours to choose: change one and every
//! node on the planet rejects the resulting bytes.

/// A fixed 4-byte type-prefix tag identifying a structured record's schema
/// in the wire format.
pub type TypePrefix = [u8; 4];

// ---------------------------------------------------------------------------
// Registered type prefixes
// ---------------------------------------------------------------------------

/// Type prefix of the standard transaction envelope. The final broadcast
/// artifact always reads `varint(total length) ‖ this tag ‖ fields`.
pub const STD_TX_PREFIX: TypePrefix = [0xF0, 0x62, 0x5D, 0xEE];

/// Type prefix of a compressed secp256k1 public key. Precedes the
/// length-prefixed 33-byte key inside a signature record.
pub const PUBKEY_SECP256K1_PREFIX: TypePrefix = [0xEB, 0x5A, 0xE9, 0x87];

// ---------------------------------------------------------------------------
// Key geometry
// ---------------------------------------------------------------------------

/// Length of a SEC1-compressed public key: 1 parity byte + 32-byte x.
pub const COMPRESSED_KEY_LEN: usize = 33;

/// Length of one big-endian EC coordinate.
pub const COORDINATE_LEN: usize = 32;

// ---------------------------------------------------------------------------
// Construction defaults
// ---------------------------------------------------------------------------
//
// These are explicit, recognized defaults applied by the builder — not
// ambient global state. A caller who never sets them gets exactly these.

/// Default account number for a freshly built transaction.
pub const DEFAULT_ACCOUNT_NUMBER: u64 = 0;

/// Default per-account sequence number.
pub const DEFAULT_SEQUENCE: u64 = 0;

/// Default origin tag.
pub const DEFAULT_SOURCE: u64 = 0;
