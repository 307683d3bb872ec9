//! Unsigned varint encoding: base-128, least-significant group first,
//! continuation bit in the high bit of each byte.
//!
//! This is the length-prefix primitive of the entire wire format. Every
//! structured record, string, and byte blob on the wire is preceded by one
//! of these, so the encoding here has to match the reference network
//! exactly — `300` is `AC 02`, not anything more creative.

/// Maximum encoded length of a `u64` varint: ceil(64 / 7) = 10 bytes.
pub const MAX_VARINT_LEN: usize = 10;

/// Appends the varint encoding of `value` to `buf`.
///
/// Each output byte carries 7 payload bits; the high bit is set on every
/// byte except the last. Zero encodes as the single byte `0x00`.
pub fn put_uvarint(buf: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        buf.push((value as u8 & 0x7F) | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
}

/// Returns the varint encoding of `value` as a fresh buffer.
pub fn encode_uvarint(value: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(MAX_VARINT_LEN);
    put_uvarint(&mut buf, value);
    buf
}

/// Decodes a varint from the front of `bytes`.
///
/// Returns the decoded value and the number of bytes consumed, or `None`
/// if the input is truncated (a continuation bit with nothing after it)
/// or the value overflows 64 bits.
pub fn decode_uvarint(bytes: &[u8]) -> Option<(u64, usize)> {
    let mut value: u64 = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        if i >= MAX_VARINT_LEN {
            return None;
        }
        let group = u64::from(byte & 0x7F);
        // The 10th byte may only contribute the single remaining bit.
        if i == MAX_VARINT_LEN - 1 && byte > 0x01 {
            return None;
        }
        value |= group << (7 * i);
        if byte & 0x80 == 0 {
            return Some((value, i + 1));
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_encodings() {
        assert_eq!(encode_uvarint(0), vec![0x00]);
        assert_eq!(encode_uvarint(1), vec![0x01]);
        assert_eq!(encode_uvarint(127), vec![0x7F]);
        assert_eq!(encode_uvarint(128), vec![0x80, 0x01]);
        assert_eq!(encode_uvarint(300), vec![0xAC, 0x02]);
        assert_eq!(encode_uvarint(16_384), vec![0x80, 0x80, 0x01]);
    }

    #[test]
    fn max_u64_is_ten_bytes() {
        let enc = encode_uvarint(u64::MAX);
        assert_eq!(enc.len(), MAX_VARINT_LEN);
        assert_eq!(enc[9], 0x01);
    }

    #[test]
    fn roundtrip_boundary_values() {
        let cases = [
            0u64,
            1,
            127,
            128,
            255,
            256,
            300,
            16_383,
            16_384,
            u32::MAX as u64,
            u64::MAX - 1,
            u64::MAX,
        ];
        for &n in &cases {
            let enc = encode_uvarint(n);
            let (decoded, consumed) = decode_uvarint(&enc).unwrap();
            assert_eq!(decoded, n, "roundtrip failed for {n}");
            assert_eq!(consumed, enc.len());
        }
    }

    #[test]
    fn roundtrip_powers_of_two() {
        for shift in 0..64 {
            let n = 1u64 << shift;
            let (decoded, _) = decode_uvarint(&encode_uvarint(n)).unwrap();
            assert_eq!(decoded, n);
        }
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        let mut buf = encode_uvarint(300);
        buf.extend_from_slice(&[0xDE, 0xAD]);
        let (value, consumed) = decode_uvarint(&buf).unwrap();
        assert_eq!(value, 300);
        assert_eq!(consumed, 2);
    }

    #[test]
    fn decode_rejects_truncated_input() {
        // Continuation bit set, then nothing.
        assert!(decode_uvarint(&[0x80]).is_none());
        assert!(decode_uvarint(&[]).is_none());
    }

    #[test]
    fn decode_rejects_overflow() {
        // Eleven continuation bytes can never be a valid u64.
        let too_long = [0xFFu8; 11];
        assert!(decode_uvarint(&too_long).is_none());
        // Ten bytes, but the last one carries more than the single
        // remaining bit.
        let overflow = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x02];
        assert!(decode_uvarint(&overflow).is_none());
    }

    #[test]
    fn put_appends_without_clobbering() {
        let mut buf = vec![0xAA];
        put_uvarint(&mut buf, 128);
        assert_eq!(buf, vec![0xAA, 0x80, 0x01]);
    }
}
