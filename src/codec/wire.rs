//! Wire rendering: the length-prefixed, type-tagged binary encoding of the
//! final transaction envelope.
//!
//! Every structured record on the wire is emitted as a varint byte-length
//! followed by its body; typed records additionally carry a fixed 4-byte
//! type-prefix tag identifying their schema. The top-level envelope
//! therefore reads `varint(total) ‖ tag ‖ fields`, which is the first
//! thing a receiving node checks before parsing anything else.
//!
//! Values are modeled as a closed [`WireValue`] tree rather than arbitrary
//! dynamic input. The tree makes malformed shapes unrepresentable, so
//! rendering is infallible — the type system does the validation the
//! signable renderer has to do at runtime.

use crate::codec::varint::put_uvarint;
use crate::config::TypePrefix;

/// A value in the binary wire format.
///
/// Constructed by the transaction assembler (and by message implementations
/// for their own wire projections), consumed by [`render_wire`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireValue {
    /// Unsigned integer, encoded as a bare varint.
    Uint(u64),
    /// UTF-8 text, encoded as varint length followed by the bytes.
    Text(String),
    /// Raw bytes, encoded as varint length followed by the bytes.
    Bytes(Vec<u8>),
    /// A value preceded by a fixed 4-byte type tag and nothing else.
    /// Used for embedded typed records such as the compressed public key:
    /// `tag ‖ varint(33) ‖ key bytes`.
    Prefixed(TypePrefix, Box<WireValue>),
    /// A structured record: optional type tag plus concatenated fields,
    /// the whole body preceded by its varint byte length.
    Record {
        prefix: Option<TypePrefix>,
        fields: Vec<WireValue>,
    },
    /// An ordered sequence, encoded as the concatenation of its items.
    /// Each item is self-delimiting, so no count prefix is needed.
    List(Vec<WireValue>),
}

impl WireValue {
    /// Convenience constructor for a tagged record.
    pub fn tagged_record(prefix: TypePrefix, fields: Vec<WireValue>) -> Self {
        WireValue::Record {
            prefix: Some(prefix),
            fields,
        }
    }

    /// Convenience constructor for an untagged record.
    pub fn record(fields: Vec<WireValue>) -> Self {
        WireValue::Record {
            prefix: None,
            fields,
        }
    }

    fn encode_into(&self, buf: &mut Vec<u8>) {
        match self {
            WireValue::Uint(n) => put_uvarint(buf, *n),
            WireValue::Text(s) => {
                put_uvarint(buf, s.len() as u64);
                buf.extend_from_slice(s.as_bytes());
            }
            WireValue::Bytes(b) => {
                put_uvarint(buf, b.len() as u64);
                buf.extend_from_slice(b);
            }
            WireValue::Prefixed(tag, inner) => {
                buf.extend_from_slice(tag);
                inner.encode_into(buf);
            }
            WireValue::Record { prefix, fields } => {
                let mut body = Vec::with_capacity(128);
                if let Some(tag) = prefix {
                    body.extend_from_slice(tag);
                }
                for field in fields {
                    field.encode_into(&mut body);
                }
                put_uvarint(buf, body.len() as u64);
                buf.extend_from_slice(&body);
            }
            WireValue::List(items) => {
                for item in items {
                    item.encode_into(buf);
                }
            }
        }
    }
}

/// Renders a wire value to its binary encoding.
pub fn render_wire(value: &WireValue) -> Vec<u8> {
    let mut buf = Vec::with_capacity(256);
    value.encode_into(&mut buf);
    buf
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::varint::decode_uvarint;
    use crate::config::{PUBKEY_SECP256K1_PREFIX, STD_TX_PREFIX};

    #[test]
    fn uint_is_bare_varint() {
        assert_eq!(render_wire(&WireValue::Uint(300)), vec![0xAC, 0x02]);
    }

    #[test]
    fn text_is_length_prefixed() {
        let enc = render_wire(&WireValue::Text("memo".into()));
        assert_eq!(enc, vec![0x04, b'm', b'e', b'm', b'o']);
    }

    #[test]
    fn empty_bytes_encode_as_zero_length() {
        assert_eq!(render_wire(&WireValue::Bytes(vec![])), vec![0x00]);
    }

    #[test]
    fn prefixed_pubkey_layout() {
        // tag ‖ varint(33) ‖ 33 key bytes — the exact embedded layout of a
        // compressed public key inside a signature record.
        let key = vec![0x02; 33];
        let enc = render_wire(&WireValue::Prefixed(
            PUBKEY_SECP256K1_PREFIX,
            Box::new(WireValue::Bytes(key.clone())),
        ));
        assert_eq!(&enc[..4], &PUBKEY_SECP256K1_PREFIX);
        assert_eq!(enc[4], 0x21); // 33, single-byte varint
        assert_eq!(&enc[5..], &key[..]);
        assert_eq!(enc.len(), 4 + 1 + 33);
    }

    #[test]
    fn tagged_record_is_length_prefixed_with_tag_inside() {
        let rec = WireValue::tagged_record(
            STD_TX_PREFIX,
            vec![WireValue::Uint(1), WireValue::Text("x".into())],
        );
        let enc = render_wire(&rec);

        let (body_len, consumed) = decode_uvarint(&enc).unwrap();
        assert_eq!(body_len as usize, enc.len() - consumed);
        assert_eq!(&enc[consumed..consumed + 4], &STD_TX_PREFIX);
    }

    #[test]
    fn untagged_record_has_no_tag() {
        let rec = WireValue::record(vec![WireValue::Uint(7)]);
        assert_eq!(render_wire(&rec), vec![0x01, 0x07]);
    }

    #[test]
    fn list_concatenates_items() {
        let list = WireValue::List(vec![WireValue::Uint(1), WireValue::Uint(300)]);
        assert_eq!(render_wire(&list), vec![0x01, 0xAC, 0x02]);
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert_eq!(render_wire(&WireValue::List(vec![])), Vec::<u8>::new());
    }

    #[test]
    fn nested_records_nest_length_prefixes() {
        let inner = WireValue::record(vec![WireValue::Uint(5)]);
        let outer = WireValue::record(vec![inner]);
        // inner = 01 05, outer body = inner, outer = 02 01 05
        assert_eq!(render_wire(&outer), vec![0x02, 0x01, 0x05]);
    }

    #[test]
    fn rendering_is_deterministic() {
        let rec = WireValue::tagged_record(
            STD_TX_PREFIX,
            vec![
                WireValue::Bytes(vec![1, 2, 3]),
                WireValue::Uint(42),
                WireValue::Text("abc".into()),
            ],
        );
        assert_eq!(render_wire(&rec), render_wire(&rec.clone()));
    }
}
