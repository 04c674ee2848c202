//! Canonical serialization.
//!
//! Fields are written one block per field number in ascending order, inline
//! fields and extensions interleaved. Repeated fields are written unpacked,
//! one record per entry, in append order. Groups are framed by start/end
//! group tags; nested messages are length-delimited.

use prost::encoding::{self, encode_key, encode_varint, WireType};

use crate::message::{DynamicMessage, FieldOrigin, Slot};
use crate::schema::FieldKind;
use crate::value::Value;

impl DynamicMessage {
    /// Serializes the message in canonical field order.
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.encode_raw(&mut buf);
        buf
    }

    pub fn encode_raw(&self, buf: &mut Vec<u8>) {
        for (number, _, stored) in self.canonical_fields() {
            encode_slot(number, &stored.kind, &stored.slot, buf);
        }
    }

    /// Serialized bytes of each set field, keyed by field number, in the
    /// order [`encode_to_vec`](Self::encode_to_vec) writes them.
    pub fn field_blocks(&self) -> Vec<(u32, FieldOrigin, Vec<u8>)> {
        self.canonical_fields()
            .into_iter()
            .map(|(number, origin, stored)| {
                let mut block = Vec::new();
                encode_slot(number, &stored.kind, &stored.slot, &mut block);
                (number, origin, block)
            })
            .collect()
    }
}

fn encode_slot(number: u32, kind: &FieldKind, slot: &Slot, buf: &mut Vec<u8>) {
    match slot {
        Slot::Singular(value) => encode_value(number, kind, value, buf),
        Slot::Repeated(values) => {
            for value in values {
                encode_value(number, kind, value, buf);
            }
        }
    }
}

/// Every value shape writes a record; the kind only picks among the encodings
/// for that shape. Values are checked against their kind when stored.
fn encode_value(number: u32, kind: &FieldKind, value: &Value, buf: &mut Vec<u8>) {
    debug_assert!(
        value.fits(kind),
        "wire: field {number} holds a value that does not fit {kind}"
    );
    match value {
        Value::I32(v) => match kind {
            FieldKind::Sint32 => encoding::sint32::encode(number, v, buf),
            FieldKind::Sfixed32 => encoding::sfixed32::encode(number, v, buf),
            _ => encoding::int32::encode(number, v, buf),
        },
        Value::I64(v) => match kind {
            FieldKind::Sint64 => encoding::sint64::encode(number, v, buf),
            FieldKind::Sfixed64 => encoding::sfixed64::encode(number, v, buf),
            _ => encoding::int64::encode(number, v, buf),
        },
        Value::U32(v) => match kind {
            FieldKind::Fixed32 => encoding::fixed32::encode(number, v, buf),
            _ => encoding::uint32::encode(number, v, buf),
        },
        Value::U64(v) => match kind {
            FieldKind::Fixed64 => encoding::fixed64::encode(number, v, buf),
            _ => encoding::uint64::encode(number, v, buf),
        },
        Value::F32(v) => encoding::float::encode(number, v, buf),
        Value::F64(v) => encoding::double::encode(number, v, buf),
        Value::Bool(v) => encoding::bool::encode(number, v, buf),
        Value::String(v) => encoding::string::encode(number, v, buf),
        Value::Bytes(v) => encoding::bytes::encode(number, v, buf),
        Value::Enum(v) => encoding::int32::encode(number, v, buf),
        Value::Message(nested) if matches!(kind, FieldKind::Group(_)) => {
            encode_key(number, WireType::StartGroup, buf);
            nested.encode_raw(buf);
            encode_key(number, WireType::EndGroup, buf);
        }
        Value::Message(nested) => {
            let body = nested.encode_to_vec();
            encode_key(number, WireType::LengthDelimited, buf);
            encode_varint(body.len() as u64, buf);
            buf.extend_from_slice(&body);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(kind: FieldKind, value: Value) -> String {
        let mut buf = Vec::new();
        encode_value(1, &kind, &value, &mut buf);
        hex::encode(buf)
    }

    #[test]
    fn kind_selects_encoding_within_a_value_shape() {
        assert_eq!(encoded(FieldKind::Int32, Value::I32(-1)), "08ffffffffffffffffff01");
        assert_eq!(encoded(FieldKind::Sint32, Value::I32(-1)), "0801");
        assert_eq!(encoded(FieldKind::Sfixed32, Value::I32(-1)), "0dffffffff");
        assert_eq!(encoded(FieldKind::Fixed64, Value::U64(1)), "090100000000000000");
        assert_eq!(encoded(FieldKind::Uint64, Value::U64(1)), "0801");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "does not fit")]
    fn mismatched_value_is_caught() {
        encoded(FieldKind::Bool, Value::Bytes(b"x".to_vec()));
    }
}
