use crate::message::DynamicMessage;
use crate::schema::FieldKind;

/// A single field value.
///
/// Integer variants are grouped by Rust type, not by wire encoding: an `I32`
/// fits `int32`, `sint32` and `sfixed32` fields alike and the descriptor picks
/// the encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Bool(bool),
    String(String),
    Bytes(Vec<u8>),
    Enum(i32),
    Message(DynamicMessage),
}

impl Value {
    /// Whether this value has the Rust shape required by `kind`.
    ///
    /// Enum membership and nested message types need the schema and are
    /// checked by the message itself.
    pub fn fits(&self, kind: &FieldKind) -> bool {
        matches!(
            (kind, self),
            (FieldKind::Int32 | FieldKind::Sint32 | FieldKind::Sfixed32, Value::I32(_))
                | (FieldKind::Int64 | FieldKind::Sint64 | FieldKind::Sfixed64, Value::I64(_))
                | (FieldKind::Uint32 | FieldKind::Fixed32, Value::U32(_))
                | (FieldKind::Uint64 | FieldKind::Fixed64, Value::U64(_))
                | (FieldKind::Float, Value::F32(_))
                | (FieldKind::Double, Value::F64(_))
                | (FieldKind::Bool, Value::Bool(_))
                | (FieldKind::String(_), Value::String(_))
                | (FieldKind::Bytes, Value::Bytes(_))
                | (FieldKind::Enum(_), Value::Enum(_))
                | (FieldKind::Group(_) | FieldKind::Message(_), Value::Message(_))
        )
    }
}

/// Rust types that can be stored in a field through a typed handle.
pub trait FieldType: Sized {
    fn into_value(self) -> Value;
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! scalar_field_type {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FieldType for $ty {
                fn into_value(self) -> Value {
                    Value::$variant(self)
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(inner) => Some(inner.clone()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

scalar_field_type!(
    i32 => I32,
    i64 => I64,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    bool => Bool,
    String => String,
    Vec<u8> => Bytes,
    DynamicMessage => Message,
);

/// A Rust enum mirroring a schema enum type.
pub trait ProtoEnum: Copy {
    /// Fully qualified schema name.
    const NAME: &'static str;
    /// Declared `(name, number)` pairs, first entry is the default.
    const VALUES: &'static [(&'static str, i32)];

    fn number(self) -> i32;
    fn from_number(number: i32) -> Option<Self>;
}

/// [`FieldType::from_value`] for enum types.
pub fn enum_from_value<E: ProtoEnum>(value: &Value) -> Option<E> {
    match value {
        Value::Enum(number) => E::from_number(*number),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringRepr;

    #[test]
    fn integer_values_fit_every_encoding_of_their_width() {
        for kind in [FieldKind::Int32, FieldKind::Sint32, FieldKind::Sfixed32] {
            assert!(Value::I32(-1).fits(&kind));
            assert!(!Value::U32(1).fits(&kind));
        }
        for kind in [FieldKind::Uint64, FieldKind::Fixed64] {
            assert!(Value::U64(1).fits(&kind));
            assert!(!Value::I64(1).fits(&kind));
        }
    }

    #[test]
    fn text_and_bytes_are_distinct() {
        assert!(Value::String("115".into()).fits(&FieldKind::String(StringRepr::Cord)));
        assert!(!Value::Bytes(b"116".to_vec()).fits(&FieldKind::String(StringRepr::Plain)));
        assert!(!Value::String("116".into()).fits(&FieldKind::Bytes));
    }

    #[test]
    fn typed_roundtrip_through_value() {
        assert_eq!(i64::from_value(&102i64.into_value()), Some(102));
        assert_eq!(String::from_value(&Value::I32(1)), None);
        assert_eq!(Vec::<u8>::from_value(&b"116".to_vec().into_value()), Some(b"116".to_vec()));
    }
}
