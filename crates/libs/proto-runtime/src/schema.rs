use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::value::{ProtoEnum, Value};
use crate::SchemaError;

/// Largest field number the wire format can carry (2^29 - 1).
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// In-memory representation requested for a `string` field.
///
/// Only affects generated accessors in other runtimes; the wire bytes are the
/// same for all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringRepr {
    Plain,
    Piece,
    Cord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Float,
    Double,
    Bool,
    String(StringRepr),
    Bytes,
    /// Legacy group; the payload is the named message type.
    Group(&'static str),
    Message(&'static str),
    Enum(&'static str),
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Sint32 => "sint32",
            Self::Sint64 => "sint64",
            Self::Fixed32 => "fixed32",
            Self::Fixed64 => "fixed64",
            Self::Sfixed32 => "sfixed32",
            Self::Sfixed64 => "sfixed64",
            Self::Float => "float",
            Self::Double => "double",
            Self::Bool => "bool",
            Self::String(_) => "string",
            Self::Bytes => "bytes",
            Self::Group(_) => "group",
            Self::Message(_) => "message",
            Self::Enum(_) => "enum",
        }
    }

    /// Message or enum type this kind refers to, if any.
    pub fn referenced_type(&self) -> Option<&'static str> {
        match self {
            Self::Group(name) | Self::Message(name) | Self::Enum(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.referenced_type() {
            Some(target) => write!(f, "{} {}", self.name(), target),
            None => f.write_str(self.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    Optional,
    Repeated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub number: u32,
    pub kind: FieldKind,
    pub cardinality: Cardinality,
    /// Declared default for singular scalar fields.
    pub default: Option<Value>,
}

impl FieldDescriptor {
    pub fn optional(name: impl Into<String>, number: u32, kind: FieldKind) -> Self {
        Self { name: name.into(), number, kind, cardinality: Cardinality::Optional, default: None }
    }

    pub fn repeated(name: impl Into<String>, number: u32, kind: FieldKind) -> Self {
        Self { name: name.into(), number, kind, cardinality: Cardinality::Repeated, default: None }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn is_repeated(&self) -> bool {
        self.cardinality == Cardinality::Repeated
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageDescriptor {
    pub name: &'static str,
    pub fields: Vec<FieldDescriptor>,
    pub extension_ranges: Vec<RangeInclusive<u32>>,
}

impl MessageDescriptor {
    pub fn new(name: &'static str) -> Self {
        Self { name, fields: Vec::new(), extension_ranges: Vec::new() }
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn extension_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.extension_ranges.push(range);
        self
    }

    pub fn is_extendable(&self) -> bool {
        !self.extension_ranges.is_empty()
    }

    pub fn in_extension_range(&self, number: u32) -> bool {
        self.extension_ranges.iter().any(|range| range.contains(&number))
    }

    pub fn field_by_number(&self, number: u32) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.number == number)
    }

    pub fn field_by_name(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    pub name: &'static str,
    pub values: Vec<(&'static str, i32)>,
}

impl EnumDescriptor {
    /// Descriptor for a Rust enum implementing [`ProtoEnum`].
    pub fn of<E: ProtoEnum>() -> Self {
        Self { name: E::NAME, values: E::VALUES.to_vec() }
    }

    pub fn contains(&self, number: i32) -> bool {
        self.values.iter().any(|(_, value)| *value == number)
    }

    /// First declared value; the proto2 default for an enum field.
    pub fn first(&self) -> Option<i32> {
        self.values.first().map(|(_, value)| *value)
    }

    pub fn value_by_name(&self, name: &str) -> Option<i32> {
        self.values.iter().find(|(candidate, _)| *candidate == name).map(|(_, value)| *value)
    }
}

#[derive(Debug, Default)]
struct SchemaInner {
    messages: BTreeMap<&'static str, MessageDescriptor>,
    enums: BTreeMap<&'static str, EnumDescriptor>,
    extensions: BTreeMap<(&'static str, u32), FieldDescriptor>,
}

/// Immutable registry of message types, enums and extensions.
///
/// Cloning is cheap; every [`DynamicMessage`](crate::DynamicMessage) keeps a
/// clone of the schema it was created from.
#[derive(Debug, Clone)]
pub struct Schema {
    inner: Arc<SchemaInner>,
}

impl Schema {
    pub fn message(&self, name: &str) -> Option<&MessageDescriptor> {
        self.inner.messages.get(name)
    }

    pub fn enumeration(&self, name: &str) -> Option<&EnumDescriptor> {
        self.inner.enums.get(name)
    }

    pub fn extension(&self, extendee: &str, number: u32) -> Option<&FieldDescriptor> {
        self.inner
            .extensions
            .iter()
            .find(|((owner, candidate), _)| *owner == extendee && *candidate == number)
            .map(|(_, field)| field)
    }

    pub fn extension_by_name(&self, extendee: &str, name: &str) -> Option<&FieldDescriptor> {
        self.inner
            .extensions
            .iter()
            .find(|((owner, _), field)| *owner == extendee && field.name == name)
            .map(|(_, field)| field)
    }

    /// Extensions registered against `extendee`, in ascending field number.
    pub fn extensions_of<'a>(
        &'a self,
        extendee: &'a str,
    ) -> impl Iterator<Item = &'a FieldDescriptor> + 'a {
        self.inner
            .extensions
            .iter()
            .filter(move |((owner, _), _)| *owner == extendee)
            .map(|(_, field)| field)
    }

    /// Every field number usable on `message`: inline fields plus registered
    /// extensions, ascending.
    pub fn field_numbers(&self, message: &str) -> Vec<u32> {
        let mut numbers: Vec<u32> = self
            .message(message)
            .map(|descriptor| descriptor.fields.iter().map(|field| field.number).collect())
            .unwrap_or_default();
        numbers.extend(self.extensions_of(message).map(|field| field.number));
        numbers.sort_unstable();
        numbers
    }
}

/// Collects descriptors and validates them into a [`Schema`].
///
/// Messages must be added before extensions that target them; references
/// between types are resolved in [`SchemaBuilder::build`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    inner: SchemaInner,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_message(&mut self, descriptor: MessageDescriptor) -> Result<&mut Self, SchemaError> {
        if self.inner.messages.contains_key(descriptor.name) {
            return Err(SchemaError::DuplicateMessage(descriptor.name));
        }
        let mut seen = Vec::with_capacity(descriptor.fields.len());
        for field in &descriptor.fields {
            if field.number == 0 || field.number > MAX_FIELD_NUMBER {
                return Err(SchemaError::InvalidFieldNumber {
                    message: descriptor.name,
                    number: field.number,
                });
            }
            if seen.contains(&field.number) || descriptor.in_extension_range(field.number) {
                return Err(SchemaError::DuplicateField {
                    message: descriptor.name,
                    number: field.number,
                });
            }
            seen.push(field.number);
        }
        self.inner.messages.insert(descriptor.name, descriptor);
        Ok(self)
    }

    pub fn add_enum(&mut self, descriptor: EnumDescriptor) -> Result<&mut Self, SchemaError> {
        if self.inner.enums.contains_key(descriptor.name) {
            return Err(SchemaError::DuplicateEnum(descriptor.name));
        }
        self.inner.enums.insert(descriptor.name, descriptor);
        Ok(self)
    }

    /// Registers `field` as an extension of `extendee`.
    pub fn add_extension(
        &mut self,
        extendee: &'static str,
        field: FieldDescriptor,
    ) -> Result<&mut Self, SchemaError> {
        let target =
            self.inner.messages.get(extendee).ok_or(SchemaError::UnknownExtendee(extendee))?;
        if !target.is_extendable() {
            return Err(SchemaError::NotExtendable(extendee));
        }
        if !target.in_extension_range(field.number) {
            return Err(SchemaError::ExtensionOutOfRange { extendee, number: field.number });
        }
        if let Some(existing) = self.inner.extensions.get(&(extendee, field.number)) {
            return Err(SchemaError::ExtensionConflict {
                extendee,
                number: field.number,
                existing: existing.name.clone(),
            });
        }
        log::trace!("schema: {extendee} extended by {} = {}", field.name, field.number);
        self.inner.extensions.insert((extendee, field.number), field);
        Ok(self)
    }

    pub fn build(self) -> Result<Schema, SchemaError> {
        let inner = self.inner;
        let inline = inner
            .messages
            .values()
            .flat_map(|message| message.fields.iter().map(move |field| (message.name, field)));
        let extended = inner.extensions.iter().map(|((extendee, _), field)| (*extendee, field));
        for (owner, field) in inline.chain(extended) {
            if let Some(target) = field.kind.referenced_type() {
                let known = match field.kind {
                    FieldKind::Enum(_) => inner.enums.contains_key(target),
                    _ => inner.messages.contains_key(target),
                };
                if !known {
                    return Err(SchemaError::UnknownType {
                        message: owner,
                        field: field.name.clone(),
                        target,
                    });
                }
            }
            if let Some(default) = &field.default {
                let fits = match (field.kind, default) {
                    (FieldKind::Enum(name), Value::Enum(number)) => {
                        inner.enums.get(name).is_some_and(|descriptor| descriptor.contains(*number))
                    }
                    (FieldKind::Group(_) | FieldKind::Message(_), _) => false,
                    (kind, value) => value.fits(&kind),
                };
                if field.is_repeated() || !fits {
                    return Err(SchemaError::InvalidDefault {
                        message: owner,
                        field: field.name.clone(),
                    });
                }
            }
        }
        log::debug!(
            "schema: {} messages, {} enums, {} extensions",
            inner.messages.len(),
            inner.enums.len(),
            inner.extensions.len()
        );
        Ok(Schema { inner: Arc::new(inner) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> MessageDescriptor {
        MessageDescriptor::new("t.Base")
            .field(FieldDescriptor::optional("a", 1, FieldKind::Int32))
            .extension_range(10..=20)
    }

    #[test]
    fn rejects_duplicate_field_numbers() {
        let mut builder = SchemaBuilder::new();
        let err = builder
            .add_message(base().field(FieldDescriptor::optional("b", 1, FieldKind::Bool)))
            .unwrap_err();
        assert_eq!(err, SchemaError::DuplicateField { message: "t.Base", number: 1 });
    }

    #[test]
    fn rejects_field_inside_extension_range() {
        let mut builder = SchemaBuilder::new();
        let err = builder
            .add_message(base().field(FieldDescriptor::optional("b", 15, FieldKind::Bool)))
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField { number: 15, .. }));
    }

    #[test]
    fn extension_validated_against_declaring_type() {
        let mut builder = SchemaBuilder::new();
        builder.add_message(base()).unwrap();
        builder
            .add_message(
                MessageDescriptor::new("t.Plain")
                    .field(FieldDescriptor::optional("x", 1, FieldKind::Int32)),
            )
            .unwrap();

        assert!(matches!(
            builder.add_extension("t.Plain", FieldDescriptor::optional("e", 2, FieldKind::Int32)),
            Err(SchemaError::NotExtendable("t.Plain"))
        ));
        assert!(matches!(
            builder.add_extension("t.Base", FieldDescriptor::optional("e", 21, FieldKind::Int32)),
            Err(SchemaError::ExtensionOutOfRange { number: 21, .. })
        ));
        assert!(matches!(
            builder.add_extension("t.Missing", FieldDescriptor::optional("e", 2, FieldKind::Int32)),
            Err(SchemaError::UnknownExtendee("t.Missing"))
        ));

        builder
            .add_extension("t.Base", FieldDescriptor::optional("e", 12, FieldKind::Int32))
            .unwrap();
        assert!(matches!(
            builder.add_extension("t.Base", FieldDescriptor::optional("f", 12, FieldKind::Bool)),
            Err(SchemaError::ExtensionConflict { number: 12, .. })
        ));
    }

    #[test]
    fn build_rejects_dangling_type_reference() {
        let mut builder = SchemaBuilder::new();
        builder
            .add_message(
                MessageDescriptor::new("t.Holder")
                    .field(FieldDescriptor::optional("m", 1, FieldKind::Message("t.Nope"))),
            )
            .unwrap();
        assert!(matches!(builder.build(), Err(SchemaError::UnknownType { target: "t.Nope", .. })));
    }

    #[test]
    fn build_rejects_default_of_wrong_kind() {
        let mut builder = SchemaBuilder::new();
        builder
            .add_message(MessageDescriptor::new("t.Defaults").field(
                FieldDescriptor::optional("a", 1, FieldKind::Int32).with_default(Value::Bool(true)),
            ))
            .unwrap();
        assert!(matches!(builder.build(), Err(SchemaError::InvalidDefault { .. })));
    }

    #[test]
    fn field_numbers_merge_inline_and_extensions() {
        let mut builder = SchemaBuilder::new();
        builder
            .add_message(base().field(FieldDescriptor::optional("z", 30, FieldKind::Bool)))
            .unwrap();
        builder
            .add_extension("t.Base", FieldDescriptor::optional("e", 11, FieldKind::Int32))
            .unwrap();
        let schema = builder.build().unwrap();
        assert_eq!(schema.field_numbers("t.Base"), vec![1, 11, 30]);
        assert_eq!(schema.extension_by_name("t.Base", "e").map(|field| field.number), Some(11));
        assert!(schema.extension("t.Base", 12).is_none());
    }
}
