use std::collections::BTreeMap;
use std::fmt;

use crate::extension::{ExtensionMap, Extensions};
use crate::handle::{Field, RepeatedField};
use crate::schema::{Cardinality, EnumDescriptor, FieldDescriptor, FieldKind, Schema};
use crate::value::{FieldType, Value};
use crate::AccessError;

/// Where a field is declared relative to its message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldOrigin {
    Inline,
    Extension,
}

/// Contents of one field: a single value or the entries of a repeated field
/// in append order.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Singular(Value),
    Repeated(Vec<Value>),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Stored {
    pub(crate) kind: FieldKind,
    pub(crate) slot: Slot,
}

/// A message instance whose shape is given by a [`Schema`] at runtime.
///
/// Inline fields and extensions are kept apart, each keyed by field number;
/// the serializer merges them back into one ascending sequence.
#[derive(Clone)]
pub struct DynamicMessage {
    schema: Schema,
    type_name: &'static str,
    fields: BTreeMap<u32, Stored>,
    extensions: BTreeMap<u32, Stored>,
}

impl DynamicMessage {
    pub fn new(schema: &Schema, type_name: &str) -> Result<Self, AccessError> {
        let descriptor = schema
            .message(type_name)
            .ok_or_else(|| AccessError::UnknownMessage(type_name.to_string()))?;
        Ok(Self {
            schema: schema.clone(),
            type_name: descriptor.name,
            fields: BTreeMap::new(),
            extensions: BTreeMap::new(),
        })
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn field_descriptor(&self, origin: FieldOrigin, number: u32) -> Option<&FieldDescriptor> {
        match origin {
            FieldOrigin::Inline => self
                .schema
                .message(self.type_name)
                .and_then(|descriptor| descriptor.field_by_number(number)),
            FieldOrigin::Extension => self.schema.extension(self.type_name, number),
        }
    }

    pub fn set<T: FieldType>(&mut self, field: &Field<T>, value: T) -> Result<(), AccessError> {
        self.set_value_at(FieldOrigin::Inline, field.message(), field.number(), value.into_value())
    }

    /// Current value, or the declared default when the field is unset.
    pub fn get<T: FieldType>(&self, field: &Field<T>) -> Result<T, AccessError> {
        self.get_typed_at(FieldOrigin::Inline, field.message(), field.number())
    }

    pub fn has<T>(&self, field: &Field<T>) -> bool {
        self.has_at(FieldOrigin::Inline, field.message(), field.number())
    }

    pub fn clear_field<T>(&mut self, field: &Field<T>) {
        if field.message() == self.type_name {
            self.fields.remove(&field.number());
        }
    }

    /// Nested message or group, created empty on first access.
    pub fn message_mut(
        &mut self,
        field: &Field<DynamicMessage>,
    ) -> Result<&mut DynamicMessage, AccessError> {
        self.message_mut_at(FieldOrigin::Inline, field.message(), field.number())
    }

    pub fn push<T: FieldType>(
        &mut self,
        field: &RepeatedField<T>,
        value: T,
    ) -> Result<(), AccessError> {
        self.push_value_at(FieldOrigin::Inline, field.message(), field.number(), value.into_value())
    }

    pub fn set_at<T: FieldType>(
        &mut self,
        field: &RepeatedField<T>,
        index: usize,
        value: T,
    ) -> Result<(), AccessError> {
        self.replace_value_at(
            FieldOrigin::Inline,
            field.message(),
            field.number(),
            index,
            value.into_value(),
        )
    }

    pub fn repeated<T: FieldType>(&self, field: &RepeatedField<T>) -> Result<Vec<T>, AccessError> {
        self.repeated_typed_at(FieldOrigin::Inline, field.message(), field.number())
    }

    pub fn repeated_len<T>(&self, field: &RepeatedField<T>) -> usize {
        self.len_at(FieldOrigin::Inline, field.message(), field.number())
    }

    pub fn has_repeated<T>(&self, field: &RepeatedField<T>) -> bool {
        self.has_at(FieldOrigin::Inline, field.message(), field.number())
    }

    /// Appends an empty nested message and returns it.
    pub fn add_message(
        &mut self,
        field: &RepeatedField<DynamicMessage>,
    ) -> Result<&mut DynamicMessage, AccessError> {
        self.add_message_at(FieldOrigin::Inline, field.message(), field.number())
    }

    pub fn message_at_mut(
        &mut self,
        field: &RepeatedField<DynamicMessage>,
        index: usize,
    ) -> Result<&mut DynamicMessage, AccessError> {
        self.message_index_mut_at(FieldOrigin::Inline, field.message(), field.number(), index)
    }

    pub fn clear_repeated<T>(&mut self, field: &RepeatedField<T>) {
        if field.message() == self.type_name {
            self.fields.remove(&field.number());
        }
    }

    /// Restores every field and extension to the unset state.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.extensions.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.extensions.is_empty()
    }

    pub fn extensions(&self) -> Extensions<'_> {
        Extensions::new(self)
    }

    pub fn extensions_mut(&mut self) -> ExtensionMap<'_> {
        ExtensionMap::new(self)
    }

    /// Stores a whole slot by field number without a typed handle.
    pub fn set_slot(
        &mut self,
        origin: FieldOrigin,
        number: u32,
        slot: Slot,
    ) -> Result<(), AccessError> {
        let owner = self.type_name;
        match slot {
            Slot::Singular(value) => self.set_value_at(origin, owner, number, value),
            Slot::Repeated(values) => {
                let field = self.resolve(origin, owner, number)?;
                self.require(&field, Cardinality::Repeated)?;
                for value in &values {
                    self.check_value(&field, value)?;
                }
                self.slots_mut(origin).remove(&number);
                if !values.is_empty() {
                    self.slots_mut(origin)
                        .insert(number, Stored { kind: field.kind, slot: Slot::Repeated(values) });
                }
                Ok(())
            }
        }
    }

    pub fn slot(&self, origin: FieldOrigin, number: u32) -> Option<&Slot> {
        self.slots(origin).get(&number).map(|stored| &stored.slot)
    }

    /// Field numbers currently set, inline and extension, ascending.
    pub fn present_fields(&self) -> Vec<(u32, FieldOrigin)> {
        self.canonical_fields().into_iter().map(|(number, origin, _)| (number, origin)).collect()
    }

    /// Every stored field in canonical (ascending number) order.
    pub(crate) fn canonical_fields(&self) -> Vec<(u32, FieldOrigin, &Stored)> {
        let inline =
            self.fields.iter().map(|(number, stored)| (*number, FieldOrigin::Inline, stored));
        let extended = self
            .extensions
            .iter()
            .map(|(number, stored)| (*number, FieldOrigin::Extension, stored));
        let mut all: Vec<_> = inline.chain(extended).collect();
        all.sort_by_key(|(number, _, _)| *number);
        all
    }

    fn slots(&self, origin: FieldOrigin) -> &BTreeMap<u32, Stored> {
        match origin {
            FieldOrigin::Inline => &self.fields,
            FieldOrigin::Extension => &self.extensions,
        }
    }

    fn slots_mut(&mut self, origin: FieldOrigin) -> &mut BTreeMap<u32, Stored> {
        match origin {
            FieldOrigin::Inline => &mut self.fields,
            FieldOrigin::Extension => &mut self.extensions,
        }
    }

    fn resolve(
        &self,
        origin: FieldOrigin,
        owner: &'static str,
        number: u32,
    ) -> Result<FieldDescriptor, AccessError> {
        if owner != self.type_name {
            return Err(AccessError::WrongOwner { expected: owner, actual: self.type_name });
        }
        self.field_descriptor(origin, number).cloned().ok_or(match origin {
            FieldOrigin::Inline => AccessError::UnknownField { message: self.type_name, number },
            FieldOrigin::Extension => {
                AccessError::UnknownExtension { extendee: self.type_name, number }
            }
        })
    }

    fn require(
        &self,
        field: &FieldDescriptor,
        cardinality: Cardinality,
    ) -> Result<(), AccessError> {
        if field.cardinality == cardinality {
            Ok(())
        } else {
            Err(wrong_cardinality(self.type_name, field))
        }
    }

    fn check_value(&self, field: &FieldDescriptor, value: &Value) -> Result<(), AccessError> {
        if !value.fits(&field.kind) {
            return Err(kind_mismatch(self.type_name, field));
        }
        match (field.kind, value) {
            (FieldKind::Enum(name), Value::Enum(number)) => {
                let known = self
                    .schema
                    .enumeration(name)
                    .is_some_and(|descriptor| descriptor.contains(*number));
                if !known {
                    return Err(AccessError::UnknownEnumValue { enum_name: name, value: *number });
                }
            }
            (FieldKind::Group(name) | FieldKind::Message(name), Value::Message(nested))
                if nested.type_name != name =>
            {
                return Err(kind_mismatch(self.type_name, field));
            }
            _ => {}
        }
        Ok(())
    }

    fn default_value(&self, field: &FieldDescriptor) -> Result<Value, AccessError> {
        if let Some(default) = &field.default {
            return Ok(default.clone());
        }
        Ok(match field.kind {
            FieldKind::Int32 | FieldKind::Sint32 | FieldKind::Sfixed32 => Value::I32(0),
            FieldKind::Int64 | FieldKind::Sint64 | FieldKind::Sfixed64 => Value::I64(0),
            FieldKind::Uint32 | FieldKind::Fixed32 => Value::U32(0),
            FieldKind::Uint64 | FieldKind::Fixed64 => Value::U64(0),
            FieldKind::Float => Value::F32(0.0),
            FieldKind::Double => Value::F64(0.0),
            FieldKind::Bool => Value::Bool(false),
            FieldKind::String(_) => Value::String(String::new()),
            FieldKind::Bytes => Value::Bytes(Vec::new()),
            FieldKind::Enum(name) => Value::Enum(
                self.schema.enumeration(name).and_then(EnumDescriptor::first).unwrap_or_default(),
            ),
            FieldKind::Group(name) | FieldKind::Message(name) => {
                Value::Message(DynamicMessage::new(&self.schema, name)?)
            }
        })
    }

    fn nested_type(&self, field: &FieldDescriptor) -> Result<&'static str, AccessError> {
        match field.kind {
            FieldKind::Group(name) | FieldKind::Message(name) => Ok(name),
            _ => Err(kind_mismatch(self.type_name, field)),
        }
    }

    pub(crate) fn set_value_at(
        &mut self,
        origin: FieldOrigin,
        owner: &'static str,
        number: u32,
        value: Value,
    ) -> Result<(), AccessError> {
        let field = self.resolve(origin, owner, number)?;
        self.require(&field, Cardinality::Optional)?;
        self.check_value(&field, &value)?;
        self.slots_mut(origin)
            .insert(number, Stored { kind: field.kind, slot: Slot::Singular(value) });
        Ok(())
    }

    pub(crate) fn get_typed_at<T: FieldType>(
        &self,
        origin: FieldOrigin,
        owner: &'static str,
        number: u32,
    ) -> Result<T, AccessError> {
        let field = self.resolve(origin, owner, number)?;
        self.require(&field, Cardinality::Optional)?;
        let value = match self.slots(origin).get(&number) {
            Some(Stored { slot: Slot::Singular(value), .. }) => value.clone(),
            _ => self.default_value(&field)?,
        };
        T::from_value(&value).ok_or_else(|| kind_mismatch(self.type_name, &field))
    }

    pub(crate) fn has_at(&self, origin: FieldOrigin, owner: &'static str, number: u32) -> bool {
        owner == self.type_name
            && match self.slots(origin).get(&number) {
                Some(Stored { slot: Slot::Singular(_), .. }) => true,
                Some(Stored { slot: Slot::Repeated(values), .. }) => !values.is_empty(),
                None => false,
            }
    }

    pub(crate) fn clear_at(&mut self, origin: FieldOrigin, owner: &'static str, number: u32) {
        if owner == self.type_name {
            self.slots_mut(origin).remove(&number);
        }
    }

    pub(crate) fn push_value_at(
        &mut self,
        origin: FieldOrigin,
        owner: &'static str,
        number: u32,
        value: Value,
    ) -> Result<(), AccessError> {
        let field = self.resolve(origin, owner, number)?;
        self.require(&field, Cardinality::Repeated)?;
        self.check_value(&field, &value)?;
        let type_name = self.type_name;
        let stored = self
            .slots_mut(origin)
            .entry(number)
            .or_insert_with(|| Stored { kind: field.kind, slot: Slot::Repeated(Vec::new()) });
        match &mut stored.slot {
            Slot::Repeated(values) => {
                values.push(value);
                Ok(())
            }
            Slot::Singular(_) => Err(wrong_cardinality(type_name, &field)),
        }
    }

    pub(crate) fn replace_value_at(
        &mut self,
        origin: FieldOrigin,
        owner: &'static str,
        number: u32,
        index: usize,
        value: Value,
    ) -> Result<(), AccessError> {
        let field = self.resolve(origin, owner, number)?;
        self.require(&field, Cardinality::Repeated)?;
        self.check_value(&field, &value)?;
        let entry = self.repeated_entry_mut(origin, &field, index)?;
        *entry = value;
        Ok(())
    }

    pub(crate) fn repeated_typed_at<T: FieldType>(
        &self,
        origin: FieldOrigin,
        owner: &'static str,
        number: u32,
    ) -> Result<Vec<T>, AccessError> {
        let field = self.resolve(origin, owner, number)?;
        self.require(&field, Cardinality::Repeated)?;
        let Some(Stored { slot: Slot::Repeated(values), .. }) = self.slots(origin).get(&number)
        else {
            return Ok(Vec::new());
        };
        values
            .iter()
            .map(|value| T::from_value(value).ok_or_else(|| kind_mismatch(self.type_name, &field)))
            .collect()
    }

    pub(crate) fn len_at(&self, origin: FieldOrigin, owner: &'static str, number: u32) -> usize {
        if owner != self.type_name {
            return 0;
        }
        match self.slots(origin).get(&number) {
            Some(Stored { slot: Slot::Repeated(values), .. }) => values.len(),
            _ => 0,
        }
    }

    pub(crate) fn message_mut_at(
        &mut self,
        origin: FieldOrigin,
        owner: &'static str,
        number: u32,
    ) -> Result<&mut DynamicMessage, AccessError> {
        let field = self.resolve(origin, owner, number)?;
        self.require(&field, Cardinality::Optional)?;
        let target = self.nested_type(&field)?;
        let type_name = self.type_name;
        if !self.slots(origin).contains_key(&number) {
            let empty = DynamicMessage::new(&self.schema, target)?;
            self.slots_mut(origin).insert(
                number,
                Stored { kind: field.kind, slot: Slot::Singular(Value::Message(empty)) },
            );
        }
        match self.slots_mut(origin).get_mut(&number) {
            Some(Stored { slot: Slot::Singular(Value::Message(nested)), .. }) => Ok(nested),
            _ => Err(kind_mismatch(type_name, &field)),
        }
    }

    pub(crate) fn add_message_at(
        &mut self,
        origin: FieldOrigin,
        owner: &'static str,
        number: u32,
    ) -> Result<&mut DynamicMessage, AccessError> {
        let field = self.resolve(origin, owner, number)?;
        let target = self.nested_type(&field)?;
        let empty = DynamicMessage::new(&self.schema, target)?;
        self.push_value_at(origin, owner, number, Value::Message(empty))?;
        let len = self.len_at(origin, owner, number);
        self.message_index_mut_at(origin, owner, number, len.saturating_sub(1))
    }

    pub(crate) fn message_index_mut_at(
        &mut self,
        origin: FieldOrigin,
        owner: &'static str,
        number: u32,
        index: usize,
    ) -> Result<&mut DynamicMessage, AccessError> {
        let field = self.resolve(origin, owner, number)?;
        self.require(&field, Cardinality::Repeated)?;
        self.nested_type(&field)?;
        let type_name = self.type_name;
        match self.repeated_entry_mut(origin, &field, index)? {
            Value::Message(nested) => Ok(nested),
            _ => Err(kind_mismatch(type_name, &field)),
        }
    }

    fn repeated_entry_mut(
        &mut self,
        origin: FieldOrigin,
        field: &FieldDescriptor,
        index: usize,
    ) -> Result<&mut Value, AccessError> {
        let values = match self.slots_mut(origin).get_mut(&field.number) {
            Some(Stored { slot: Slot::Repeated(values), .. }) => values,
            _ => {
                return Err(AccessError::IndexOutOfRange {
                    field: field.name.clone(),
                    index,
                    len: 0,
                })
            }
        };
        let len = values.len();
        values.get_mut(index).ok_or_else(|| AccessError::IndexOutOfRange {
            field: field.name.clone(),
            index,
            len,
        })
    }
}

fn wrong_cardinality(message: &'static str, field: &FieldDescriptor) -> AccessError {
    AccessError::WrongCardinality { message, field: field.name.clone() }
}

fn kind_mismatch(message: &'static str, field: &FieldDescriptor) -> AccessError {
    AccessError::KindMismatch {
        message,
        field: field.name.clone(),
        expected: field.kind.to_string(),
    }
}

impl PartialEq for DynamicMessage {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
            && self.fields == other.fields
            && self.extensions == other.extensions
    }
}

impl fmt::Debug for DynamicMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicMessage")
            .field("type", &self.type_name)
            .field("fields", &self.fields)
            .field("extensions", &self.extensions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{MessageDescriptor, SchemaBuilder};
    use crate::value::ProtoEnum;
    use crate::{EnumDescriptor, Extension};

    const OUTER: &str = "t.Outer";
    const INNER: &str = "t.Inner";
    const COLOR: &str = "t.Color";

    const ID: Field<i64> = Field::new(OUTER, 1);
    const NAME: Field<String> = Field::new(OUTER, 2);
    const TAGS: RepeatedField<u32> = RepeatedField::new(OUTER, 3);
    const CHILD: Field<DynamicMessage> = Field::new(OUTER, 4);
    const CHILDREN: RepeatedField<DynamicMessage> = RepeatedField::new(OUTER, 5);
    const SHADE: Field<Color> = Field::new(OUTER, 6);
    const LIMIT: Field<i32> = Field::new(OUTER, 7);
    const VALUE: Field<i32> = Field::new(INNER, 1);
    const EXTRA: Extension<bool> = Extension::new(OUTER, 100);

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Color {
        Red = 1,
        Blue = 2,
    }

    impl ProtoEnum for Color {
        const NAME: &'static str = COLOR;
        const VALUES: &'static [(&'static str, i32)] = &[("RED", 1), ("BLUE", 2)];

        fn number(self) -> i32 {
            self as i32
        }

        fn from_number(number: i32) -> Option<Self> {
            match number {
                1 => Some(Self::Red),
                2 => Some(Self::Blue),
                _ => None,
            }
        }
    }

    impl FieldType for Color {
        fn into_value(self) -> Value {
            Value::Enum(self.number())
        }

        fn from_value(value: &Value) -> Option<Self> {
            crate::enum_from_value(value)
        }
    }

    fn schema() -> Schema {
        let mut builder = SchemaBuilder::new();
        builder.add_enum(EnumDescriptor::of::<Color>()).unwrap();
        builder
            .add_message(
                MessageDescriptor::new(INNER)
                    .field(FieldDescriptor::optional("value", 1, FieldKind::Int32)),
            )
            .unwrap();
        builder
            .add_message(
                MessageDescriptor::new(OUTER)
                    .field(FieldDescriptor::optional("id", 1, FieldKind::Sint64))
                    .field(FieldDescriptor::optional(
                        "name",
                        2,
                        FieldKind::String(crate::StringRepr::Plain),
                    ))
                    .field(FieldDescriptor::repeated("tags", 3, FieldKind::Fixed32))
                    .field(FieldDescriptor::optional("child", 4, FieldKind::Message(INNER)))
                    .field(FieldDescriptor::repeated("children", 5, FieldKind::Group(INNER)))
                    .field(FieldDescriptor::optional("shade", 6, FieldKind::Enum(COLOR)))
                    .field(
                        FieldDescriptor::optional("limit", 7, FieldKind::Int32)
                            .with_default(Value::I32(41)),
                    )
                    .extension_range(100..=200),
            )
            .unwrap();
        builder
            .add_extension(OUTER, FieldDescriptor::optional("extra", 100, FieldKind::Bool))
            .unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn unset_fields_report_defaults() {
        let message = DynamicMessage::new(&schema(), OUTER).unwrap();
        assert!(message.is_empty());
        assert!(!message.has(&ID));
        assert_eq!(message.get(&ID).unwrap(), 0);
        assert_eq!(message.get(&LIMIT).unwrap(), 41);
        assert_eq!(message.get(&SHADE).unwrap(), Color::Red);
        assert_eq!(message.get(&NAME).unwrap(), "");
        assert!(message.get(&CHILD).unwrap().is_empty());
        assert!(message.repeated(&TAGS).unwrap().is_empty());
    }

    #[test]
    fn repeated_preserves_append_order() {
        let mut message = DynamicMessage::new(&schema(), OUTER).unwrap();
        message.push(&TAGS, 9).unwrap();
        message.push(&TAGS, 3).unwrap();
        message.push(&TAGS, 7).unwrap();
        assert_eq!(message.repeated(&TAGS).unwrap(), vec![9, 3, 7]);

        message.set_at(&TAGS, 1, 4).unwrap();
        assert_eq!(message.repeated(&TAGS).unwrap(), vec![9, 4, 7]);
        assert!(matches!(
            message.set_at(&TAGS, 3, 1),
            Err(AccessError::IndexOutOfRange { index: 3, len: 3, .. })
        ));
    }

    #[test]
    fn nested_messages_are_created_on_demand() {
        let mut message = DynamicMessage::new(&schema(), OUTER).unwrap();
        message.message_mut(&CHILD).unwrap().set(&VALUE, 5).unwrap();
        message.add_message(&CHILDREN).unwrap().set(&VALUE, 6).unwrap();
        message.add_message(&CHILDREN).unwrap().set(&VALUE, 7).unwrap();
        message.message_at_mut(&CHILDREN, 0).unwrap().set(&VALUE, 8).unwrap();

        assert_eq!(message.get(&CHILD).unwrap().get(&VALUE).unwrap(), 5);
        let values: Vec<i32> = message
            .repeated(&CHILDREN)
            .unwrap()
            .iter()
            .map(|child| child.get(&VALUE).unwrap())
            .collect();
        assert_eq!(values, vec![8, 7]);
    }

    #[test]
    fn rejects_handle_for_another_message() {
        let mut message = DynamicMessage::new(&schema(), OUTER).unwrap();
        assert_eq!(
            message.set(&VALUE, 1),
            Err(AccessError::WrongOwner { expected: INNER, actual: OUTER })
        );
    }

    #[test]
    fn rejects_value_of_wrong_kind_and_unknown_enum() {
        let mut message = DynamicMessage::new(&schema(), OUTER).unwrap();
        let wrong: Field<i32> = Field::new(OUTER, 1);
        assert!(matches!(message.set(&wrong, 1), Err(AccessError::KindMismatch { .. })));

        let raw: Field<DynamicMessage> = Field::new(OUTER, 4);
        let outer = DynamicMessage::new(&schema(), OUTER).unwrap();
        assert!(matches!(message.set(&raw, outer), Err(AccessError::KindMismatch { .. })));

        assert_eq!(
            message.set_slot(FieldOrigin::Inline, 6, Slot::Singular(Value::Enum(9))),
            Err(AccessError::UnknownEnumValue { enum_name: COLOR, value: 9 })
        );
    }

    #[test]
    fn rejects_wrong_cardinality() {
        let mut message = DynamicMessage::new(&schema(), OUTER).unwrap();
        let singular_tags: Field<u32> = Field::new(OUTER, 3);
        assert!(matches!(
            message.set(&singular_tags, 1),
            Err(AccessError::WrongCardinality { .. })
        ));
    }

    #[test]
    fn clear_restores_unset_state() {
        let mut message = DynamicMessage::new(&schema(), OUTER).unwrap();
        message.set(&ID, -3).unwrap();
        message.push(&TAGS, 1).unwrap();
        message.extensions_mut().set(&EXTRA, true).unwrap();
        assert_eq!(
            message.present_fields(),
            vec![(1, FieldOrigin::Inline), (3, FieldOrigin::Inline), (100, FieldOrigin::Extension)]
        );

        message.clear();
        assert!(message.is_empty());
        assert!(!message.extensions().has(&EXTRA));
    }
}
