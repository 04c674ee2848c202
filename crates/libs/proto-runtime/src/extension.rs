//! Extension mapping views over a [`DynamicMessage`].
//!
//! Extensions are addressed by typed [`Extension`] / [`RepeatedExtension`]
//! handles instead of names. Every access is checked against the extensions
//! registered for the message's type in its schema.

use crate::handle::{Extension, RepeatedExtension};
use crate::message::{DynamicMessage, FieldOrigin, Slot};
use crate::value::{FieldType, Value};
use crate::AccessError;

/// Read-only extension view, from [`DynamicMessage::extensions`].
#[derive(Debug, Clone, Copy)]
pub struct Extensions<'a> {
    message: &'a DynamicMessage,
}

impl<'a> Extensions<'a> {
    pub(crate) fn new(message: &'a DynamicMessage) -> Self {
        Self { message }
    }

    pub fn has<T>(&self, extension: &Extension<T>) -> bool {
        self.message.has_at(FieldOrigin::Extension, extension.extendee(), extension.number())
    }

    pub fn has_repeated<T>(&self, extension: &RepeatedExtension<T>) -> bool {
        self.message.has_at(FieldOrigin::Extension, extension.extendee(), extension.number())
    }

    /// Current value, or the declared default when unset.
    pub fn get<T: FieldType>(&self, extension: &Extension<T>) -> Result<T, AccessError> {
        self.message.get_typed_at(FieldOrigin::Extension, extension.extendee(), extension.number())
    }

    pub fn repeated<T: FieldType>(
        &self,
        extension: &RepeatedExtension<T>,
    ) -> Result<Vec<T>, AccessError> {
        self.message.repeated_typed_at(
            FieldOrigin::Extension,
            extension.extendee(),
            extension.number(),
        )
    }

    pub fn repeated_len<T>(&self, extension: &RepeatedExtension<T>) -> usize {
        self.message.len_at(FieldOrigin::Extension, extension.extendee(), extension.number())
    }

    /// Number of extensions currently set.
    pub fn len(&self) -> usize {
        self.message
            .present_fields()
            .into_iter()
            .filter(|(_, origin)| *origin == FieldOrigin::Extension)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Mutable extension view, from [`DynamicMessage::extensions_mut`].
#[derive(Debug)]
pub struct ExtensionMap<'a> {
    message: &'a mut DynamicMessage,
}

impl<'a> ExtensionMap<'a> {
    pub(crate) fn new(message: &'a mut DynamicMessage) -> Self {
        Self { message }
    }

    pub fn view(&self) -> Extensions<'_> {
        Extensions::new(&*self.message)
    }

    pub fn set<T: FieldType>(
        &mut self,
        extension: &Extension<T>,
        value: T,
    ) -> Result<(), AccessError> {
        self.message.set_value_at(
            FieldOrigin::Extension,
            extension.extendee(),
            extension.number(),
            value.into_value(),
        )
    }

    pub fn get<T: FieldType>(&self, extension: &Extension<T>) -> Result<T, AccessError> {
        self.view().get(extension)
    }

    pub fn has<T>(&self, extension: &Extension<T>) -> bool {
        self.view().has(extension)
    }

    /// Nested message or group extension, created empty on first access.
    pub fn message_mut(
        &mut self,
        extension: &Extension<DynamicMessage>,
    ) -> Result<&mut DynamicMessage, AccessError> {
        self.message.message_mut_at(
            FieldOrigin::Extension,
            extension.extendee(),
            extension.number(),
        )
    }

    pub fn push<T: FieldType>(
        &mut self,
        extension: &RepeatedExtension<T>,
        value: T,
    ) -> Result<(), AccessError> {
        self.message.push_value_at(
            FieldOrigin::Extension,
            extension.extendee(),
            extension.number(),
            value.into_value(),
        )
    }

    pub fn set_at<T: FieldType>(
        &mut self,
        extension: &RepeatedExtension<T>,
        index: usize,
        value: T,
    ) -> Result<(), AccessError> {
        self.message.replace_value_at(
            FieldOrigin::Extension,
            extension.extendee(),
            extension.number(),
            index,
            value.into_value(),
        )
    }

    pub fn repeated<T: FieldType>(
        &self,
        extension: &RepeatedExtension<T>,
    ) -> Result<Vec<T>, AccessError> {
        self.view().repeated(extension)
    }

    /// Appends an empty nested message extension and returns it.
    pub fn add_message(
        &mut self,
        extension: &RepeatedExtension<DynamicMessage>,
    ) -> Result<&mut DynamicMessage, AccessError> {
        self.message.add_message_at(
            FieldOrigin::Extension,
            extension.extendee(),
            extension.number(),
        )
    }

    pub fn message_at_mut(
        &mut self,
        extension: &RepeatedExtension<DynamicMessage>,
        index: usize,
    ) -> Result<&mut DynamicMessage, AccessError> {
        self.message.message_index_mut_at(
            FieldOrigin::Extension,
            extension.extendee(),
            extension.number(),
            index,
        )
    }

    pub fn clear<T>(&mut self, extension: &Extension<T>) {
        self.message.clear_at(FieldOrigin::Extension, extension.extendee(), extension.number());
    }

    pub fn clear_repeated<T>(&mut self, extension: &RepeatedExtension<T>) {
        self.message.clear_at(FieldOrigin::Extension, extension.extendee(), extension.number());
    }

    /// Sets a singular extension by number, without a typed handle.
    pub fn set_value(&mut self, number: u32, value: Value) -> Result<(), AccessError> {
        self.message.set_slot(FieldOrigin::Extension, number, Slot::Singular(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDescriptor, FieldKind, MessageDescriptor, Schema, SchemaBuilder};
    use crate::{Field, StringRepr};

    const HOST: &str = "t.Host";
    const PLAIN: &str = "t.Plain";
    const NOTE: &str = "t.Note";

    const LEVEL: Extension<u64> = Extension::new(HOST, 10);
    const LABELS: RepeatedExtension<String> = RepeatedExtension::new(HOST, 11);
    const ATTACHED: Extension<DynamicMessage> = Extension::new(HOST, 12);
    const TEXT: Field<String> = Field::new(NOTE, 1);

    fn schema() -> Schema {
        let mut builder = SchemaBuilder::new();
        builder
            .add_message(MessageDescriptor::new(NOTE).field(FieldDescriptor::optional(
                "text",
                1,
                FieldKind::String(StringRepr::Plain),
            )))
            .unwrap();
        builder
            .add_message(
                MessageDescriptor::new(HOST)
                    .field(FieldDescriptor::optional("id", 1, FieldKind::Int32))
                    .extension_range(10..=19),
            )
            .unwrap();
        builder
            .add_message(
                MessageDescriptor::new(PLAIN)
                    .field(FieldDescriptor::optional("id", 1, FieldKind::Int32)),
            )
            .unwrap();
        builder
            .add_extension(
                HOST,
                FieldDescriptor::optional("level", 10, FieldKind::Uint64)
                    .with_default(Value::U64(7)),
            )
            .unwrap();
        builder
            .add_extension(
                HOST,
                FieldDescriptor::repeated("labels", 11, FieldKind::String(StringRepr::Plain)),
            )
            .unwrap();
        builder
            .add_extension(
                HOST,
                FieldDescriptor::optional("attached", 12, FieldKind::Message(NOTE)),
            )
            .unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn get_set_and_append_through_handles() {
        let mut host = DynamicMessage::new(&schema(), HOST).unwrap();
        assert_eq!(host.extensions().get(&LEVEL).unwrap(), 7);
        assert!(host.extensions().is_empty());

        let mut map = host.extensions_mut();
        map.set(&LEVEL, 99).unwrap();
        map.push(&LABELS, "a".to_string()).unwrap();
        map.push(&LABELS, "b".to_string()).unwrap();
        map.message_mut(&ATTACHED).unwrap().set(&TEXT, "hi".to_string()).unwrap();

        let view = host.extensions();
        assert_eq!(view.get(&LEVEL).unwrap(), 99);
        assert_eq!(view.repeated(&LABELS).unwrap(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(view.get(&ATTACHED).unwrap().get(&TEXT).unwrap(), "hi");
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn extension_handle_for_other_type_is_rejected() {
        let mut plain = DynamicMessage::new(&schema(), PLAIN).unwrap();
        assert_eq!(
            plain.extensions_mut().set(&LEVEL, 1),
            Err(AccessError::WrongOwner { expected: HOST, actual: PLAIN })
        );
    }

    #[test]
    fn unregistered_number_is_rejected() {
        let mut host = DynamicMessage::new(&schema(), HOST).unwrap();
        assert_eq!(
            host.extensions_mut().set_value(13, Value::I32(1)),
            Err(AccessError::UnknownExtension { extendee: HOST, number: 13 })
        );
    }

    #[test]
    fn clear_removes_single_extension() {
        let mut host = DynamicMessage::new(&schema(), HOST).unwrap();
        let mut map = host.extensions_mut();
        map.set(&LEVEL, 1).unwrap();
        map.push(&LABELS, "x".to_string()).unwrap();
        map.clear(&LEVEL);
        assert!(!map.has(&LEVEL));
        assert_eq!(host.extensions().repeated_len(&LABELS), 1);
    }
}
