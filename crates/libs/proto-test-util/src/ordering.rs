//! Canonical-order verification.
//!
//! The expectation is rebuilt from scratch: each expected field is placed
//! alone in a fresh message, serialized, and the pieces are concatenated in
//! ascending field-number order. Serialized candidate bytes must match that
//! concatenation exactly.

use proto_runtime::{DynamicMessage, FieldOrigin, Schema, Slot, Value};

use crate::unittest::TEST_FIELD_ORDERINGS;
use crate::FixtureError;

/// One field the candidate bytes must contain.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedField {
    pub number: u32,
    pub origin: FieldOrigin,
    pub slot: Slot,
}

impl ExpectedField {
    pub fn inline(number: u32, value: Value) -> Self {
        Self { number, origin: FieldOrigin::Inline, slot: Slot::Singular(value) }
    }

    pub fn extension(number: u32, value: Value) -> Self {
        Self { number, origin: FieldOrigin::Extension, slot: Slot::Singular(value) }
    }

    pub fn repeated(origin: FieldOrigin, number: u32, values: Vec<Value>) -> Self {
        Self { number, origin, slot: Slot::Repeated(values) }
    }
}

#[derive(Debug, Clone)]
pub struct CanonicalOrderVerifier {
    schema: Schema,
    type_name: &'static str,
    entries: Vec<ExpectedField>,
}

impl CanonicalOrderVerifier {
    /// Entries may be given in any order; they are sorted by field number.
    pub fn new(
        schema: &Schema,
        type_name: &str,
        entries: impl IntoIterator<Item = ExpectedField>,
    ) -> Result<Self, FixtureError> {
        // Resolves the type once so later failures are about fields only.
        let type_name = DynamicMessage::new(schema, type_name)?.type_name();
        let mut entries: Vec<ExpectedField> = entries.into_iter().collect();
        entries.sort_by_key(|entry| entry.number);
        Ok(Self { schema: schema.clone(), type_name, entries })
    }

    pub fn field_numbers(&self) -> Vec<u32> {
        self.entries.iter().map(|entry| entry.number).collect()
    }

    /// Concatenation of every entry serialized on its own.
    ///
    /// An entry whose number is neither an inline field nor a registered
    /// extension of the type fails with [`FixtureError::SchemaMismatch`].
    pub fn expected_bytes(&self) -> Result<Vec<u8>, FixtureError> {
        let mut expected = Vec::new();
        for entry in &self.entries {
            let mut isolated = DynamicMessage::new(&self.schema, self.type_name)?;
            isolated.set_slot(entry.origin, entry.number, entry.slot.clone())?;
            expected.extend_from_slice(&isolated.encode_to_vec());
        }
        Ok(expected)
    }

    pub fn verify(&self, actual: &[u8]) -> Result<(), FixtureError> {
        let expected = self.expected_bytes()?;
        if expected == actual {
            log::debug!(
                "ordering: {} fields of {} in canonical order",
                self.entries.len(),
                self.type_name
            );
            return Ok(());
        }
        log::warn!(
            "ordering: {} bytes differ from the {}-byte canonical expectation",
            actual.len(),
            expected.len()
        );
        Err(FixtureError::OrderingMismatch { expected, actual: actual.to_vec() })
    }
}

/// The fields [`set_all_fields_and_extensions`] assigns, with their literals
/// restated here rather than read back from a message.
///
/// [`set_all_fields_and_extensions`]: crate::extensions::set_all_fields_and_extensions
pub fn field_orderings_expectation() -> Vec<ExpectedField> {
    vec![
        ExpectedField::inline(1, Value::I64(1)),
        ExpectedField::extension(5, Value::I32(23)),
        ExpectedField::inline(11, Value::String("foo".into())),
        ExpectedField::extension(50, Value::String("bar".into())),
        ExpectedField::inline(101, Value::F32(1.0)),
    ]
}

/// Checks serialized `TestFieldOrderings` bytes produced after
/// [`set_all_fields_and_extensions`](crate::extensions::set_all_fields_and_extensions).
pub fn expect_all_fields_and_extensions_in_order(
    schema: &Schema,
    actual: &[u8],
) -> Result<(), FixtureError> {
    CanonicalOrderVerifier::new(schema, TEST_FIELD_ORDERINGS, field_orderings_expectation())?
        .verify(actual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extensions::set_all_fields_and_extensions;
    use crate::unittest::schema;
    use proto_runtime::AccessError;

    // 1, 5, 11, 50, 101.
    const MIXED_HEX: &str = "080128175a03666f6f920303626172ad060000803f";

    #[test]
    fn expectation_matches_known_bytes() {
        let schema = schema().unwrap();
        let verifier = CanonicalOrderVerifier::new(
            &schema,
            TEST_FIELD_ORDERINGS,
            field_orderings_expectation().into_iter().rev(),
        )
        .unwrap();
        assert_eq!(verifier.field_numbers(), vec![1, 5, 11, 50, 101]);
        assert_eq!(hex::encode(verifier.expected_bytes().unwrap()), MIXED_HEX);
    }

    #[test]
    fn fixture_bytes_verify() {
        let schema = schema().unwrap();
        let mut message = DynamicMessage::new(&schema, TEST_FIELD_ORDERINGS).unwrap();
        set_all_fields_and_extensions(&mut message).unwrap();
        expect_all_fields_and_extensions_in_order(&schema, &message.encode_to_vec()).unwrap();
    }

    #[test]
    fn assignment_order_bytes_are_rejected() {
        let schema = schema().unwrap();
        // my_int, my_string, my_float, then both extensions.
        let assigned = hex::decode("08015a03666f6fad060000803f2817920303626172").unwrap();
        let err = expect_all_fields_and_extensions_in_order(&schema, &assigned).unwrap_err();
        assert!(matches!(err, FixtureError::OrderingMismatch { .. }));
        assert_eq!(
            err.to_string(),
            format!(
                "canonical order mismatch: expected {}, got {}",
                MIXED_HEX,
                hex::encode(&assigned)
            )
        );
    }

    #[test]
    fn any_byte_difference_is_an_ordering_mismatch() {
        let schema = schema().unwrap();
        let candidates = [
            // my_float dropped.
            "080128175a03666f6f920303626172",
            // my_int written twice.
            "080128175a03666f6f920303626172ad060000803f0801",
            // my_int = 2.
            "080228175a03666f6f920303626172ad060000803f",
            // my_int = 1 as a two-byte varint.
            "08810028175a03666f6f920303626172ad060000803f",
        ];
        for candidate in candidates {
            let bytes = hex::decode(candidate).unwrap();
            match expect_all_fields_and_extensions_in_order(&schema, &bytes) {
                Err(FixtureError::OrderingMismatch { expected, actual }) => {
                    assert_eq!(hex::encode(expected), MIXED_HEX);
                    assert_eq!(actual, bytes);
                }
                other => panic!("{candidate}: expected OrderingMismatch, got {other:?}"),
            }
        }
    }

    #[test]
    fn entries_outside_the_type_are_schema_mismatches() {
        let schema = schema().unwrap();
        let unregistered = CanonicalOrderVerifier::new(
            &schema,
            TEST_FIELD_ORDERINGS,
            [ExpectedField::extension(3, Value::I32(1))],
        )
        .unwrap();
        assert!(matches!(
            unregistered.expected_bytes(),
            Err(FixtureError::SchemaMismatch(AccessError::UnknownExtension { number: 3, .. }))
        ));

        let misplaced = CanonicalOrderVerifier::new(
            &schema,
            TEST_FIELD_ORDERINGS,
            [ExpectedField::inline(5, Value::I32(23))],
        )
        .unwrap();
        assert!(matches!(
            misplaced.verify(&[]),
            Err(FixtureError::SchemaMismatch(AccessError::UnknownField { number: 5, .. }))
        ));
    }
}
