//! Exhaustive population of `TestAllTypes`.
//!
//! Every literal is distinct and derived from the field's position: optional
//! fields hold 101-125, the two repeated entries hold 201-225 and 301-325,
//! the `default_*` fields hold 401-425 and [`modify_repeated_fields`] rewrites
//! the second repeated entry to 501-525. Bools and enums cannot follow the
//! numbering and use `true`/`false` and `FOO`/`BAR`/`BAZ` instead.

use std::fmt;

use proto_runtime::{AccessError, DynamicMessage, Field, FieldDescriptor, FieldOrigin};

use crate::unittest::test_all_types::*;
use crate::unittest::{
    foreign_message, import_message, nested_message, optional_group, repeated_group, ForeignEnum,
    ImportEnum, NestedEnum,
};
use crate::FixtureError;

/// Sets every optional, repeated and defaulted field of a `TestAllTypes`
/// message. Repeated fields get two entries each.
///
/// Fails with [`FixtureError::SchemaMismatch`] when `message` is of another
/// type; nothing is written in that case.
pub fn set_all_fields(message: &mut DynamicMessage) -> Result<(), FixtureError> {
    message.set(&OPTIONAL_INT32, 101)?;
    message.set(&OPTIONAL_INT64, 102)?;
    message.set(&OPTIONAL_UINT32, 103)?;
    message.set(&OPTIONAL_UINT64, 104)?;
    message.set(&OPTIONAL_SINT32, 105)?;
    message.set(&OPTIONAL_SINT64, 106)?;
    message.set(&OPTIONAL_FIXED32, 107)?;
    message.set(&OPTIONAL_FIXED64, 108)?;
    message.set(&OPTIONAL_SFIXED32, 109)?;
    message.set(&OPTIONAL_SFIXED64, 110)?;
    message.set(&OPTIONAL_FLOAT, 111.0)?;
    message.set(&OPTIONAL_DOUBLE, 112.0)?;
    message.set(&OPTIONAL_BOOL, true)?;
    message.set(&OPTIONAL_STRING, "115".to_owned())?;
    message.set(&OPTIONAL_BYTES, b"116".to_vec())?;
    message.message_mut(&OPTIONALGROUP)?.set(&optional_group::A, 117)?;
    message.message_mut(&OPTIONAL_NESTED_MESSAGE)?.set(&nested_message::BB, 118)?;
    message.message_mut(&OPTIONAL_FOREIGN_MESSAGE)?.set(&foreign_message::C, 119)?;
    message.message_mut(&OPTIONAL_IMPORT_MESSAGE)?.set(&import_message::D, 120)?;
    message.set(&OPTIONAL_NESTED_ENUM, NestedEnum::Baz)?;
    message.set(&OPTIONAL_FOREIGN_ENUM, ForeignEnum::ForeignBaz)?;
    message.set(&OPTIONAL_IMPORT_ENUM, ImportEnum::ImportBaz)?;
    message.set(&OPTIONAL_STRING_PIECE, "124".to_owned())?;
    message.set(&OPTIONAL_CORD, "125".to_owned())?;

    message.push(&REPEATED_INT32, 201)?;
    message.push(&REPEATED_INT64, 202)?;
    message.push(&REPEATED_UINT32, 203)?;
    message.push(&REPEATED_UINT64, 204)?;
    message.push(&REPEATED_SINT32, 205)?;
    message.push(&REPEATED_SINT64, 206)?;
    message.push(&REPEATED_FIXED32, 207)?;
    message.push(&REPEATED_FIXED64, 208)?;
    message.push(&REPEATED_SFIXED32, 209)?;
    message.push(&REPEATED_SFIXED64, 210)?;
    message.push(&REPEATED_FLOAT, 211.0)?;
    message.push(&REPEATED_DOUBLE, 212.0)?;
    message.push(&REPEATED_BOOL, true)?;
    message.push(&REPEATED_STRING, "215".to_owned())?;
    message.push(&REPEATED_BYTES, b"216".to_vec())?;
    message.add_message(&REPEATEDGROUP)?.set(&repeated_group::A, 217)?;
    message.add_message(&REPEATED_NESTED_MESSAGE)?.set(&nested_message::BB, 218)?;
    message.add_message(&REPEATED_FOREIGN_MESSAGE)?.set(&foreign_message::C, 219)?;
    message.add_message(&REPEATED_IMPORT_MESSAGE)?.set(&import_message::D, 220)?;
    message.push(&REPEATED_NESTED_ENUM, NestedEnum::Bar)?;
    message.push(&REPEATED_FOREIGN_ENUM, ForeignEnum::ForeignBar)?;
    message.push(&REPEATED_IMPORT_ENUM, ImportEnum::ImportBar)?;
    message.push(&REPEATED_STRING_PIECE, "224".to_owned())?;
    message.push(&REPEATED_CORD, "225".to_owned())?;

    message.push(&REPEATED_INT32, 301)?;
    message.push(&REPEATED_INT64, 302)?;
    message.push(&REPEATED_UINT32, 303)?;
    message.push(&REPEATED_UINT64, 304)?;
    message.push(&REPEATED_SINT32, 305)?;
    message.push(&REPEATED_SINT64, 306)?;
    message.push(&REPEATED_FIXED32, 307)?;
    message.push(&REPEATED_FIXED64, 308)?;
    message.push(&REPEATED_SFIXED32, 309)?;
    message.push(&REPEATED_SFIXED64, 310)?;
    message.push(&REPEATED_FLOAT, 311.0)?;
    message.push(&REPEATED_DOUBLE, 312.0)?;
    message.push(&REPEATED_BOOL, false)?;
    message.push(&REPEATED_STRING, "315".to_owned())?;
    message.push(&REPEATED_BYTES, b"316".to_vec())?;
    message.add_message(&REPEATEDGROUP)?.set(&repeated_group::A, 317)?;
    message.add_message(&REPEATED_NESTED_MESSAGE)?.set(&nested_message::BB, 318)?;
    message.add_message(&REPEATED_FOREIGN_MESSAGE)?.set(&foreign_message::C, 319)?;
    message.add_message(&REPEATED_IMPORT_MESSAGE)?.set(&import_message::D, 320)?;
    message.push(&REPEATED_NESTED_ENUM, NestedEnum::Baz)?;
    message.push(&REPEATED_FOREIGN_ENUM, ForeignEnum::ForeignBaz)?;
    message.push(&REPEATED_IMPORT_ENUM, ImportEnum::ImportBaz)?;
    message.push(&REPEATED_STRING_PIECE, "324".to_owned())?;
    message.push(&REPEATED_CORD, "325".to_owned())?;

    message.set(&DEFAULT_INT32, 401)?;
    message.set(&DEFAULT_INT64, 402)?;
    message.set(&DEFAULT_UINT32, 403)?;
    message.set(&DEFAULT_UINT64, 404)?;
    message.set(&DEFAULT_SINT32, 405)?;
    message.set(&DEFAULT_SINT64, 406)?;
    message.set(&DEFAULT_FIXED32, 407)?;
    message.set(&DEFAULT_FIXED64, 408)?;
    message.set(&DEFAULT_SFIXED32, 409)?;
    message.set(&DEFAULT_SFIXED64, 410)?;
    message.set(&DEFAULT_FLOAT, 411.0)?;
    message.set(&DEFAULT_DOUBLE, 412.0)?;
    message.set(&DEFAULT_BOOL, false)?;
    message.set(&DEFAULT_STRING, "415".to_owned())?;
    message.set(&DEFAULT_BYTES, b"416".to_vec())?;
    message.set(&DEFAULT_NESTED_ENUM, NestedEnum::Foo)?;
    message.set(&DEFAULT_FOREIGN_ENUM, ForeignEnum::ForeignFoo)?;
    message.set(&DEFAULT_IMPORT_ENUM, ImportEnum::ImportFoo)?;
    message.set(&DEFAULT_STRING_PIECE, "424".to_owned())?;
    message.set(&DEFAULT_CORD, "425".to_owned())?;

    log::debug!(
        "fixtures: populated {} fields of {}",
        message.present_fields().len(),
        message.type_name()
    );
    Ok(())
}

/// Checks that every field holds the value [`set_all_fields`] assigns.
pub fn expect_all_fields_set(message: &DynamicMessage) -> Result<(), FixtureError> {
    check("optional_int32", 101, message.get(&OPTIONAL_INT32)?)?;
    check("optional_int64", 102, message.get(&OPTIONAL_INT64)?)?;
    check("optional_uint32", 103, message.get(&OPTIONAL_UINT32)?)?;
    check("optional_uint64", 104, message.get(&OPTIONAL_UINT64)?)?;
    check("optional_sint32", 105, message.get(&OPTIONAL_SINT32)?)?;
    check("optional_sint64", 106, message.get(&OPTIONAL_SINT64)?)?;
    check("optional_fixed32", 107, message.get(&OPTIONAL_FIXED32)?)?;
    check("optional_fixed64", 108, message.get(&OPTIONAL_FIXED64)?)?;
    check("optional_sfixed32", 109, message.get(&OPTIONAL_SFIXED32)?)?;
    check("optional_sfixed64", 110, message.get(&OPTIONAL_SFIXED64)?)?;
    check("optional_float", 111.0, message.get(&OPTIONAL_FLOAT)?)?;
    check("optional_double", 112.0, message.get(&OPTIONAL_DOUBLE)?)?;
    check("optional_bool", true, message.get(&OPTIONAL_BOOL)?)?;
    check("optional_string", "115".to_owned(), message.get(&OPTIONAL_STRING)?)?;
    check("optional_bytes", b"116".to_vec(), message.get(&OPTIONAL_BYTES)?)?;
    check("optionalgroup.a", 117, message.get(&OPTIONALGROUP)?.get(&optional_group::A)?)?;
    check(
        "optional_nested_message.bb",
        118,
        message.get(&OPTIONAL_NESTED_MESSAGE)?.get(&nested_message::BB)?,
    )?;
    check(
        "optional_foreign_message.c",
        119,
        message.get(&OPTIONAL_FOREIGN_MESSAGE)?.get(&foreign_message::C)?,
    )?;
    check(
        "optional_import_message.d",
        120,
        message.get(&OPTIONAL_IMPORT_MESSAGE)?.get(&import_message::D)?,
    )?;
    check("optional_nested_enum", NestedEnum::Baz, message.get(&OPTIONAL_NESTED_ENUM)?)?;
    check("optional_foreign_enum", ForeignEnum::ForeignBaz, message.get(&OPTIONAL_FOREIGN_ENUM)?)?;
    check("optional_import_enum", ImportEnum::ImportBaz, message.get(&OPTIONAL_IMPORT_ENUM)?)?;
    check("optional_string_piece", "124".to_owned(), message.get(&OPTIONAL_STRING_PIECE)?)?;
    check("optional_cord", "125".to_owned(), message.get(&OPTIONAL_CORD)?)?;

    check("repeated_int32", vec![201, 301], message.repeated(&REPEATED_INT32)?)?;
    check("repeated_int64", vec![202, 302], message.repeated(&REPEATED_INT64)?)?;
    check("repeated_uint32", vec![203, 303], message.repeated(&REPEATED_UINT32)?)?;
    check("repeated_uint64", vec![204, 304], message.repeated(&REPEATED_UINT64)?)?;
    check("repeated_sint32", vec![205, 305], message.repeated(&REPEATED_SINT32)?)?;
    check("repeated_sint64", vec![206, 306], message.repeated(&REPEATED_SINT64)?)?;
    check("repeated_fixed32", vec![207, 307], message.repeated(&REPEATED_FIXED32)?)?;
    check("repeated_fixed64", vec![208, 308], message.repeated(&REPEATED_FIXED64)?)?;
    check("repeated_sfixed32", vec![209, 309], message.repeated(&REPEATED_SFIXED32)?)?;
    check("repeated_sfixed64", vec![210, 310], message.repeated(&REPEATED_SFIXED64)?)?;
    check("repeated_float", vec![211.0, 311.0], message.repeated(&REPEATED_FLOAT)?)?;
    check("repeated_double", vec![212.0, 312.0], message.repeated(&REPEATED_DOUBLE)?)?;
    check("repeated_bool", vec![true, false], message.repeated(&REPEATED_BOOL)?)?;
    check(
        "repeated_string",
        vec!["215".to_owned(), "315".to_owned()],
        message.repeated(&REPEATED_STRING)?,
    )?;
    check(
        "repeated_bytes",
        vec![b"216".to_vec(), b"316".to_vec()],
        message.repeated(&REPEATED_BYTES)?,
    )?;
    check(
        "repeatedgroup.a",
        vec![217, 317],
        nested_values(message.repeated(&REPEATEDGROUP)?, &repeated_group::A)?,
    )?;
    check(
        "repeated_nested_message.bb",
        vec![218, 318],
        nested_values(message.repeated(&REPEATED_NESTED_MESSAGE)?, &nested_message::BB)?,
    )?;
    check(
        "repeated_foreign_message.c",
        vec![219, 319],
        nested_values(message.repeated(&REPEATED_FOREIGN_MESSAGE)?, &foreign_message::C)?,
    )?;
    check(
        "repeated_import_message.d",
        vec![220, 320],
        nested_values(message.repeated(&REPEATED_IMPORT_MESSAGE)?, &import_message::D)?,
    )?;
    check(
        "repeated_nested_enum",
        vec![NestedEnum::Bar, NestedEnum::Baz],
        message.repeated(&REPEATED_NESTED_ENUM)?,
    )?;
    check(
        "repeated_foreign_enum",
        vec![ForeignEnum::ForeignBar, ForeignEnum::ForeignBaz],
        message.repeated(&REPEATED_FOREIGN_ENUM)?,
    )?;
    check(
        "repeated_import_enum",
        vec![ImportEnum::ImportBar, ImportEnum::ImportBaz],
        message.repeated(&REPEATED_IMPORT_ENUM)?,
    )?;
    check(
        "repeated_string_piece",
        vec!["224".to_owned(), "324".to_owned()],
        message.repeated(&REPEATED_STRING_PIECE)?,
    )?;
    check(
        "repeated_cord",
        vec!["225".to_owned(), "325".to_owned()],
        message.repeated(&REPEATED_CORD)?,
    )?;

    check("default_int32", 401, message.get(&DEFAULT_INT32)?)?;
    check("default_int64", 402, message.get(&DEFAULT_INT64)?)?;
    check("default_uint32", 403, message.get(&DEFAULT_UINT32)?)?;
    check("default_uint64", 404, message.get(&DEFAULT_UINT64)?)?;
    check("default_sint32", 405, message.get(&DEFAULT_SINT32)?)?;
    check("default_sint64", 406, message.get(&DEFAULT_SINT64)?)?;
    check("default_fixed32", 407, message.get(&DEFAULT_FIXED32)?)?;
    check("default_fixed64", 408, message.get(&DEFAULT_FIXED64)?)?;
    check("default_sfixed32", 409, message.get(&DEFAULT_SFIXED32)?)?;
    check("default_sfixed64", 410, message.get(&DEFAULT_SFIXED64)?)?;
    check("default_float", 411.0, message.get(&DEFAULT_FLOAT)?)?;
    check("default_double", 412.0, message.get(&DEFAULT_DOUBLE)?)?;
    check("default_bool", false, message.get(&DEFAULT_BOOL)?)?;
    check("default_string", "415".to_owned(), message.get(&DEFAULT_STRING)?)?;
    check("default_bytes", b"416".to_vec(), message.get(&DEFAULT_BYTES)?)?;
    check("default_nested_enum", NestedEnum::Foo, message.get(&DEFAULT_NESTED_ENUM)?)?;
    check("default_foreign_enum", ForeignEnum::ForeignFoo, message.get(&DEFAULT_FOREIGN_ENUM)?)?;
    check("default_import_enum", ImportEnum::ImportFoo, message.get(&DEFAULT_IMPORT_ENUM)?)?;
    check("default_string_piece", "424".to_owned(), message.get(&DEFAULT_STRING_PIECE)?)?;
    check("default_cord", "425".to_owned(), message.get(&DEFAULT_CORD)?)?;

    expect_all_present(message, FieldOrigin::Inline)
}

/// Checks that nothing is set and every getter reports its default.
pub fn expect_clear(message: &DynamicMessage) -> Result<(), FixtureError> {
    expect_none_present(message, FieldOrigin::Inline)?;

    check("optional_int32", 0, message.get(&OPTIONAL_INT32)?)?;
    check("optional_int64", 0, message.get(&OPTIONAL_INT64)?)?;
    check("optional_uint32", 0, message.get(&OPTIONAL_UINT32)?)?;
    check("optional_uint64", 0, message.get(&OPTIONAL_UINT64)?)?;
    check("optional_sint32", 0, message.get(&OPTIONAL_SINT32)?)?;
    check("optional_sint64", 0, message.get(&OPTIONAL_SINT64)?)?;
    check("optional_fixed32", 0, message.get(&OPTIONAL_FIXED32)?)?;
    check("optional_fixed64", 0, message.get(&OPTIONAL_FIXED64)?)?;
    check("optional_sfixed32", 0, message.get(&OPTIONAL_SFIXED32)?)?;
    check("optional_sfixed64", 0, message.get(&OPTIONAL_SFIXED64)?)?;
    check("optional_float", 0.0, message.get(&OPTIONAL_FLOAT)?)?;
    check("optional_double", 0.0, message.get(&OPTIONAL_DOUBLE)?)?;
    check("optional_bool", false, message.get(&OPTIONAL_BOOL)?)?;
    check("optional_string", String::new(), message.get(&OPTIONAL_STRING)?)?;
    check("optional_bytes", Vec::new(), message.get(&OPTIONAL_BYTES)?)?;
    check("optionalgroup.a", 0, message.get(&OPTIONALGROUP)?.get(&optional_group::A)?)?;
    check(
        "optional_nested_message.bb",
        0,
        message.get(&OPTIONAL_NESTED_MESSAGE)?.get(&nested_message::BB)?,
    )?;
    check(
        "optional_foreign_message.c",
        0,
        message.get(&OPTIONAL_FOREIGN_MESSAGE)?.get(&foreign_message::C)?,
    )?;
    check(
        "optional_import_message.d",
        0,
        message.get(&OPTIONAL_IMPORT_MESSAGE)?.get(&import_message::D)?,
    )?;
    check("optional_nested_enum", NestedEnum::Foo, message.get(&OPTIONAL_NESTED_ENUM)?)?;
    check("optional_foreign_enum", ForeignEnum::ForeignFoo, message.get(&OPTIONAL_FOREIGN_ENUM)?)?;
    check("optional_import_enum", ImportEnum::ImportFoo, message.get(&OPTIONAL_IMPORT_ENUM)?)?;
    check("optional_string_piece", String::new(), message.get(&OPTIONAL_STRING_PIECE)?)?;
    check("optional_cord", String::new(), message.get(&OPTIONAL_CORD)?)?;

    check("default_int32", 41, message.get(&DEFAULT_INT32)?)?;
    check("default_int64", 42, message.get(&DEFAULT_INT64)?)?;
    check("default_uint32", 43, message.get(&DEFAULT_UINT32)?)?;
    check("default_uint64", 44, message.get(&DEFAULT_UINT64)?)?;
    check("default_sint32", -45, message.get(&DEFAULT_SINT32)?)?;
    check("default_sint64", 46, message.get(&DEFAULT_SINT64)?)?;
    check("default_fixed32", 47, message.get(&DEFAULT_FIXED32)?)?;
    check("default_fixed64", 48, message.get(&DEFAULT_FIXED64)?)?;
    check("default_sfixed32", 49, message.get(&DEFAULT_SFIXED32)?)?;
    check("default_sfixed64", -50, message.get(&DEFAULT_SFIXED64)?)?;
    check("default_float", 51.5, message.get(&DEFAULT_FLOAT)?)?;
    check("default_double", 52e3, message.get(&DEFAULT_DOUBLE)?)?;
    check("default_bool", true, message.get(&DEFAULT_BOOL)?)?;
    check("default_string", "hello".to_owned(), message.get(&DEFAULT_STRING)?)?;
    check("default_bytes", b"world".to_vec(), message.get(&DEFAULT_BYTES)?)?;
    check("default_nested_enum", NestedEnum::Bar, message.get(&DEFAULT_NESTED_ENUM)?)?;
    check("default_foreign_enum", ForeignEnum::ForeignBar, message.get(&DEFAULT_FOREIGN_ENUM)?)?;
    check("default_import_enum", ImportEnum::ImportBar, message.get(&DEFAULT_IMPORT_ENUM)?)?;
    check("default_string_piece", "abc".to_owned(), message.get(&DEFAULT_STRING_PIECE)?)?;
    check("default_cord", "123".to_owned(), message.get(&DEFAULT_CORD)?)?;
    Ok(())
}

/// Overwrites the second entry of every repeated field.
pub fn modify_repeated_fields(message: &mut DynamicMessage) -> Result<(), FixtureError> {
    message.set_at(&REPEATED_INT32, 1, 501)?;
    message.set_at(&REPEATED_INT64, 1, 502)?;
    message.set_at(&REPEATED_UINT32, 1, 503)?;
    message.set_at(&REPEATED_UINT64, 1, 504)?;
    message.set_at(&REPEATED_SINT32, 1, 505)?;
    message.set_at(&REPEATED_SINT64, 1, 506)?;
    message.set_at(&REPEATED_FIXED32, 1, 507)?;
    message.set_at(&REPEATED_FIXED64, 1, 508)?;
    message.set_at(&REPEATED_SFIXED32, 1, 509)?;
    message.set_at(&REPEATED_SFIXED64, 1, 510)?;
    message.set_at(&REPEATED_FLOAT, 1, 511.0)?;
    message.set_at(&REPEATED_DOUBLE, 1, 512.0)?;
    message.set_at(&REPEATED_BOOL, 1, true)?;
    message.set_at(&REPEATED_STRING, 1, "515".to_owned())?;
    message.set_at(&REPEATED_BYTES, 1, b"516".to_vec())?;
    message.message_at_mut(&REPEATEDGROUP, 1)?.set(&repeated_group::A, 517)?;
    message.message_at_mut(&REPEATED_NESTED_MESSAGE, 1)?.set(&nested_message::BB, 518)?;
    message.message_at_mut(&REPEATED_FOREIGN_MESSAGE, 1)?.set(&foreign_message::C, 519)?;
    message.message_at_mut(&REPEATED_IMPORT_MESSAGE, 1)?.set(&import_message::D, 520)?;
    message.set_at(&REPEATED_NESTED_ENUM, 1, NestedEnum::Foo)?;
    message.set_at(&REPEATED_FOREIGN_ENUM, 1, ForeignEnum::ForeignFoo)?;
    message.set_at(&REPEATED_IMPORT_ENUM, 1, ImportEnum::ImportFoo)?;
    message.set_at(&REPEATED_STRING_PIECE, 1, "524".to_owned())?;
    message.set_at(&REPEATED_CORD, 1, "525".to_owned())?;
    Ok(())
}

/// Checks the result of [`modify_repeated_fields`] after [`set_all_fields`]:
/// entry 0 untouched, entry 1 rewritten.
pub fn expect_repeated_fields_modified(message: &DynamicMessage) -> Result<(), FixtureError> {
    check("repeated_int32", vec![201, 501], message.repeated(&REPEATED_INT32)?)?;
    check("repeated_int64", vec![202, 502], message.repeated(&REPEATED_INT64)?)?;
    check("repeated_uint32", vec![203, 503], message.repeated(&REPEATED_UINT32)?)?;
    check("repeated_uint64", vec![204, 504], message.repeated(&REPEATED_UINT64)?)?;
    check("repeated_sint32", vec![205, 505], message.repeated(&REPEATED_SINT32)?)?;
    check("repeated_sint64", vec![206, 506], message.repeated(&REPEATED_SINT64)?)?;
    check("repeated_fixed32", vec![207, 507], message.repeated(&REPEATED_FIXED32)?)?;
    check("repeated_fixed64", vec![208, 508], message.repeated(&REPEATED_FIXED64)?)?;
    check("repeated_sfixed32", vec![209, 509], message.repeated(&REPEATED_SFIXED32)?)?;
    check("repeated_sfixed64", vec![210, 510], message.repeated(&REPEATED_SFIXED64)?)?;
    check("repeated_float", vec![211.0, 511.0], message.repeated(&REPEATED_FLOAT)?)?;
    check("repeated_double", vec![212.0, 512.0], message.repeated(&REPEATED_DOUBLE)?)?;
    check("repeated_bool", vec![true, true], message.repeated(&REPEATED_BOOL)?)?;
    check(
        "repeated_string",
        vec!["215".to_owned(), "515".to_owned()],
        message.repeated(&REPEATED_STRING)?,
    )?;
    check(
        "repeated_bytes",
        vec![b"216".to_vec(), b"516".to_vec()],
        message.repeated(&REPEATED_BYTES)?,
    )?;
    check(
        "repeatedgroup.a",
        vec![217, 517],
        nested_values(message.repeated(&REPEATEDGROUP)?, &repeated_group::A)?,
    )?;
    check(
        "repeated_nested_message.bb",
        vec![218, 518],
        nested_values(message.repeated(&REPEATED_NESTED_MESSAGE)?, &nested_message::BB)?,
    )?;
    check(
        "repeated_foreign_message.c",
        vec![219, 519],
        nested_values(message.repeated(&REPEATED_FOREIGN_MESSAGE)?, &foreign_message::C)?,
    )?;
    check(
        "repeated_import_message.d",
        vec![220, 520],
        nested_values(message.repeated(&REPEATED_IMPORT_MESSAGE)?, &import_message::D)?,
    )?;
    check(
        "repeated_nested_enum",
        vec![NestedEnum::Bar, NestedEnum::Foo],
        message.repeated(&REPEATED_NESTED_ENUM)?,
    )?;
    check(
        "repeated_foreign_enum",
        vec![ForeignEnum::ForeignBar, ForeignEnum::ForeignFoo],
        message.repeated(&REPEATED_FOREIGN_ENUM)?,
    )?;
    check(
        "repeated_import_enum",
        vec![ImportEnum::ImportBar, ImportEnum::ImportFoo],
        message.repeated(&REPEATED_IMPORT_ENUM)?,
    )?;
    check(
        "repeated_string_piece",
        vec!["224".to_owned(), "524".to_owned()],
        message.repeated(&REPEATED_STRING_PIECE)?,
    )?;
    check(
        "repeated_cord",
        vec!["225".to_owned(), "525".to_owned()],
        message.repeated(&REPEATED_CORD)?,
    )?;
    Ok(())
}

pub(crate) fn check<T: PartialEq + fmt::Debug>(
    field: &str,
    expected: T,
    actual: T,
) -> Result<(), FixtureError> {
    if expected == actual {
        Ok(())
    } else {
        Err(FixtureError::value_mismatch(field, expected, actual))
    }
}

pub(crate) fn nested_values(
    entries: Vec<DynamicMessage>,
    field: &Field<i32>,
) -> Result<Vec<i32>, AccessError> {
    entries.iter().map(|entry| entry.get(field)).collect()
}

fn declared(message: &DynamicMessage, origin: FieldOrigin) -> Vec<&FieldDescriptor> {
    let schema = message.schema();
    match origin {
        FieldOrigin::Inline => schema
            .message(message.type_name())
            .map(|descriptor| descriptor.fields.iter().collect())
            .unwrap_or_default(),
        FieldOrigin::Extension => schema.extensions_of(message.type_name()).collect(),
    }
}

/// Every field declared for `origin` has a stored value.
pub(crate) fn expect_all_present(
    message: &DynamicMessage,
    origin: FieldOrigin,
) -> Result<(), FixtureError> {
    match declared(message, origin)
        .into_iter()
        .find(|field| message.slot(origin, field.number).is_none())
    {
        Some(missing) => Err(FixtureError::ValueMismatch {
            field: missing.name.clone(),
            expected: "present".into(),
            actual: "unset".into(),
        }),
        None => Ok(()),
    }
}

pub(crate) fn expect_none_present(
    message: &DynamicMessage,
    origin: FieldOrigin,
) -> Result<(), FixtureError> {
    match declared(message, origin)
        .into_iter()
        .find(|field| message.slot(origin, field.number).is_some())
    {
        Some(stale) => Err(FixtureError::ValueMismatch {
            field: stale.name.clone(),
            expected: "unset".into(),
            actual: "present".into(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unittest::{schema, TEST_ALL_TYPES};

    #[test]
    fn mismatch_names_the_first_differing_field() {
        let schema = schema().unwrap();
        let mut message = DynamicMessage::new(&schema, TEST_ALL_TYPES).unwrap();
        set_all_fields(&mut message).unwrap();
        message.set_at(&REPEATED_SINT64, 0, -206).unwrap();

        match expect_all_fields_set(&message) {
            Err(FixtureError::ValueMismatch { field, expected, actual }) => {
                assert_eq!(field, "repeated_sint64");
                assert_eq!(expected, "[206, 306]");
                assert_eq!(actual, "[-206, 306]");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let schema = schema().unwrap();
        let mut message = DynamicMessage::new(&schema, TEST_ALL_TYPES).unwrap();
        set_all_fields(&mut message).unwrap();
        message.clear_field(&OPTIONAL_CORD);

        let err = expect_all_present(&message, FieldOrigin::Inline).unwrap_err();
        assert_eq!(err.to_string(), "optional_cord: expected present, got unset");
    }

    #[test]
    fn clear_check_rejects_leftover_values() {
        let schema = schema().unwrap();
        let mut message = DynamicMessage::new(&schema, TEST_ALL_TYPES).unwrap();
        expect_clear(&message).unwrap();

        message.push(&REPEATED_BOOL, false).unwrap();
        assert!(matches!(
            expect_clear(&message),
            Err(FixtureError::ValueMismatch { field, .. }) if field == "repeated_bool"
        ));
    }
}
