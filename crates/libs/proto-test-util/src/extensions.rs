//! Extension counterpart of [`crate::fixtures`].
//!
//! `TestAllExtensions` declares no inline fields; each extension reuses the
//! number and literal of its `TestAllTypes` counterpart, so a message built by
//! [`set_all_extensions`] serializes to the same bytes as one built by
//! [`set_all_fields`](crate::fixtures::set_all_fields).

use proto_runtime::{DynamicMessage, FieldOrigin};

use crate::fixtures::{check, expect_all_present, expect_none_present, nested_values};
use crate::unittest::extensions::*;
use crate::unittest::test_field_orderings::{
    MY_EXTENSION_INT, MY_EXTENSION_STRING, MY_FLOAT, MY_INT, MY_STRING,
};
use crate::unittest::{
    foreign_message, import_message, nested_message, optional_group_extension,
    repeated_group_extension, ForeignEnum, ImportEnum, NestedEnum,
};
use crate::FixtureError;

/// Sets every extension of a `TestAllExtensions` message.
pub fn set_all_extensions(message: &mut DynamicMessage) -> Result<(), FixtureError> {
    let mut extensions = message.extensions_mut();
    extensions.set(&OPTIONAL_INT32_EXTENSION, 101)?;
    extensions.set(&OPTIONAL_INT64_EXTENSION, 102)?;
    extensions.set(&OPTIONAL_UINT32_EXTENSION, 103)?;
    extensions.set(&OPTIONAL_UINT64_EXTENSION, 104)?;
    extensions.set(&OPTIONAL_SINT32_EXTENSION, 105)?;
    extensions.set(&OPTIONAL_SINT64_EXTENSION, 106)?;
    extensions.set(&OPTIONAL_FIXED32_EXTENSION, 107)?;
    extensions.set(&OPTIONAL_FIXED64_EXTENSION, 108)?;
    extensions.set(&OPTIONAL_SFIXED32_EXTENSION, 109)?;
    extensions.set(&OPTIONAL_SFIXED64_EXTENSION, 110)?;
    extensions.set(&OPTIONAL_FLOAT_EXTENSION, 111.0)?;
    extensions.set(&OPTIONAL_DOUBLE_EXTENSION, 112.0)?;
    extensions.set(&OPTIONAL_BOOL_EXTENSION, true)?;
    extensions.set(&OPTIONAL_STRING_EXTENSION, "115".to_owned())?;
    extensions.set(&OPTIONAL_BYTES_EXTENSION, b"116".to_vec())?;
    extensions.message_mut(&OPTIONALGROUP_EXTENSION)?.set(&optional_group_extension::A, 117)?;
    extensions.message_mut(&OPTIONAL_NESTED_MESSAGE_EXTENSION)?.set(&nested_message::BB, 118)?;
    extensions.message_mut(&OPTIONAL_FOREIGN_MESSAGE_EXTENSION)?.set(&foreign_message::C, 119)?;
    extensions.message_mut(&OPTIONAL_IMPORT_MESSAGE_EXTENSION)?.set(&import_message::D, 120)?;
    extensions.set(&OPTIONAL_NESTED_ENUM_EXTENSION, NestedEnum::Baz)?;
    extensions.set(&OPTIONAL_FOREIGN_ENUM_EXTENSION, ForeignEnum::ForeignBaz)?;
    extensions.set(&OPTIONAL_IMPORT_ENUM_EXTENSION, ImportEnum::ImportBaz)?;
    extensions.set(&OPTIONAL_STRING_PIECE_EXTENSION, "124".to_owned())?;
    extensions.set(&OPTIONAL_CORD_EXTENSION, "125".to_owned())?;

    extensions.push(&REPEATED_INT32_EXTENSION, 201)?;
    extensions.push(&REPEATED_INT64_EXTENSION, 202)?;
    extensions.push(&REPEATED_UINT32_EXTENSION, 203)?;
    extensions.push(&REPEATED_UINT64_EXTENSION, 204)?;
    extensions.push(&REPEATED_SINT32_EXTENSION, 205)?;
    extensions.push(&REPEATED_SINT64_EXTENSION, 206)?;
    extensions.push(&REPEATED_FIXED32_EXTENSION, 207)?;
    extensions.push(&REPEATED_FIXED64_EXTENSION, 208)?;
    extensions.push(&REPEATED_SFIXED32_EXTENSION, 209)?;
    extensions.push(&REPEATED_SFIXED64_EXTENSION, 210)?;
    extensions.push(&REPEATED_FLOAT_EXTENSION, 211.0)?;
    extensions.push(&REPEATED_DOUBLE_EXTENSION, 212.0)?;
    extensions.push(&REPEATED_BOOL_EXTENSION, true)?;
    extensions.push(&REPEATED_STRING_EXTENSION, "215".to_owned())?;
    extensions.push(&REPEATED_BYTES_EXTENSION, b"216".to_vec())?;
    extensions.add_message(&REPEATEDGROUP_EXTENSION)?.set(&repeated_group_extension::A, 217)?;
    extensions.add_message(&REPEATED_NESTED_MESSAGE_EXTENSION)?.set(&nested_message::BB, 218)?;
    extensions.add_message(&REPEATED_FOREIGN_MESSAGE_EXTENSION)?.set(&foreign_message::C, 219)?;
    extensions.add_message(&REPEATED_IMPORT_MESSAGE_EXTENSION)?.set(&import_message::D, 220)?;
    extensions.push(&REPEATED_NESTED_ENUM_EXTENSION, NestedEnum::Bar)?;
    extensions.push(&REPEATED_FOREIGN_ENUM_EXTENSION, ForeignEnum::ForeignBar)?;
    extensions.push(&REPEATED_IMPORT_ENUM_EXTENSION, ImportEnum::ImportBar)?;
    extensions.push(&REPEATED_STRING_PIECE_EXTENSION, "224".to_owned())?;
    extensions.push(&REPEATED_CORD_EXTENSION, "225".to_owned())?;

    extensions.push(&REPEATED_INT32_EXTENSION, 301)?;
    extensions.push(&REPEATED_INT64_EXTENSION, 302)?;
    extensions.push(&REPEATED_UINT32_EXTENSION, 303)?;
    extensions.push(&REPEATED_UINT64_EXTENSION, 304)?;
    extensions.push(&REPEATED_SINT32_EXTENSION, 305)?;
    extensions.push(&REPEATED_SINT64_EXTENSION, 306)?;
    extensions.push(&REPEATED_FIXED32_EXTENSION, 307)?;
    extensions.push(&REPEATED_FIXED64_EXTENSION, 308)?;
    extensions.push(&REPEATED_SFIXED32_EXTENSION, 309)?;
    extensions.push(&REPEATED_SFIXED64_EXTENSION, 310)?;
    extensions.push(&REPEATED_FLOAT_EXTENSION, 311.0)?;
    extensions.push(&REPEATED_DOUBLE_EXTENSION, 312.0)?;
    extensions.push(&REPEATED_BOOL_EXTENSION, false)?;
    extensions.push(&REPEATED_STRING_EXTENSION, "315".to_owned())?;
    extensions.push(&REPEATED_BYTES_EXTENSION, b"316".to_vec())?;
    extensions.add_message(&REPEATEDGROUP_EXTENSION)?.set(&repeated_group_extension::A, 317)?;
    extensions.add_message(&REPEATED_NESTED_MESSAGE_EXTENSION)?.set(&nested_message::BB, 318)?;
    extensions.add_message(&REPEATED_FOREIGN_MESSAGE_EXTENSION)?.set(&foreign_message::C, 319)?;
    extensions.add_message(&REPEATED_IMPORT_MESSAGE_EXTENSION)?.set(&import_message::D, 320)?;
    extensions.push(&REPEATED_NESTED_ENUM_EXTENSION, NestedEnum::Baz)?;
    extensions.push(&REPEATED_FOREIGN_ENUM_EXTENSION, ForeignEnum::ForeignBaz)?;
    extensions.push(&REPEATED_IMPORT_ENUM_EXTENSION, ImportEnum::ImportBaz)?;
    extensions.push(&REPEATED_STRING_PIECE_EXTENSION, "324".to_owned())?;
    extensions.push(&REPEATED_CORD_EXTENSION, "325".to_owned())?;

    extensions.set(&DEFAULT_INT32_EXTENSION, 401)?;
    extensions.set(&DEFAULT_INT64_EXTENSION, 402)?;
    extensions.set(&DEFAULT_UINT32_EXTENSION, 403)?;
    extensions.set(&DEFAULT_UINT64_EXTENSION, 404)?;
    extensions.set(&DEFAULT_SINT32_EXTENSION, 405)?;
    extensions.set(&DEFAULT_SINT64_EXTENSION, 406)?;
    extensions.set(&DEFAULT_FIXED32_EXTENSION, 407)?;
    extensions.set(&DEFAULT_FIXED64_EXTENSION, 408)?;
    extensions.set(&DEFAULT_SFIXED32_EXTENSION, 409)?;
    extensions.set(&DEFAULT_SFIXED64_EXTENSION, 410)?;
    extensions.set(&DEFAULT_FLOAT_EXTENSION, 411.0)?;
    extensions.set(&DEFAULT_DOUBLE_EXTENSION, 412.0)?;
    extensions.set(&DEFAULT_BOOL_EXTENSION, false)?;
    extensions.set(&DEFAULT_STRING_EXTENSION, "415".to_owned())?;
    extensions.set(&DEFAULT_BYTES_EXTENSION, b"416".to_vec())?;
    extensions.set(&DEFAULT_NESTED_ENUM_EXTENSION, NestedEnum::Foo)?;
    extensions.set(&DEFAULT_FOREIGN_ENUM_EXTENSION, ForeignEnum::ForeignFoo)?;
    extensions.set(&DEFAULT_IMPORT_ENUM_EXTENSION, ImportEnum::ImportFoo)?;
    extensions.set(&DEFAULT_STRING_PIECE_EXTENSION, "424".to_owned())?;
    extensions.set(&DEFAULT_CORD_EXTENSION, "425".to_owned())?;

    log::debug!(
        "fixtures: populated {} extensions of {}",
        message.extensions().len(),
        message.type_name()
    );
    Ok(())
}

/// Checks that every extension holds the value [`set_all_extensions`] assigns.
pub fn expect_all_extensions_set(message: &DynamicMessage) -> Result<(), FixtureError> {
    let extensions = message.extensions();
    check("optional_int32_extension", 101, extensions.get(&OPTIONAL_INT32_EXTENSION)?)?;
    check("optional_int64_extension", 102, extensions.get(&OPTIONAL_INT64_EXTENSION)?)?;
    check("optional_uint32_extension", 103, extensions.get(&OPTIONAL_UINT32_EXTENSION)?)?;
    check("optional_uint64_extension", 104, extensions.get(&OPTIONAL_UINT64_EXTENSION)?)?;
    check("optional_sint32_extension", 105, extensions.get(&OPTIONAL_SINT32_EXTENSION)?)?;
    check("optional_sint64_extension", 106, extensions.get(&OPTIONAL_SINT64_EXTENSION)?)?;
    check("optional_fixed32_extension", 107, extensions.get(&OPTIONAL_FIXED32_EXTENSION)?)?;
    check("optional_fixed64_extension", 108, extensions.get(&OPTIONAL_FIXED64_EXTENSION)?)?;
    check("optional_sfixed32_extension", 109, extensions.get(&OPTIONAL_SFIXED32_EXTENSION)?)?;
    check("optional_sfixed64_extension", 110, extensions.get(&OPTIONAL_SFIXED64_EXTENSION)?)?;
    check("optional_float_extension", 111.0, extensions.get(&OPTIONAL_FLOAT_EXTENSION)?)?;
    check("optional_double_extension", 112.0, extensions.get(&OPTIONAL_DOUBLE_EXTENSION)?)?;
    check("optional_bool_extension", true, extensions.get(&OPTIONAL_BOOL_EXTENSION)?)?;
    check(
        "optional_string_extension",
        "115".to_owned(),
        extensions.get(&OPTIONAL_STRING_EXTENSION)?,
    )?;
    check("optional_bytes_extension", b"116".to_vec(), extensions.get(&OPTIONAL_BYTES_EXTENSION)?)?;
    check(
        "optionalgroup_extension.a",
        117,
        extensions.get(&OPTIONALGROUP_EXTENSION)?.get(&optional_group_extension::A)?,
    )?;
    check(
        "optional_nested_message_extension.bb",
        118,
        extensions.get(&OPTIONAL_NESTED_MESSAGE_EXTENSION)?.get(&nested_message::BB)?,
    )?;
    check(
        "optional_foreign_message_extension.c",
        119,
        extensions.get(&OPTIONAL_FOREIGN_MESSAGE_EXTENSION)?.get(&foreign_message::C)?,
    )?;
    check(
        "optional_import_message_extension.d",
        120,
        extensions.get(&OPTIONAL_IMPORT_MESSAGE_EXTENSION)?.get(&import_message::D)?,
    )?;
    check(
        "optional_nested_enum_extension",
        NestedEnum::Baz,
        extensions.get(&OPTIONAL_NESTED_ENUM_EXTENSION)?,
    )?;
    check(
        "optional_foreign_enum_extension",
        ForeignEnum::ForeignBaz,
        extensions.get(&OPTIONAL_FOREIGN_ENUM_EXTENSION)?,
    )?;
    check(
        "optional_import_enum_extension",
        ImportEnum::ImportBaz,
        extensions.get(&OPTIONAL_IMPORT_ENUM_EXTENSION)?,
    )?;
    check(
        "optional_string_piece_extension",
        "124".to_owned(),
        extensions.get(&OPTIONAL_STRING_PIECE_EXTENSION)?,
    )?;
    check("optional_cord_extension", "125".to_owned(), extensions.get(&OPTIONAL_CORD_EXTENSION)?)?;

    check(
        "repeated_int32_extension",
        vec![201, 301],
        extensions.repeated(&REPEATED_INT32_EXTENSION)?,
    )?;
    check(
        "repeated_int64_extension",
        vec![202, 302],
        extensions.repeated(&REPEATED_INT64_EXTENSION)?,
    )?;
    check(
        "repeated_uint32_extension",
        vec![203, 303],
        extensions.repeated(&REPEATED_UINT32_EXTENSION)?,
    )?;
    check(
        "repeated_uint64_extension",
        vec![204, 304],
        extensions.repeated(&REPEATED_UINT64_EXTENSION)?,
    )?;
    check(
        "repeated_sint32_extension",
        vec![205, 305],
        extensions.repeated(&REPEATED_SINT32_EXTENSION)?,
    )?;
    check(
        "repeated_sint64_extension",
        vec![206, 306],
        extensions.repeated(&REPEATED_SINT64_EXTENSION)?,
    )?;
    check(
        "repeated_fixed32_extension",
        vec![207, 307],
        extensions.repeated(&REPEATED_FIXED32_EXTENSION)?,
    )?;
    check(
        "repeated_fixed64_extension",
        vec![208, 308],
        extensions.repeated(&REPEATED_FIXED64_EXTENSION)?,
    )?;
    check(
        "repeated_sfixed32_extension",
        vec![209, 309],
        extensions.repeated(&REPEATED_SFIXED32_EXTENSION)?,
    )?;
    check(
        "repeated_sfixed64_extension",
        vec![210, 310],
        extensions.repeated(&REPEATED_SFIXED64_EXTENSION)?,
    )?;
    check(
        "repeated_float_extension",
        vec![211.0, 311.0],
        extensions.repeated(&REPEATED_FLOAT_EXTENSION)?,
    )?;
    check(
        "repeated_double_extension",
        vec![212.0, 312.0],
        extensions.repeated(&REPEATED_DOUBLE_EXTENSION)?,
    )?;
    check(
        "repeated_bool_extension",
        vec![true, false],
        extensions.repeated(&REPEATED_BOOL_EXTENSION)?,
    )?;
    check(
        "repeated_string_extension",
        vec!["215".to_owned(), "315".to_owned()],
        extensions.repeated(&REPEATED_STRING_EXTENSION)?,
    )?;
    check(
        "repeated_bytes_extension",
        vec![b"216".to_vec(), b"316".to_vec()],
        extensions.repeated(&REPEATED_BYTES_EXTENSION)?,
    )?;
    check(
        "repeatedgroup_extension.a",
        vec![217, 317],
        nested_values(
            extensions.repeated(&REPEATEDGROUP_EXTENSION)?,
            &repeated_group_extension::A,
        )?,
    )?;
    check(
        "repeated_nested_message_extension.bb",
        vec![218, 318],
        nested_values(
            extensions.repeated(&REPEATED_NESTED_MESSAGE_EXTENSION)?,
            &nested_message::BB,
        )?,
    )?;
    check(
        "repeated_foreign_message_extension.c",
        vec![219, 319],
        nested_values(
            extensions.repeated(&REPEATED_FOREIGN_MESSAGE_EXTENSION)?,
            &foreign_message::C,
        )?,
    )?;
    check(
        "repeated_import_message_extension.d",
        vec![220, 320],
        nested_values(
            extensions.repeated(&REPEATED_IMPORT_MESSAGE_EXTENSION)?,
            &import_message::D,
        )?,
    )?;
    check(
        "repeated_nested_enum_extension",
        vec![NestedEnum::Bar, NestedEnum::Baz],
        extensions.repeated(&REPEATED_NESTED_ENUM_EXTENSION)?,
    )?;
    check(
        "repeated_foreign_enum_extension",
        vec![ForeignEnum::ForeignBar, ForeignEnum::ForeignBaz],
        extensions.repeated(&REPEATED_FOREIGN_ENUM_EXTENSION)?,
    )?;
    check(
        "repeated_import_enum_extension",
        vec![ImportEnum::ImportBar, ImportEnum::ImportBaz],
        extensions.repeated(&REPEATED_IMPORT_ENUM_EXTENSION)?,
    )?;
    check(
        "repeated_string_piece_extension",
        vec!["224".to_owned(), "324".to_owned()],
        extensions.repeated(&REPEATED_STRING_PIECE_EXTENSION)?,
    )?;
    check(
        "repeated_cord_extension",
        vec!["225".to_owned(), "325".to_owned()],
        extensions.repeated(&REPEATED_CORD_EXTENSION)?,
    )?;

    check("default_int32_extension", 401, extensions.get(&DEFAULT_INT32_EXTENSION)?)?;
    check("default_int64_extension", 402, extensions.get(&DEFAULT_INT64_EXTENSION)?)?;
    check("default_uint32_extension", 403, extensions.get(&DEFAULT_UINT32_EXTENSION)?)?;
    check("default_uint64_extension", 404, extensions.get(&DEFAULT_UINT64_EXTENSION)?)?;
    check("default_sint32_extension", 405, extensions.get(&DEFAULT_SINT32_EXTENSION)?)?;
    check("default_sint64_extension", 406, extensions.get(&DEFAULT_SINT64_EXTENSION)?)?;
    check("default_fixed32_extension", 407, extensions.get(&DEFAULT_FIXED32_EXTENSION)?)?;
    check("default_fixed64_extension", 408, extensions.get(&DEFAULT_FIXED64_EXTENSION)?)?;
    check("default_sfixed32_extension", 409, extensions.get(&DEFAULT_SFIXED32_EXTENSION)?)?;
    check("default_sfixed64_extension", 410, extensions.get(&DEFAULT_SFIXED64_EXTENSION)?)?;
    check("default_float_extension", 411.0, extensions.get(&DEFAULT_FLOAT_EXTENSION)?)?;
    check("default_double_extension", 412.0, extensions.get(&DEFAULT_DOUBLE_EXTENSION)?)?;
    check("default_bool_extension", false, extensions.get(&DEFAULT_BOOL_EXTENSION)?)?;
    check(
        "default_string_extension",
        "415".to_owned(),
        extensions.get(&DEFAULT_STRING_EXTENSION)?,
    )?;
    check("default_bytes_extension", b"416".to_vec(), extensions.get(&DEFAULT_BYTES_EXTENSION)?)?;
    check(
        "default_nested_enum_extension",
        NestedEnum::Foo,
        extensions.get(&DEFAULT_NESTED_ENUM_EXTENSION)?,
    )?;
    check(
        "default_foreign_enum_extension",
        ForeignEnum::ForeignFoo,
        extensions.get(&DEFAULT_FOREIGN_ENUM_EXTENSION)?,
    )?;
    check(
        "default_import_enum_extension",
        ImportEnum::ImportFoo,
        extensions.get(&DEFAULT_IMPORT_ENUM_EXTENSION)?,
    )?;
    check(
        "default_string_piece_extension",
        "424".to_owned(),
        extensions.get(&DEFAULT_STRING_PIECE_EXTENSION)?,
    )?;
    check("default_cord_extension", "425".to_owned(), extensions.get(&DEFAULT_CORD_EXTENSION)?)?;

    expect_all_present(message, FieldOrigin::Extension)
}

pub fn expect_extensions_clear(message: &DynamicMessage) -> Result<(), FixtureError> {
    expect_none_present(message, FieldOrigin::Extension)?;

    let extensions = message.extensions();
    check("optional_int32_extension", 0, extensions.get(&OPTIONAL_INT32_EXTENSION)?)?;
    check("optional_int64_extension", 0, extensions.get(&OPTIONAL_INT64_EXTENSION)?)?;
    check("optional_uint32_extension", 0, extensions.get(&OPTIONAL_UINT32_EXTENSION)?)?;
    check("optional_uint64_extension", 0, extensions.get(&OPTIONAL_UINT64_EXTENSION)?)?;
    check("optional_sint32_extension", 0, extensions.get(&OPTIONAL_SINT32_EXTENSION)?)?;
    check("optional_sint64_extension", 0, extensions.get(&OPTIONAL_SINT64_EXTENSION)?)?;
    check("optional_fixed32_extension", 0, extensions.get(&OPTIONAL_FIXED32_EXTENSION)?)?;
    check("optional_fixed64_extension", 0, extensions.get(&OPTIONAL_FIXED64_EXTENSION)?)?;
    check("optional_sfixed32_extension", 0, extensions.get(&OPTIONAL_SFIXED32_EXTENSION)?)?;
    check("optional_sfixed64_extension", 0, extensions.get(&OPTIONAL_SFIXED64_EXTENSION)?)?;
    check("optional_float_extension", 0.0, extensions.get(&OPTIONAL_FLOAT_EXTENSION)?)?;
    check("optional_double_extension", 0.0, extensions.get(&OPTIONAL_DOUBLE_EXTENSION)?)?;
    check("optional_bool_extension", false, extensions.get(&OPTIONAL_BOOL_EXTENSION)?)?;
    check("optional_string_extension", String::new(), extensions.get(&OPTIONAL_STRING_EXTENSION)?)?;
    check("optional_bytes_extension", Vec::new(), extensions.get(&OPTIONAL_BYTES_EXTENSION)?)?;
    check(
        "optionalgroup_extension.a",
        0,
        extensions.get(&OPTIONALGROUP_EXTENSION)?.get(&optional_group_extension::A)?,
    )?;
    check(
        "optional_nested_message_extension.bb",
        0,
        extensions.get(&OPTIONAL_NESTED_MESSAGE_EXTENSION)?.get(&nested_message::BB)?,
    )?;
    check(
        "optional_foreign_message_extension.c",
        0,
        extensions.get(&OPTIONAL_FOREIGN_MESSAGE_EXTENSION)?.get(&foreign_message::C)?,
    )?;
    check(
        "optional_import_message_extension.d",
        0,
        extensions.get(&OPTIONAL_IMPORT_MESSAGE_EXTENSION)?.get(&import_message::D)?,
    )?;
    check(
        "optional_nested_enum_extension",
        NestedEnum::Foo,
        extensions.get(&OPTIONAL_NESTED_ENUM_EXTENSION)?,
    )?;
    check(
        "optional_foreign_enum_extension",
        ForeignEnum::ForeignFoo,
        extensions.get(&OPTIONAL_FOREIGN_ENUM_EXTENSION)?,
    )?;
    check(
        "optional_import_enum_extension",
        ImportEnum::ImportFoo,
        extensions.get(&OPTIONAL_IMPORT_ENUM_EXTENSION)?,
    )?;
    check(
        "optional_string_piece_extension",
        String::new(),
        extensions.get(&OPTIONAL_STRING_PIECE_EXTENSION)?,
    )?;
    check("optional_cord_extension", String::new(), extensions.get(&OPTIONAL_CORD_EXTENSION)?)?;

    check("default_int32_extension", 41, extensions.get(&DEFAULT_INT32_EXTENSION)?)?;
    check("default_int64_extension", 42, extensions.get(&DEFAULT_INT64_EXTENSION)?)?;
    check("default_uint32_extension", 43, extensions.get(&DEFAULT_UINT32_EXTENSION)?)?;
    check("default_uint64_extension", 44, extensions.get(&DEFAULT_UINT64_EXTENSION)?)?;
    check("default_sint32_extension", -45, extensions.get(&DEFAULT_SINT32_EXTENSION)?)?;
    check("default_sint64_extension", 46, extensions.get(&DEFAULT_SINT64_EXTENSION)?)?;
    check("default_fixed32_extension", 47, extensions.get(&DEFAULT_FIXED32_EXTENSION)?)?;
    check("default_fixed64_extension", 48, extensions.get(&DEFAULT_FIXED64_EXTENSION)?)?;
    check("default_sfixed32_extension", 49, extensions.get(&DEFAULT_SFIXED32_EXTENSION)?)?;
    check("default_sfixed64_extension", -50, extensions.get(&DEFAULT_SFIXED64_EXTENSION)?)?;
    check("default_float_extension", 51.5, extensions.get(&DEFAULT_FLOAT_EXTENSION)?)?;
    check("default_double_extension", 52e3, extensions.get(&DEFAULT_DOUBLE_EXTENSION)?)?;
    check("default_bool_extension", true, extensions.get(&DEFAULT_BOOL_EXTENSION)?)?;
    check(
        "default_string_extension",
        "hello".to_owned(),
        extensions.get(&DEFAULT_STRING_EXTENSION)?,
    )?;
    check("default_bytes_extension", b"world".to_vec(), extensions.get(&DEFAULT_BYTES_EXTENSION)?)?;
    check(
        "default_nested_enum_extension",
        NestedEnum::Bar,
        extensions.get(&DEFAULT_NESTED_ENUM_EXTENSION)?,
    )?;
    check(
        "default_foreign_enum_extension",
        ForeignEnum::ForeignBar,
        extensions.get(&DEFAULT_FOREIGN_ENUM_EXTENSION)?,
    )?;
    check(
        "default_import_enum_extension",
        ImportEnum::ImportBar,
        extensions.get(&DEFAULT_IMPORT_ENUM_EXTENSION)?,
    )?;
    check(
        "default_string_piece_extension",
        "abc".to_owned(),
        extensions.get(&DEFAULT_STRING_PIECE_EXTENSION)?,
    )?;
    check("default_cord_extension", "123".to_owned(), extensions.get(&DEFAULT_CORD_EXTENSION)?)?;
    Ok(())
}

/// Overwrites the second entry of every repeated extension.
pub fn modify_repeated_extensions(message: &mut DynamicMessage) -> Result<(), FixtureError> {
    let mut extensions = message.extensions_mut();
    extensions.set_at(&REPEATED_INT32_EXTENSION, 1, 501)?;
    extensions.set_at(&REPEATED_INT64_EXTENSION, 1, 502)?;
    extensions.set_at(&REPEATED_UINT32_EXTENSION, 1, 503)?;
    extensions.set_at(&REPEATED_UINT64_EXTENSION, 1, 504)?;
    extensions.set_at(&REPEATED_SINT32_EXTENSION, 1, 505)?;
    extensions.set_at(&REPEATED_SINT64_EXTENSION, 1, 506)?;
    extensions.set_at(&REPEATED_FIXED32_EXTENSION, 1, 507)?;
    extensions.set_at(&REPEATED_FIXED64_EXTENSION, 1, 508)?;
    extensions.set_at(&REPEATED_SFIXED32_EXTENSION, 1, 509)?;
    extensions.set_at(&REPEATED_SFIXED64_EXTENSION, 1, 510)?;
    extensions.set_at(&REPEATED_FLOAT_EXTENSION, 1, 511.0)?;
    extensions.set_at(&REPEATED_DOUBLE_EXTENSION, 1, 512.0)?;
    extensions.set_at(&REPEATED_BOOL_EXTENSION, 1, true)?;
    extensions.set_at(&REPEATED_STRING_EXTENSION, 1, "515".to_owned())?;
    extensions.set_at(&REPEATED_BYTES_EXTENSION, 1, b"516".to_vec())?;
    extensions.message_at_mut(&REPEATEDGROUP_EXTENSION, 1)?.set(&repeated_group_extension::A, 517)?;
    extensions.message_at_mut(&REPEATED_NESTED_MESSAGE_EXTENSION, 1)?.set(
        &nested_message::BB,
        518,
    )?;
    extensions.message_at_mut(&REPEATED_FOREIGN_MESSAGE_EXTENSION, 1)?.set(
        &foreign_message::C,
        519,
    )?;
    extensions.message_at_mut(&REPEATED_IMPORT_MESSAGE_EXTENSION, 1)?.set(&import_message::D, 520)?;
    extensions.set_at(&REPEATED_NESTED_ENUM_EXTENSION, 1, NestedEnum::Foo)?;
    extensions.set_at(&REPEATED_FOREIGN_ENUM_EXTENSION, 1, ForeignEnum::ForeignFoo)?;
    extensions.set_at(&REPEATED_IMPORT_ENUM_EXTENSION, 1, ImportEnum::ImportFoo)?;
    extensions.set_at(&REPEATED_STRING_PIECE_EXTENSION, 1, "524".to_owned())?;
    extensions.set_at(&REPEATED_CORD_EXTENSION, 1, "525".to_owned())?;
    Ok(())
}

pub fn expect_repeated_extensions_modified(message: &DynamicMessage) -> Result<(), FixtureError> {
    let extensions = message.extensions();
    check(
        "repeated_int32_extension",
        vec![201, 501],
        extensions.repeated(&REPEATED_INT32_EXTENSION)?,
    )?;
    check(
        "repeated_int64_extension",
        vec![202, 502],
        extensions.repeated(&REPEATED_INT64_EXTENSION)?,
    )?;
    check(
        "repeated_uint32_extension",
        vec![203, 503],
        extensions.repeated(&REPEATED_UINT32_EXTENSION)?,
    )?;
    check(
        "repeated_uint64_extension",
        vec![204, 504],
        extensions.repeated(&REPEATED_UINT64_EXTENSION)?,
    )?;
    check(
        "repeated_sint32_extension",
        vec![205, 505],
        extensions.repeated(&REPEATED_SINT32_EXTENSION)?,
    )?;
    check(
        "repeated_sint64_extension",
        vec![206, 506],
        extensions.repeated(&REPEATED_SINT64_EXTENSION)?,
    )?;
    check(
        "repeated_fixed32_extension",
        vec![207, 507],
        extensions.repeated(&REPEATED_FIXED32_EXTENSION)?,
    )?;
    check(
        "repeated_fixed64_extension",
        vec![208, 508],
        extensions.repeated(&REPEATED_FIXED64_EXTENSION)?,
    )?;
    check(
        "repeated_sfixed32_extension",
        vec![209, 509],
        extensions.repeated(&REPEATED_SFIXED32_EXTENSION)?,
    )?;
    check(
        "repeated_sfixed64_extension",
        vec![210, 510],
        extensions.repeated(&REPEATED_SFIXED64_EXTENSION)?,
    )?;
    check(
        "repeated_float_extension",
        vec![211.0, 511.0],
        extensions.repeated(&REPEATED_FLOAT_EXTENSION)?,
    )?;
    check(
        "repeated_double_extension",
        vec![212.0, 512.0],
        extensions.repeated(&REPEATED_DOUBLE_EXTENSION)?,
    )?;
    check(
        "repeated_bool_extension",
        vec![true, true],
        extensions.repeated(&REPEATED_BOOL_EXTENSION)?,
    )?;
    check(
        "repeated_string_extension",
        vec!["215".to_owned(), "515".to_owned()],
        extensions.repeated(&REPEATED_STRING_EXTENSION)?,
    )?;
    check(
        "repeated_bytes_extension",
        vec![b"216".to_vec(), b"516".to_vec()],
        extensions.repeated(&REPEATED_BYTES_EXTENSION)?,
    )?;
    check(
        "repeatedgroup_extension.a",
        vec![217, 517],
        nested_values(
            extensions.repeated(&REPEATEDGROUP_EXTENSION)?,
            &repeated_group_extension::A,
        )?,
    )?;
    check(
        "repeated_nested_message_extension.bb",
        vec![218, 518],
        nested_values(
            extensions.repeated(&REPEATED_NESTED_MESSAGE_EXTENSION)?,
            &nested_message::BB,
        )?,
    )?;
    check(
        "repeated_foreign_message_extension.c",
        vec![219, 519],
        nested_values(
            extensions.repeated(&REPEATED_FOREIGN_MESSAGE_EXTENSION)?,
            &foreign_message::C,
        )?,
    )?;
    check(
        "repeated_import_message_extension.d",
        vec![220, 520],
        nested_values(
            extensions.repeated(&REPEATED_IMPORT_MESSAGE_EXTENSION)?,
            &import_message::D,
        )?,
    )?;
    check(
        "repeated_nested_enum_extension",
        vec![NestedEnum::Bar, NestedEnum::Foo],
        extensions.repeated(&REPEATED_NESTED_ENUM_EXTENSION)?,
    )?;
    check(
        "repeated_foreign_enum_extension",
        vec![ForeignEnum::ForeignBar, ForeignEnum::ForeignFoo],
        extensions.repeated(&REPEATED_FOREIGN_ENUM_EXTENSION)?,
    )?;
    check(
        "repeated_import_enum_extension",
        vec![ImportEnum::ImportBar, ImportEnum::ImportFoo],
        extensions.repeated(&REPEATED_IMPORT_ENUM_EXTENSION)?,
    )?;
    check(
        "repeated_string_piece_extension",
        vec!["224".to_owned(), "524".to_owned()],
        extensions.repeated(&REPEATED_STRING_PIECE_EXTENSION)?,
    )?;
    check(
        "repeated_cord_extension",
        vec!["225".to_owned(), "525".to_owned()],
        extensions.repeated(&REPEATED_CORD_EXTENSION)?,
    )?;
    Ok(())
}

/// Populates a `TestFieldOrderings` message with three inline fields and two
/// extensions whose numbers fall between them.
///
/// Assignment order is deliberately not field-number order; the serialized
/// form must still come out as 1, 5, 11, 50, 101.
pub fn set_all_fields_and_extensions(message: &mut DynamicMessage) -> Result<(), FixtureError> {
    message.set(&MY_INT, 1)?;
    message.set(&MY_STRING, "foo".to_owned())?;
    message.set(&MY_FLOAT, 1.0)?;

    let mut extensions = message.extensions_mut();
    extensions.set(&MY_EXTENSION_INT, 23)?;
    extensions.set(&MY_EXTENSION_STRING, "bar".to_owned())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unittest::{schema, TEST_ALL_EXTENSIONS, TEST_FIELD_ORDERINGS};

    #[test]
    fn extension_fixture_checks_pass_on_their_own_output() {
        let schema = schema().unwrap();
        let mut message = DynamicMessage::new(&schema, TEST_ALL_EXTENSIONS).unwrap();
        expect_extensions_clear(&message).unwrap();

        set_all_extensions(&mut message).unwrap();
        expect_all_extensions_set(&message).unwrap();

        modify_repeated_extensions(&mut message).unwrap();
        expect_repeated_extensions_modified(&message).unwrap();
        assert!(expect_all_extensions_set(&message).is_err());
    }

    #[test]
    fn mixed_fixture_sets_exactly_five_fields() {
        let schema = schema().unwrap();
        let mut message = DynamicMessage::new(&schema, TEST_FIELD_ORDERINGS).unwrap();
        set_all_fields_and_extensions(&mut message).unwrap();

        assert_eq!(
            message.present_fields(),
            vec![
                (1, FieldOrigin::Inline),
                (5, FieldOrigin::Extension),
                (11, FieldOrigin::Inline),
                (50, FieldOrigin::Extension),
                (101, FieldOrigin::Inline),
            ]
        );
        assert_eq!(message.extensions().get(&MY_EXTENSION_STRING).unwrap(), "bar");
    }
}
