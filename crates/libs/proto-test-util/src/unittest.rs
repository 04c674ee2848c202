//! The proto2 unit-test schema.
//!
//! `TestAllTypes` declares every field kind three ways: optional (1-25),
//! repeated (31-55) and optional with a declared default (61-75, 81-85).
//! `TestAllExtensions` is an empty extendable message whose extensions reuse
//! exactly those numbers, and `TestFieldOrderings` mixes inline fields with
//! extension ranges so canonical ordering has to interleave the two.

use proto_runtime::{
    enum_from_value, DynamicMessage, EnumDescriptor, Extension, Field, FieldDescriptor,
    FieldKind, FieldType, MessageDescriptor, ProtoEnum, RepeatedExtension, RepeatedField, Schema,
    SchemaBuilder, SchemaError, StringRepr, Value, MAX_FIELD_NUMBER,
};

pub const TEST_ALL_TYPES: &str = "protobuf_unittest.TestAllTypes";
pub const TEST_ALL_EXTENSIONS: &str = "protobuf_unittest.TestAllExtensions";
pub const TEST_FIELD_ORDERINGS: &str = "protobuf_unittest.TestFieldOrderings";
pub const NESTED_MESSAGE: &str = "protobuf_unittest.TestAllTypes.NestedMessage";
pub const OPTIONAL_GROUP: &str = "protobuf_unittest.TestAllTypes.OptionalGroup";
pub const REPEATED_GROUP: &str = "protobuf_unittest.TestAllTypes.RepeatedGroup";
pub const FOREIGN_MESSAGE: &str = "protobuf_unittest.ForeignMessage";
pub const IMPORT_MESSAGE: &str = "protobuf_unittest_import.ImportMessage";
pub const OPTIONAL_GROUP_EXTENSION: &str = "protobuf_unittest.OptionalGroup_extension";
pub const REPEATED_GROUP_EXTENSION: &str = "protobuf_unittest.RepeatedGroup_extension";

macro_rules! proto_enum {
    ($(#[$meta:meta])* $name:ident = $full:literal {
        $($variant:ident = $label:literal => $number:literal),+ $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant = $number),+
        }

        impl ProtoEnum for $name {
            const NAME: &'static str = $full;
            const VALUES: &'static [(&'static str, i32)] = &[$(($label, $number)),+];

            fn number(self) -> i32 {
                self as i32
            }

            fn from_number(number: i32) -> Option<Self> {
                match number {
                    $($number => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl FieldType for $name {
            fn into_value(self) -> Value {
                Value::Enum(self.number())
            }

            fn from_value(value: &Value) -> Option<Self> {
                enum_from_value(value)
            }
        }
    };
}

proto_enum!(NestedEnum = "protobuf_unittest.TestAllTypes.NestedEnum" {
    Foo = "FOO" => 1,
    Bar = "BAR" => 2,
    Baz = "BAZ" => 3,
});

proto_enum!(ForeignEnum = "protobuf_unittest.ForeignEnum" {
    ForeignFoo = "FOREIGN_FOO" => 4,
    ForeignBar = "FOREIGN_BAR" => 5,
    ForeignBaz = "FOREIGN_BAZ" => 6,
});

proto_enum!(ImportEnum = "protobuf_unittest_import.ImportEnum" {
    ImportFoo = "IMPORT_FOO" => 7,
    ImportBar = "IMPORT_BAR" => 8,
    ImportBaz = "IMPORT_BAZ" => 9,
});

type Row = (&'static str, u32, FieldKind);

const TEXT: FieldKind = FieldKind::String(StringRepr::Plain);

const SCALARS: [Row; 15] = [
    ("int32", 1, FieldKind::Int32),
    ("int64", 2, FieldKind::Int64),
    ("uint32", 3, FieldKind::Uint32),
    ("uint64", 4, FieldKind::Uint64),
    ("sint32", 5, FieldKind::Sint32),
    ("sint64", 6, FieldKind::Sint64),
    ("fixed32", 7, FieldKind::Fixed32),
    ("fixed64", 8, FieldKind::Fixed64),
    ("sfixed32", 9, FieldKind::Sfixed32),
    ("sfixed64", 10, FieldKind::Sfixed64),
    ("float", 11, FieldKind::Float),
    ("double", 12, FieldKind::Double),
    ("bool", 13, FieldKind::Bool),
    ("string", 14, TEXT),
    ("bytes", 15, FieldKind::Bytes),
];

const MESSAGES: [Row; 3] = [
    ("nested_message", 18, FieldKind::Message(NESTED_MESSAGE)),
    ("foreign_message", 19, FieldKind::Message(FOREIGN_MESSAGE)),
    ("import_message", 20, FieldKind::Message(IMPORT_MESSAGE)),
];

const ENUMS: [Row; 3] = [
    ("nested_enum", 21, FieldKind::Enum(NestedEnum::NAME)),
    ("foreign_enum", 22, FieldKind::Enum(ForeignEnum::NAME)),
    ("import_enum", 23, FieldKind::Enum(ImportEnum::NAME)),
];

const STRING_REPRS: [Row; 2] = [
    ("string_piece", 24, FieldKind::String(StringRepr::Piece)),
    ("cord", 25, FieldKind::String(StringRepr::Cord)),
];

/// Offset from an optional field's number to its repeated counterpart.
const REPEATED_OFFSET: u32 = 30;
/// Offset from an optional field's number to its defaulted counterpart.
const DEFAULT_OFFSET: u32 = 60;

/// Declared defaults of the `default_*` fields, in `SCALARS`, `ENUMS`,
/// `STRING_REPRS` order.
fn declared_defaults() -> [Value; 20] {
    [
        Value::I32(41),
        Value::I64(42),
        Value::U32(43),
        Value::U64(44),
        Value::I32(-45),
        Value::I64(46),
        Value::U32(47),
        Value::U64(48),
        Value::I32(49),
        Value::I64(-50),
        Value::F32(51.5),
        Value::F64(52e3),
        Value::Bool(true),
        Value::String("hello".into()),
        Value::Bytes(b"world".to_vec()),
        Value::Enum(NestedEnum::Bar.number()),
        Value::Enum(ForeignEnum::ForeignBar.number()),
        Value::Enum(ImportEnum::ImportBar.number()),
        Value::String("abc".into()),
        Value::String("123".into()),
    ]
}

/// Field table shared by `TestAllTypes` and the `TestAllExtensions`
/// extensions; the two differ only in naming and group types.
fn all_types_fields(
    suffix: &str,
    optional_group: &'static str,
    repeated_group: &'static str,
) -> Vec<FieldDescriptor> {
    let mut fields = vec![
        FieldDescriptor::optional(
            format!("optionalgroup{suffix}"),
            16,
            FieldKind::Group(optional_group),
        ),
        FieldDescriptor::repeated(
            format!("repeatedgroup{suffix}"),
            16 + REPEATED_OFFSET,
            FieldKind::Group(repeated_group),
        ),
    ];
    for (base, number, kind) in SCALARS.iter().chain(&MESSAGES).chain(&ENUMS).chain(&STRING_REPRS) {
        fields.push(FieldDescriptor::optional(format!("optional_{base}{suffix}"), *number, *kind));
        fields.push(FieldDescriptor::repeated(
            format!("repeated_{base}{suffix}"),
            number + REPEATED_OFFSET,
            *kind,
        ));
    }
    let defaults = declared_defaults();
    for ((base, number, kind), default) in
        SCALARS.iter().chain(&ENUMS).chain(&STRING_REPRS).zip(defaults)
    {
        let name = format!("default_{base}{suffix}");
        fields.push(
            FieldDescriptor::optional(name, number + DEFAULT_OFFSET, *kind).with_default(default),
        );
    }
    fields.sort_by_key(|field| field.number);
    fields
}

fn single_int32(name: &'static str, field: &str, number: u32) -> MessageDescriptor {
    MessageDescriptor::new(name).field(FieldDescriptor::optional(field, number, FieldKind::Int32))
}

/// Builds a fresh copy of the unit-test schema.
pub fn schema() -> Result<Schema, SchemaError> {
    let mut builder = SchemaBuilder::new();
    builder
        .add_enum(EnumDescriptor::of::<NestedEnum>())?
        .add_enum(EnumDescriptor::of::<ForeignEnum>())?
        .add_enum(EnumDescriptor::of::<ImportEnum>())?;

    builder
        .add_message(single_int32(NESTED_MESSAGE, "bb", 1))?
        .add_message(single_int32(FOREIGN_MESSAGE, "c", 1))?
        .add_message(single_int32(IMPORT_MESSAGE, "d", 1))?
        .add_message(single_int32(OPTIONAL_GROUP, "a", 17))?
        .add_message(single_int32(REPEATED_GROUP, "a", 47))?
        .add_message(single_int32(OPTIONAL_GROUP_EXTENSION, "a", 17))?
        .add_message(single_int32(REPEATED_GROUP_EXTENSION, "a", 47))?
        .add_message(
            MessageDescriptor::new(TEST_ALL_TYPES).fields(all_types_fields(
                "",
                OPTIONAL_GROUP,
                REPEATED_GROUP,
            )),
        )?
        .add_message(
            MessageDescriptor::new(TEST_ALL_EXTENSIONS).extension_range(1..=MAX_FIELD_NUMBER),
        )?
        .add_message(
            MessageDescriptor::new(TEST_FIELD_ORDERINGS)
                .field(FieldDescriptor::optional("my_int", 1, FieldKind::Int64))
                .field(FieldDescriptor::optional("my_string", 11, TEXT))
                .field(FieldDescriptor::optional("my_float", 101, FieldKind::Float))
                .extension_range(2..=10)
                .extension_range(12..=100),
        )?;

    let extended =
        all_types_fields("_extension", OPTIONAL_GROUP_EXTENSION, REPEATED_GROUP_EXTENSION);
    for field in extended {
        builder.add_extension(TEST_ALL_EXTENSIONS, field)?;
    }
    builder
        .add_extension(
            TEST_FIELD_ORDERINGS,
            FieldDescriptor::optional("my_extension_int", 5, FieldKind::Int32),
        )?
        .add_extension(
            TEST_FIELD_ORDERINGS,
            FieldDescriptor::optional("my_extension_string", 50, TEXT),
        )?;

    builder.build()
}

/// Inline fields of `TestAllTypes`.
pub mod test_all_types {
    use super::*;

    pub const OPTIONAL_INT32: Field<i32> = Field::new(TEST_ALL_TYPES, 1);
    pub const OPTIONAL_INT64: Field<i64> = Field::new(TEST_ALL_TYPES, 2);
    pub const OPTIONAL_UINT32: Field<u32> = Field::new(TEST_ALL_TYPES, 3);
    pub const OPTIONAL_UINT64: Field<u64> = Field::new(TEST_ALL_TYPES, 4);
    pub const OPTIONAL_SINT32: Field<i32> = Field::new(TEST_ALL_TYPES, 5);
    pub const OPTIONAL_SINT64: Field<i64> = Field::new(TEST_ALL_TYPES, 6);
    pub const OPTIONAL_FIXED32: Field<u32> = Field::new(TEST_ALL_TYPES, 7);
    pub const OPTIONAL_FIXED64: Field<u64> = Field::new(TEST_ALL_TYPES, 8);
    pub const OPTIONAL_SFIXED32: Field<i32> = Field::new(TEST_ALL_TYPES, 9);
    pub const OPTIONAL_SFIXED64: Field<i64> = Field::new(TEST_ALL_TYPES, 10);
    pub const OPTIONAL_FLOAT: Field<f32> = Field::new(TEST_ALL_TYPES, 11);
    pub const OPTIONAL_DOUBLE: Field<f64> = Field::new(TEST_ALL_TYPES, 12);
    pub const OPTIONAL_BOOL: Field<bool> = Field::new(TEST_ALL_TYPES, 13);
    pub const OPTIONAL_STRING: Field<String> = Field::new(TEST_ALL_TYPES, 14);
    pub const OPTIONAL_BYTES: Field<Vec<u8>> = Field::new(TEST_ALL_TYPES, 15);
    pub const OPTIONALGROUP: Field<DynamicMessage> = Field::new(TEST_ALL_TYPES, 16);
    pub const OPTIONAL_NESTED_MESSAGE: Field<DynamicMessage> = Field::new(TEST_ALL_TYPES, 18);
    pub const OPTIONAL_FOREIGN_MESSAGE: Field<DynamicMessage> = Field::new(TEST_ALL_TYPES, 19);
    pub const OPTIONAL_IMPORT_MESSAGE: Field<DynamicMessage> = Field::new(TEST_ALL_TYPES, 20);
    pub const OPTIONAL_NESTED_ENUM: Field<NestedEnum> = Field::new(TEST_ALL_TYPES, 21);
    pub const OPTIONAL_FOREIGN_ENUM: Field<ForeignEnum> = Field::new(TEST_ALL_TYPES, 22);
    pub const OPTIONAL_IMPORT_ENUM: Field<ImportEnum> = Field::new(TEST_ALL_TYPES, 23);
    pub const OPTIONAL_STRING_PIECE: Field<String> = Field::new(TEST_ALL_TYPES, 24);
    pub const OPTIONAL_CORD: Field<String> = Field::new(TEST_ALL_TYPES, 25);

    pub const REPEATED_INT32: RepeatedField<i32> = RepeatedField::new(TEST_ALL_TYPES, 31);
    pub const REPEATED_INT64: RepeatedField<i64> = RepeatedField::new(TEST_ALL_TYPES, 32);
    pub const REPEATED_UINT32: RepeatedField<u32> = RepeatedField::new(TEST_ALL_TYPES, 33);
    pub const REPEATED_UINT64: RepeatedField<u64> = RepeatedField::new(TEST_ALL_TYPES, 34);
    pub const REPEATED_SINT32: RepeatedField<i32> = RepeatedField::new(TEST_ALL_TYPES, 35);
    pub const REPEATED_SINT64: RepeatedField<i64> = RepeatedField::new(TEST_ALL_TYPES, 36);
    pub const REPEATED_FIXED32: RepeatedField<u32> = RepeatedField::new(TEST_ALL_TYPES, 37);
    pub const REPEATED_FIXED64: RepeatedField<u64> = RepeatedField::new(TEST_ALL_TYPES, 38);
    pub const REPEATED_SFIXED32: RepeatedField<i32> = RepeatedField::new(TEST_ALL_TYPES, 39);
    pub const REPEATED_SFIXED64: RepeatedField<i64> = RepeatedField::new(TEST_ALL_TYPES, 40);
    pub const REPEATED_FLOAT: RepeatedField<f32> = RepeatedField::new(TEST_ALL_TYPES, 41);
    pub const REPEATED_DOUBLE: RepeatedField<f64> = RepeatedField::new(TEST_ALL_TYPES, 42);
    pub const REPEATED_BOOL: RepeatedField<bool> = RepeatedField::new(TEST_ALL_TYPES, 43);
    pub const REPEATED_STRING: RepeatedField<String> = RepeatedField::new(TEST_ALL_TYPES, 44);
    pub const REPEATED_BYTES: RepeatedField<Vec<u8>> = RepeatedField::new(TEST_ALL_TYPES, 45);
    pub const REPEATEDGROUP: RepeatedField<DynamicMessage> = RepeatedField::new(TEST_ALL_TYPES, 46);
    pub const REPEATED_NESTED_MESSAGE: RepeatedField<DynamicMessage> =
        RepeatedField::new(TEST_ALL_TYPES, 48);
    pub const REPEATED_FOREIGN_MESSAGE: RepeatedField<DynamicMessage> =
        RepeatedField::new(TEST_ALL_TYPES, 49);
    pub const REPEATED_IMPORT_MESSAGE: RepeatedField<DynamicMessage> =
        RepeatedField::new(TEST_ALL_TYPES, 50);
    pub const REPEATED_NESTED_ENUM: RepeatedField<NestedEnum> =
        RepeatedField::new(TEST_ALL_TYPES, 51);
    pub const REPEATED_FOREIGN_ENUM: RepeatedField<ForeignEnum> =
        RepeatedField::new(TEST_ALL_TYPES, 52);
    pub const REPEATED_IMPORT_ENUM: RepeatedField<ImportEnum> =
        RepeatedField::new(TEST_ALL_TYPES, 53);
    pub const REPEATED_STRING_PIECE: RepeatedField<String> = RepeatedField::new(TEST_ALL_TYPES, 54);
    pub const REPEATED_CORD: RepeatedField<String> = RepeatedField::new(TEST_ALL_TYPES, 55);

    pub const DEFAULT_INT32: Field<i32> = Field::new(TEST_ALL_TYPES, 61);
    pub const DEFAULT_INT64: Field<i64> = Field::new(TEST_ALL_TYPES, 62);
    pub const DEFAULT_UINT32: Field<u32> = Field::new(TEST_ALL_TYPES, 63);
    pub const DEFAULT_UINT64: Field<u64> = Field::new(TEST_ALL_TYPES, 64);
    pub const DEFAULT_SINT32: Field<i32> = Field::new(TEST_ALL_TYPES, 65);
    pub const DEFAULT_SINT64: Field<i64> = Field::new(TEST_ALL_TYPES, 66);
    pub const DEFAULT_FIXED32: Field<u32> = Field::new(TEST_ALL_TYPES, 67);
    pub const DEFAULT_FIXED64: Field<u64> = Field::new(TEST_ALL_TYPES, 68);
    pub const DEFAULT_SFIXED32: Field<i32> = Field::new(TEST_ALL_TYPES, 69);
    pub const DEFAULT_SFIXED64: Field<i64> = Field::new(TEST_ALL_TYPES, 70);
    pub const DEFAULT_FLOAT: Field<f32> = Field::new(TEST_ALL_TYPES, 71);
    pub const DEFAULT_DOUBLE: Field<f64> = Field::new(TEST_ALL_TYPES, 72);
    pub const DEFAULT_BOOL: Field<bool> = Field::new(TEST_ALL_TYPES, 73);
    pub const DEFAULT_STRING: Field<String> = Field::new(TEST_ALL_TYPES, 74);
    pub const DEFAULT_BYTES: Field<Vec<u8>> = Field::new(TEST_ALL_TYPES, 75);
    pub const DEFAULT_NESTED_ENUM: Field<NestedEnum> = Field::new(TEST_ALL_TYPES, 81);
    pub const DEFAULT_FOREIGN_ENUM: Field<ForeignEnum> = Field::new(TEST_ALL_TYPES, 82);
    pub const DEFAULT_IMPORT_ENUM: Field<ImportEnum> = Field::new(TEST_ALL_TYPES, 83);
    pub const DEFAULT_STRING_PIECE: Field<String> = Field::new(TEST_ALL_TYPES, 84);
    pub const DEFAULT_CORD: Field<String> = Field::new(TEST_ALL_TYPES, 85);
}

pub mod nested_message {
    use super::*;

    pub const BB: Field<i32> = Field::new(NESTED_MESSAGE, 1);
}

pub mod foreign_message {
    use super::*;

    pub const C: Field<i32> = Field::new(FOREIGN_MESSAGE, 1);
}

pub mod import_message {
    use super::*;

    pub const D: Field<i32> = Field::new(IMPORT_MESSAGE, 1);
}

pub mod optional_group {
    use super::*;

    pub const A: Field<i32> = Field::new(OPTIONAL_GROUP, 17);
}

pub mod repeated_group {
    use super::*;

    pub const A: Field<i32> = Field::new(REPEATED_GROUP, 47);
}

/// Extensions of `TestAllExtensions`, numbered like their `TestAllTypes`
/// counterparts.
pub mod extensions {
    use super::*;

    pub const OPTIONAL_INT32_EXTENSION: Extension<i32> = Extension::new(TEST_ALL_EXTENSIONS, 1);
    pub const OPTIONAL_INT64_EXTENSION: Extension<i64> = Extension::new(TEST_ALL_EXTENSIONS, 2);
    pub const OPTIONAL_UINT32_EXTENSION: Extension<u32> = Extension::new(TEST_ALL_EXTENSIONS, 3);
    pub const OPTIONAL_UINT64_EXTENSION: Extension<u64> = Extension::new(TEST_ALL_EXTENSIONS, 4);
    pub const OPTIONAL_SINT32_EXTENSION: Extension<i32> = Extension::new(TEST_ALL_EXTENSIONS, 5);
    pub const OPTIONAL_SINT64_EXTENSION: Extension<i64> = Extension::new(TEST_ALL_EXTENSIONS, 6);
    pub const OPTIONAL_FIXED32_EXTENSION: Extension<u32> = Extension::new(TEST_ALL_EXTENSIONS, 7);
    pub const OPTIONAL_FIXED64_EXTENSION: Extension<u64> = Extension::new(TEST_ALL_EXTENSIONS, 8);
    pub const OPTIONAL_SFIXED32_EXTENSION: Extension<i32> = Extension::new(TEST_ALL_EXTENSIONS, 9);
    pub const OPTIONAL_SFIXED64_EXTENSION: Extension<i64> = Extension::new(TEST_ALL_EXTENSIONS, 10);
    pub const OPTIONAL_FLOAT_EXTENSION: Extension<f32> = Extension::new(TEST_ALL_EXTENSIONS, 11);
    pub const OPTIONAL_DOUBLE_EXTENSION: Extension<f64> = Extension::new(TEST_ALL_EXTENSIONS, 12);
    pub const OPTIONAL_BOOL_EXTENSION: Extension<bool> = Extension::new(TEST_ALL_EXTENSIONS, 13);
    pub const OPTIONAL_STRING_EXTENSION: Extension<String> =
        Extension::new(TEST_ALL_EXTENSIONS, 14);
    pub const OPTIONAL_BYTES_EXTENSION: Extension<Vec<u8>> =
        Extension::new(TEST_ALL_EXTENSIONS, 15);
    pub const OPTIONALGROUP_EXTENSION: Extension<DynamicMessage> =
        Extension::new(TEST_ALL_EXTENSIONS, 16);
    pub const OPTIONAL_NESTED_MESSAGE_EXTENSION: Extension<DynamicMessage> =
        Extension::new(TEST_ALL_EXTENSIONS, 18);
    pub const OPTIONAL_FOREIGN_MESSAGE_EXTENSION: Extension<DynamicMessage> =
        Extension::new(TEST_ALL_EXTENSIONS, 19);
    pub const OPTIONAL_IMPORT_MESSAGE_EXTENSION: Extension<DynamicMessage> =
        Extension::new(TEST_ALL_EXTENSIONS, 20);
    pub const OPTIONAL_NESTED_ENUM_EXTENSION: Extension<NestedEnum> =
        Extension::new(TEST_ALL_EXTENSIONS, 21);
    pub const OPTIONAL_FOREIGN_ENUM_EXTENSION: Extension<ForeignEnum> =
        Extension::new(TEST_ALL_EXTENSIONS, 22);
    pub const OPTIONAL_IMPORT_ENUM_EXTENSION: Extension<ImportEnum> =
        Extension::new(TEST_ALL_EXTENSIONS, 23);
    pub const OPTIONAL_STRING_PIECE_EXTENSION: Extension<String> =
        Extension::new(TEST_ALL_EXTENSIONS, 24);
    pub const OPTIONAL_CORD_EXTENSION: Extension<String> = Extension::new(TEST_ALL_EXTENSIONS, 25);

    pub const REPEATED_INT32_EXTENSION: RepeatedExtension<i32> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 31);
    pub const REPEATED_INT64_EXTENSION: RepeatedExtension<i64> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 32);
    pub const REPEATED_UINT32_EXTENSION: RepeatedExtension<u32> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 33);
    pub const REPEATED_UINT64_EXTENSION: RepeatedExtension<u64> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 34);
    pub const REPEATED_SINT32_EXTENSION: RepeatedExtension<i32> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 35);
    pub const REPEATED_SINT64_EXTENSION: RepeatedExtension<i64> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 36);
    pub const REPEATED_FIXED32_EXTENSION: RepeatedExtension<u32> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 37);
    pub const REPEATED_FIXED64_EXTENSION: RepeatedExtension<u64> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 38);
    pub const REPEATED_SFIXED32_EXTENSION: RepeatedExtension<i32> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 39);
    pub const REPEATED_SFIXED64_EXTENSION: RepeatedExtension<i64> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 40);
    pub const REPEATED_FLOAT_EXTENSION: RepeatedExtension<f32> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 41);
    pub const REPEATED_DOUBLE_EXTENSION: RepeatedExtension<f64> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 42);
    pub const REPEATED_BOOL_EXTENSION: RepeatedExtension<bool> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 43);
    pub const REPEATED_STRING_EXTENSION: RepeatedExtension<String> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 44);
    pub const REPEATED_BYTES_EXTENSION: RepeatedExtension<Vec<u8>> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 45);
    pub const REPEATEDGROUP_EXTENSION: RepeatedExtension<DynamicMessage> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 46);
    pub const REPEATED_NESTED_MESSAGE_EXTENSION: RepeatedExtension<DynamicMessage> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 48);
    pub const REPEATED_FOREIGN_MESSAGE_EXTENSION: RepeatedExtension<DynamicMessage> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 49);
    pub const REPEATED_IMPORT_MESSAGE_EXTENSION: RepeatedExtension<DynamicMessage> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 50);
    pub const REPEATED_NESTED_ENUM_EXTENSION: RepeatedExtension<NestedEnum> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 51);
    pub const REPEATED_FOREIGN_ENUM_EXTENSION: RepeatedExtension<ForeignEnum> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 52);
    pub const REPEATED_IMPORT_ENUM_EXTENSION: RepeatedExtension<ImportEnum> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 53);
    pub const REPEATED_STRING_PIECE_EXTENSION: RepeatedExtension<String> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 54);
    pub const REPEATED_CORD_EXTENSION: RepeatedExtension<String> =
        RepeatedExtension::new(TEST_ALL_EXTENSIONS, 55);

    pub const DEFAULT_INT32_EXTENSION: Extension<i32> = Extension::new(TEST_ALL_EXTENSIONS, 61);
    pub const DEFAULT_INT64_EXTENSION: Extension<i64> = Extension::new(TEST_ALL_EXTENSIONS, 62);
    pub const DEFAULT_UINT32_EXTENSION: Extension<u32> = Extension::new(TEST_ALL_EXTENSIONS, 63);
    pub const DEFAULT_UINT64_EXTENSION: Extension<u64> = Extension::new(TEST_ALL_EXTENSIONS, 64);
    pub const DEFAULT_SINT32_EXTENSION: Extension<i32> = Extension::new(TEST_ALL_EXTENSIONS, 65);
    pub const DEFAULT_SINT64_EXTENSION: Extension<i64> = Extension::new(TEST_ALL_EXTENSIONS, 66);
    pub const DEFAULT_FIXED32_EXTENSION: Extension<u32> = Extension::new(TEST_ALL_EXTENSIONS, 67);
    pub const DEFAULT_FIXED64_EXTENSION: Extension<u64> = Extension::new(TEST_ALL_EXTENSIONS, 68);
    pub const DEFAULT_SFIXED32_EXTENSION: Extension<i32> = Extension::new(TEST_ALL_EXTENSIONS, 69);
    pub const DEFAULT_SFIXED64_EXTENSION: Extension<i64> = Extension::new(TEST_ALL_EXTENSIONS, 70);
    pub const DEFAULT_FLOAT_EXTENSION: Extension<f32> = Extension::new(TEST_ALL_EXTENSIONS, 71);
    pub const DEFAULT_DOUBLE_EXTENSION: Extension<f64> = Extension::new(TEST_ALL_EXTENSIONS, 72);
    pub const DEFAULT_BOOL_EXTENSION: Extension<bool> = Extension::new(TEST_ALL_EXTENSIONS, 73);
    pub const DEFAULT_STRING_EXTENSION: Extension<String> = Extension::new(TEST_ALL_EXTENSIONS, 74);
    pub const DEFAULT_BYTES_EXTENSION: Extension<Vec<u8>> = Extension::new(TEST_ALL_EXTENSIONS, 75);
    pub const DEFAULT_NESTED_ENUM_EXTENSION: Extension<NestedEnum> =
        Extension::new(TEST_ALL_EXTENSIONS, 81);
    pub const DEFAULT_FOREIGN_ENUM_EXTENSION: Extension<ForeignEnum> =
        Extension::new(TEST_ALL_EXTENSIONS, 82);
    pub const DEFAULT_IMPORT_ENUM_EXTENSION: Extension<ImportEnum> =
        Extension::new(TEST_ALL_EXTENSIONS, 83);
    pub const DEFAULT_STRING_PIECE_EXTENSION: Extension<String> =
        Extension::new(TEST_ALL_EXTENSIONS, 84);
    pub const DEFAULT_CORD_EXTENSION: Extension<String> = Extension::new(TEST_ALL_EXTENSIONS, 85);
}

pub mod optional_group_extension {
    use super::*;

    pub const A: Field<i32> = Field::new(OPTIONAL_GROUP_EXTENSION, 17);
}

pub mod repeated_group_extension {
    use super::*;

    pub const A: Field<i32> = Field::new(REPEATED_GROUP_EXTENSION, 47);
}

pub mod test_field_orderings {
    use super::*;

    pub const MY_INT: Field<i64> = Field::new(TEST_FIELD_ORDERINGS, 1);
    pub const MY_STRING: Field<String> = Field::new(TEST_FIELD_ORDERINGS, 11);
    pub const MY_FLOAT: Field<f32> = Field::new(TEST_FIELD_ORDERINGS, 101);
    pub const MY_EXTENSION_INT: Extension<i32> = Extension::new(TEST_FIELD_ORDERINGS, 5);
    pub const MY_EXTENSION_STRING: Extension<String> = Extension::new(TEST_FIELD_ORDERINGS, 50);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proto_runtime::Cardinality;

    #[test]
    fn extensions_mirror_inline_numbers_and_kinds() {
        let schema = schema().unwrap();
        let inline = schema.message(TEST_ALL_TYPES).unwrap();
        let extended: Vec<_> = schema.extensions_of(TEST_ALL_EXTENSIONS).collect();
        assert_eq!(inline.fields.len(), 68);
        assert_eq!(extended.len(), inline.fields.len());

        for (field, extension) in inline.fields.iter().zip(extended) {
            assert_eq!(extension.number, field.number);
            assert_eq!(extension.cardinality, field.cardinality);
            assert_eq!(extension.default, field.default);
            assert_eq!(extension.name, format!("{}_extension", field.name));
            if !matches!(field.kind, FieldKind::Group(_)) {
                assert_eq!(extension.kind, field.kind);
            }
        }
    }

    #[test]
    fn number_blocks_follow_the_classic_layout() {
        let schema = schema().unwrap();
        let message = schema.message(TEST_ALL_TYPES).unwrap();
        let repeated: Vec<u32> = message
            .fields
            .iter()
            .filter(|field| field.cardinality == Cardinality::Repeated)
            .map(|field| field.number)
            .collect();
        assert_eq!(repeated, (31..=46).chain(48..=55).collect::<Vec<_>>());
        assert!(message.field_by_number(17).is_none());
        assert!(message.field_by_number(47).is_none());

        let defaulted: Vec<u32> = message
            .fields
            .iter()
            .filter(|field| field.default.is_some())
            .map(|field| field.number)
            .collect();
        assert_eq!(defaulted, (61..=75).chain(81..=85).collect::<Vec<_>>());
        assert_eq!(message.field_by_name("optionalgroup").map(|field| field.number), Some(16));
    }

    #[test]
    fn handles_agree_with_the_descriptor_table() {
        let schema = schema().unwrap();
        let message = schema.message(TEST_ALL_TYPES).unwrap();
        let field = message.field_by_number(test_all_types::DEFAULT_STRING_PIECE.number()).unwrap();
        assert_eq!(field.name, "default_string_piece");
        assert_eq!(field.default, Some(Value::String("abc".into())));

        let extension = schema
            .extension(TEST_ALL_EXTENSIONS, extensions::REPEATEDGROUP_EXTENSION.number())
            .unwrap();
        assert_eq!(extension.kind, FieldKind::Group(REPEATED_GROUP_EXTENSION));
        assert_eq!(
            schema.field_numbers(TEST_FIELD_ORDERINGS),
            vec![
                test_field_orderings::MY_INT.number(),
                test_field_orderings::MY_EXTENSION_INT.number(),
                test_field_orderings::MY_STRING.number(),
                test_field_orderings::MY_EXTENSION_STRING.number(),
                test_field_orderings::MY_FLOAT.number(),
            ]
        );
    }

    #[test]
    fn enums_round_trip_through_numbers() {
        assert_eq!(NestedEnum::from_number(3), Some(NestedEnum::Baz));
        assert_eq!(ForeignEnum::ForeignBar.number(), 5);
        assert_eq!(ImportEnum::from_number(1), None);
        assert_eq!(EnumDescriptor::of::<ImportEnum>().value_by_name("IMPORT_BAZ"), Some(9));
    }
}
