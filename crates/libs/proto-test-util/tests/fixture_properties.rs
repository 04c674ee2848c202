use std::sync::Once;

use proto_runtime::{DynamicMessage, FieldOrigin, Schema};
use proto_test_util::unittest::{
    self, extensions, test_all_types, NestedEnum, TEST_ALL_EXTENSIONS, TEST_ALL_TYPES,
    TEST_FIELD_ORDERINGS,
};
use proto_test_util::{
    expect_all_extensions_set, expect_all_fields_and_extensions_in_order, expect_all_fields_set,
    expect_clear, expect_extensions_clear, expect_repeated_fields_modified, modify_repeated_fields,
    set_all_extensions, set_all_fields, set_all_fields_and_extensions, FixtureError,
};

static INIT: Once = Once::new();

fn setup() -> Schema {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .is_test(true)
            .try_init();
    });
    unittest::schema().expect("unit-test schema")
}

fn all_types(schema: &Schema) -> DynamicMessage {
    let mut message = DynamicMessage::new(schema, TEST_ALL_TYPES).expect("TestAllTypes");
    set_all_fields(&mut message).expect("set_all_fields");
    message
}

fn all_extensions(schema: &Schema) -> DynamicMessage {
    let mut message = DynamicMessage::new(schema, TEST_ALL_EXTENSIONS).expect("TestAllExtensions");
    set_all_extensions(&mut message).expect("set_all_extensions");
    message
}

#[test]
fn every_declared_field_is_set() {
    let schema = setup();
    let message = all_types(&schema);
    expect_all_fields_set(&message).expect("all fields");

    let declared = schema.field_numbers(TEST_ALL_TYPES);
    let present: Vec<u32> =
        message.present_fields().into_iter().map(|(number, _)| number).collect();
    assert_eq!(present, declared);
    // 24 optional, 24 repeated, 20 defaulted; 17 and 47 live on the group types.
    assert_eq!(present.len(), 68);
}

#[test]
fn literals_follow_the_numbering_scheme() {
    let schema = setup();
    let message = all_types(&schema);

    assert_eq!(message.get(&test_all_types::OPTIONAL_INT32).expect("int32"), 101);
    assert_eq!(message.repeated(&test_all_types::REPEATED_INT32).expect("int32s"), vec![201, 301]);
    assert_eq!(message.get(&test_all_types::DEFAULT_FIXED64).expect("fixed64"), 408);
    assert_eq!(
        message.repeated(&test_all_types::REPEATED_NESTED_ENUM).expect("enums"),
        vec![NestedEnum::Bar, NestedEnum::Baz]
    );
    assert_eq!(message.get(&test_all_types::OPTIONAL_CORD).expect("cord"), "125");
    for handle in [test_all_types::REPEATED_STRING, test_all_types::REPEATED_STRING_PIECE] {
        assert_eq!(message.repeated_len(&handle), 2);
    }
}

#[test]
fn inline_and_extension_fixtures_serialize_identically() {
    let schema = setup();
    let inline = all_types(&schema);
    let extended = all_extensions(&schema);
    expect_all_extensions_set(&extended).expect("all extensions");

    let inline_blocks: Vec<(u32, Vec<u8>)> =
        inline.field_blocks().into_iter().map(|(number, _, bytes)| (number, bytes)).collect();
    let extension_blocks: Vec<(u32, Vec<u8>)> =
        extended.field_blocks().into_iter().map(|(number, _, bytes)| (number, bytes)).collect();
    assert_eq!(inline_blocks, extension_blocks);
    assert_eq!(inline.encode_to_vec(), extended.encode_to_vec());
    assert!(extended
        .present_fields()
        .iter()
        .all(|(_, origin)| *origin == FieldOrigin::Extension));
}

#[test]
fn clear_then_rebuild_is_byte_identical() {
    let schema = setup();
    let mut message = all_types(&schema);
    let first = message.encode_to_vec();

    message.clear();
    expect_clear(&message).expect("cleared");
    assert!(message.encode_to_vec().is_empty());

    set_all_fields(&mut message).expect("rebuild");
    assert_eq!(message.encode_to_vec(), first);

    let mut extended = all_extensions(&schema);
    let first = extended.encode_to_vec();
    extended.clear();
    expect_extensions_clear(&extended).expect("extensions cleared");
    set_all_extensions(&mut extended).expect("rebuild extensions");
    assert_eq!(extended.encode_to_vec(), first);
}

#[test]
fn modification_touches_only_the_second_entry() {
    let schema = setup();
    let mut message = all_types(&schema);
    modify_repeated_fields(&mut message).expect("modify");
    expect_repeated_fields_modified(&message).expect("modified");

    assert_eq!(message.repeated(&test_all_types::REPEATED_INT64).expect("int64s"), vec![202, 502]);
    assert_eq!(message.get(&test_all_types::OPTIONAL_INT64).expect("int64"), 102);
    assert!(matches!(expect_all_fields_set(&message), Err(FixtureError::ValueMismatch { .. })));
}

#[test]
fn mixed_fixture_is_in_canonical_order() {
    let schema = setup();
    let mut message = DynamicMessage::new(&schema, TEST_FIELD_ORDERINGS).expect("orderings");
    set_all_fields_and_extensions(&mut message).expect("mixed fixture");

    let numbers: Vec<u32> =
        message.field_blocks().into_iter().map(|(number, _, _)| number).collect();
    assert_eq!(numbers, vec![1, 5, 11, 50, 101]);
    expect_all_fields_and_extensions_in_order(&schema, &message.encode_to_vec())
        .expect("canonical order");
}

#[test]
fn fixtures_reject_the_wrong_message_type() {
    let schema = setup();
    let mut extendable = DynamicMessage::new(&schema, TEST_ALL_EXTENSIONS).expect("extendable");
    assert!(matches!(set_all_fields(&mut extendable), Err(FixtureError::SchemaMismatch(_))));
    assert!(extendable.is_empty());

    let mut plain = DynamicMessage::new(&schema, TEST_ALL_TYPES).expect("plain");
    assert!(matches!(set_all_extensions(&mut plain), Err(FixtureError::SchemaMismatch(_))));
    assert!(matches!(
        set_all_fields_and_extensions(&mut plain),
        Err(FixtureError::SchemaMismatch(_))
    ));

    let stray = plain.extensions_mut().set(&extensions::OPTIONAL_INT32_EXTENSION, 1);
    assert!(stray.is_err());
}
