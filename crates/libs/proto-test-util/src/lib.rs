//! # proto-test-util
//!
//! Fixtures and checks for the proto2 unit-test schema.
//!
//! - [`unittest`] declares `TestAllTypes`, `TestAllExtensions`,
//!   `TestFieldOrderings` and their supporting types as a
//!   [`proto_runtime::Schema`], plus typed handles for every field.
//! - [`fixtures`] and [`extensions`] populate every field (or extension) with
//!   a distinct literal and check the result.
//! - [`ordering`] recomputes canonical serialized bytes field by field and
//!   compares them with a candidate.
//! - [`golden`] finds reference files by walking up to the source root.
//!
//! ## Example
//!
//! ```rust
//! use proto_runtime::DynamicMessage;
//! use proto_test_util::{set_all_fields, set_all_extensions, unittest};
//!
//! let schema = unittest::schema().unwrap();
//! let mut fields = DynamicMessage::new(&schema, unittest::TEST_ALL_TYPES).unwrap();
//! let mut extended = DynamicMessage::new(&schema, unittest::TEST_ALL_EXTENSIONS).unwrap();
//! set_all_fields(&mut fields).unwrap();
//! set_all_extensions(&mut extended).unwrap();
//! assert_eq!(fields.encode_to_vec(), extended.encode_to_vec());
//! ```

mod config;
mod error;
pub mod extensions;
pub mod fixtures;
pub mod golden;
pub mod ordering;
pub mod unittest;

pub use config::GoldenConfig;
pub use error::FixtureError;
pub use extensions::{
    expect_all_extensions_set, expect_extensions_clear, expect_repeated_extensions_modified,
    modify_repeated_extensions, set_all_extensions, set_all_fields_and_extensions,
};
pub use fixtures::{
    expect_all_fields_set, expect_clear, expect_repeated_fields_modified, modify_repeated_fields,
    set_all_fields,
};
pub use golden::{golden_file, GoldenFileLocator};
pub use ordering::{
    expect_all_fields_and_extensions_in_order, field_orderings_expectation,
    CanonicalOrderVerifier, ExpectedField,
};
