//! # proto-runtime
//!
//! A small descriptor-driven proto2 message runtime.
//!
//! Message types are declared as an explicit [`Schema`] value: a table of
//! [`MessageDescriptor`]s, [`EnumDescriptor`]s and extensions registered
//! against extendable types. Fields are addressed through typed handles
//! ([`Field`], [`RepeatedField`], [`Extension`], [`RepeatedExtension`]) that
//! carry the owning type and field number, so a value of the wrong type or a
//! handle for the wrong message is rejected instead of silently stored.
//!
//! [`DynamicMessage::encode_to_vec`] writes the canonical serialization: every
//! set field in ascending field-number order, inline fields and extensions
//! interleaved, repeated entries in append order. The primitives themselves
//! (varints, zigzag, fixed-width, length prefixes) come from
//! [`prost::encoding`].
//!
//! ## Example
//!
//! ```rust
//! use proto_runtime::{
//!     DynamicMessage, Field, FieldDescriptor, FieldKind, MessageDescriptor, SchemaBuilder,
//! };
//!
//! const POINT: &str = "example.Point";
//! const X: Field<i32> = Field::new(POINT, 1);
//!
//! let mut builder = SchemaBuilder::new();
//! builder
//!     .add_message(
//!         MessageDescriptor::new(POINT)
//!             .field(FieldDescriptor::optional("x", 1, FieldKind::Int32)),
//!     )
//!     .unwrap();
//! let schema = builder.build().unwrap();
//!
//! let mut point = DynamicMessage::new(&schema, POINT).unwrap();
//! point.set(&X, 150).unwrap();
//! assert_eq!(point.encode_to_vec(), vec![0x08, 0x96, 0x01]);
//! ```

mod error;
mod extension;
mod handle;
mod message;
mod schema;
mod value;
mod wire;

pub use error::{AccessError, SchemaError};
pub use extension::{ExtensionMap, Extensions};
pub use handle::{Extension, Field, RepeatedExtension, RepeatedField};
pub use message::{DynamicMessage, FieldOrigin, Slot};
pub use schema::{
    Cardinality, EnumDescriptor, FieldDescriptor, FieldKind, MessageDescriptor, Schema,
    SchemaBuilder, StringRepr, MAX_FIELD_NUMBER,
};
pub use value::{enum_from_value, FieldType, ProtoEnum, Value};
