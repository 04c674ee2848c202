/// Errors raised while assembling a [`Schema`](crate::Schema).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    #[error("message type {0} declared twice")]
    DuplicateMessage(&'static str),

    #[error("enum type {0} declared twice")]
    DuplicateEnum(&'static str),

    #[error("{message}: field number {number} declared twice")]
    DuplicateField { message: &'static str, number: u32 },

    #[error("{message}: field number {number} is outside 1..={max}", max = crate::MAX_FIELD_NUMBER)]
    InvalidFieldNumber { message: &'static str, number: u32 },

    #[error("{message}.{field}: references unknown type {target}")]
    UnknownType { message: &'static str, field: String, target: &'static str },

    #[error("{message}.{field}: default value does not fit the field kind")]
    InvalidDefault { message: &'static str, field: String },

    #[error("cannot extend unknown message type {0}")]
    UnknownExtendee(&'static str),

    #[error("{0} declares no extension ranges")]
    NotExtendable(&'static str),

    #[error("{extendee}: extension number {number} is outside the declared extension ranges")]
    ExtensionOutOfRange { extendee: &'static str, number: u32 },

    #[error("{extendee}: extension number {number} is already used by {existing}")]
    ExtensionConflict { extendee: &'static str, number: u32, existing: String },
}

/// Errors raised when a field or extension is accessed in a way the schema
/// does not allow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum AccessError {
    #[error("unknown message type {0}")]
    UnknownMessage(String),

    #[error("{message} has no field number {number}")]
    UnknownField { message: &'static str, number: u32 },

    #[error("{extendee} has no extension number {number}")]
    UnknownExtension { extendee: &'static str, number: u32 },

    #[error("handle belongs to {expected}, message is {actual}")]
    WrongOwner { expected: &'static str, actual: &'static str },

    #[error("{message}.{field}: wrong cardinality for this operation")]
    WrongCardinality { message: &'static str, field: String },

    #[error("{message}.{field}: value does not fit field kind {expected}")]
    KindMismatch { message: &'static str, field: String, expected: String },

    #[error("{enum_name} has no value {value}")]
    UnknownEnumValue { enum_name: &'static str, value: i32 },

    #[error("{field}: index {index} out of range for length {len}")]
    IndexOutOfRange { field: String, index: usize, len: usize },
}
