use std::path::PathBuf;

use proto_runtime::AccessError;

/// Failures raised while building or checking fixtures.
///
/// Every variant aborts the current test case; nothing here is retried.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FixtureError {
    /// A handle or entry does not belong to the message's type.
    #[error("schema mismatch: {0}")]
    SchemaMismatch(#[from] AccessError),

    #[error("{field}: expected {expected}, got {actual}")]
    ValueMismatch { field: String, expected: String, actual: String },

    #[error(
        "canonical order mismatch: expected {}, got {}",
        hex::encode(.expected),
        hex::encode(.actual)
    )]
    OrderingMismatch { expected: Vec<u8>, actual: Vec<u8> },

    #[error(
        "{} differs from candidate ({} golden bytes, {} candidate bytes)",
        .path.display(),
        .expected.len(),
        .actual.len()
    )]
    GoldenMismatch { path: PathBuf, expected: Vec<u8>, actual: Vec<u8> },

    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid golden config: {0}")]
    Config(#[from] toml::de::Error),
}

impl FixtureError {
    pub(crate) fn value_mismatch(
        field: impl Into<String>,
        expected: impl std::fmt::Debug,
        actual: impl std::fmt::Debug,
    ) -> Self {
        Self::ValueMismatch {
            field: field.into(),
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        }
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound { message: message.into() }
    }
}
