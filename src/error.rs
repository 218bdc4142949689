//! Error types for waveside operations.
//!
//! Every variant carries enough context to locate the failing block: the
//! block's position within its widget and the tag or shape involved. One bad
//! block never poisons its neighbours; errors are scoped to a single block.

use thiserror::Error;

use crate::block::BlockType;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in waveside operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A block's payload does not match the shape required by its type tag.
    ///
    /// Detected eagerly at construction ([`crate::Widget::from_raw`]), never
    /// at render time.
    #[error("block {index}: payload does not match '{block_type}' shape {expected}: {message}")]
    SchemaMismatch {
        /// Position of the offending block within its widget (0-indexed).
        index: usize,
        /// The type tag whose shape the payload failed to match.
        block_type: BlockType,
        /// Human-readable description of the expected payload shape.
        expected: &'static str,
        /// What was wrong with the payload.
        message: String,
    },

    /// A block's type tag has no registered renderer.
    ///
    /// Always detected at dispatch, never earlier: the registry can be
    /// extended after widgets are declared, so an unrecognized tag is not a
    /// construction error.
    #[error("block {index}: no renderer registered for '{tag}'")]
    UnknownBlockType {
        /// The unrecognized or unregistered type tag.
        tag: String,
        /// Position of the offending block within its widget (0-indexed).
        index: usize,
    },

    /// Malformed widget literal (not valid JSON, or not the
    /// `{ title, blocks }` interchange shape).
    #[error("widget literal parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Builds a [`Error::SchemaMismatch`] for the given block, filling the
    /// expected-shape description from the tag.
    #[must_use]
    pub(crate) fn schema_mismatch(
        index: usize,
        block_type: BlockType,
        message: impl Into<String>,
    ) -> Self {
        Self::SchemaMismatch {
            index,
            block_type,
            expected: block_type.expected_shape(),
            message: message.into(),
        }
    }
}
