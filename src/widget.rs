//! Widget schema: a named, ordered panel of blocks.
//!
//! A [`Widget`] is the unit handed to the renderer. It is immutable once
//! constructed; block order is display order and is preserved exactly,
//! never reordered or deduplicated.

use serde::{Deserialize, Serialize};

use crate::block::{Block, RawBlock};
use crate::error::{Error, Result};

/// The widget literal interchange format, exactly as it appears on the wire:
/// `{ "title": string, "blocks": [{ "blockType": string, "data": object }] }`.
///
/// This is the shape a panel host or persistence layer produces or consumes
/// verbatim; field names and nesting are part of the contract. Convert to
/// the validated form with [`Widget::from_raw`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWidget {
    /// Panel title.
    pub title: String,
    /// Block entries, in display order.
    pub blocks: Vec<RawBlock>,
}

/// A named, ordered panel composed of [`Block`]s.
///
/// Fields are private: a widget is read-only after construction, so it can
/// be shared freely across panel threads. Construction is pure and
/// idempotent (same inputs produce an equal value).
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    title: String,
    blocks: Vec<Block>,
}

impl Widget {
    /// Creates a widget from a title and its blocks, in display order.
    #[must_use]
    pub fn new(title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            title: title.into(),
            blocks,
        }
    }

    /// Returns the panel title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the blocks in display order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns the number of blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` if the widget has no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Validates a raw interchange widget into its typed form.
    ///
    /// Validation is eager: every block's payload is checked against its
    /// tag's shape here, converting render-time failures into
    /// construction-time errors. Unrecognized tags are kept as
    /// [`Block::Unknown`] for the dispatcher to report.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaMismatch`] naming the first offending block's
    /// index and the expected shape for its tag.
    pub fn from_raw(raw: RawWidget) -> Result<Self> {
        let blocks = raw
            .blocks
            .into_iter()
            .enumerate()
            .map(|(index, block)| Block::from_raw(block, index))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            title: raw.title,
            blocks,
        })
    }

    /// Parses a widget literal from its JSON interchange form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed JSON or a literal that does not
    /// have the `{ title, blocks }` shape, and [`Error::SchemaMismatch`] for
    /// a well-formed literal with an invalid block payload.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawWidget = serde_json::from_str(json).map_err(|e| Error::Parse(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Converts back to the interchange form. Infallible; for widgets built
    /// from well-formed raw data this is the exact inverse of
    /// [`Widget::from_raw`].
    #[must_use]
    pub fn to_raw(&self) -> RawWidget {
        RawWidget {
            title: self.title.clone(),
            blocks: self.blocks.iter().map(Block::to_raw).collect(),
        }
    }
}
