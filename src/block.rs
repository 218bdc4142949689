//! Block types and payloads: the entries a sidebar widget is composed of.
//!
//! A [`Block`] is one row of a panel: a type tag plus a payload whose shape
//! is fixed by that tag. The tag set ([`BlockType`]) is closed and versioned
//! with the renderer; tags arriving from outside the binary that are not in
//! the set are preserved as [`Block::Unknown`] and rejected at dispatch, not
//! at construction.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{Error, Result};

/// The closed set of recognized block kinds.
///
/// Variant order carries no display meaning; display order is the block
/// order inside a [`crate::Widget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// A read-only label/value pair (e.g. a cursor measurement readout).
    DisplayValue,
    /// A hardware channel selector.
    AdjustChannel,
    /// A numeric value adjuster with a unit, optionally per-division.
    AdjustValue,
}

impl BlockType {
    /// Every recognized tag.
    pub const ALL: [Self; 3] = [Self::DisplayValue, Self::AdjustChannel, Self::AdjustValue];

    /// Returns the stable wire tag for this block kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DisplayValue => "DisplayValue",
            Self::AdjustChannel => "AdjustChannel",
            Self::AdjustValue => "AdjustValue",
        }
    }

    /// Parses a wire tag. Comparison is exact and case-sensitive; anything
    /// outside [`BlockType::ALL`] returns `None`, never a coerced tag.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "DisplayValue" => Some(Self::DisplayValue),
            "AdjustChannel" => Some(Self::AdjustChannel),
            "AdjustValue" => Some(Self::AdjustValue),
            _ => None,
        }
    }

    /// Human-readable description of the payload shape this tag requires,
    /// used in [`Error::SchemaMismatch`] messages.
    #[must_use]
    pub const fn expected_shape(self) -> &'static str {
        match self {
            Self::DisplayValue => "{ leftValue: string, rightValue: string }",
            Self::AdjustChannel => "{ channel: positive integer }",
            Self::AdjustValue => "{ value: number, unit: string, showPerDiv: bool }",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload for [`BlockType::DisplayValue`]: a pre-formatted label/value pair.
///
/// Both sides are display strings, not raw numerics; the schema never parses
/// units or magnitudes out of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DisplayValue {
    /// Left-hand label (e.g. `"X1->X2"`).
    pub left_value: String,
    /// Right-hand formatted measurement (e.g. `"500ns"`).
    pub right_value: String,
}

impl DisplayValue {
    /// Creates a display-value payload.
    #[must_use]
    pub fn new(left_value: impl Into<String>, right_value: impl Into<String>) -> Self {
        Self {
            left_value: left_value.into(),
            right_value: right_value.into(),
        }
    }
}

/// Payload for [`BlockType::AdjustChannel`]: selects a hardware channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdjustChannel {
    /// Hardware channel number, 1-based. Zero is a schema violation on the
    /// interchange path.
    pub channel: u32,
}

impl AdjustChannel {
    /// Creates a channel-adjust payload.
    #[must_use]
    pub const fn new(channel: u32) -> Self {
        Self { channel }
    }
}

/// Payload for [`BlockType::AdjustValue`]: a numeric magnitude with a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AdjustValue {
    /// Numeric magnitude.
    pub value: f64,
    /// Unit label (e.g. `"V"`, `"mV"`).
    pub unit: String,
    /// Whether the control is labeled as a "per division" scale factor.
    pub show_per_div: bool,
}

impl AdjustValue {
    /// Creates a value-adjust payload.
    #[must_use]
    pub fn new(value: f64, unit: impl Into<String>, show_per_div: bool) -> Self {
        Self {
            value,
            unit: unit.into(),
            show_per_div,
        }
    }
}

/// One entry of the widget literal interchange format, exactly as it appears
/// on the wire: `{ "blockType": string, "data": object }`.
///
/// Field names are part of the interchange contract. Convert to the validated
/// form with [`Block::from_raw`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlock {
    /// The type tag, as written by the widget author.
    pub block_type: String,
    /// Opaque payload; its shape is determined by `block_type`.
    pub data: Value,
}

/// A validated block: one entry in a widget.
///
/// The tag and payload are merged into a sum type, so a recognized block
/// cannot carry a payload of the wrong shape. [`Block::Unknown`] is the
/// explicit arm for tags outside [`BlockType::ALL`], kept verbatim so the
/// dispatcher can report them with full fidelity.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A read-only label/value readout.
    DisplayValue(DisplayValue),
    /// A hardware channel selector.
    AdjustChannel(AdjustChannel),
    /// A numeric value adjuster.
    AdjustValue(AdjustValue),
    /// A block whose tag is not in the recognized set. Only constructible
    /// from external data; surfaces as [`Error::UnknownBlockType`] at
    /// dispatch.
    Unknown {
        /// The unrecognized tag, verbatim.
        tag: String,
        /// The raw payload, verbatim.
        data: Value,
    },
}

impl Block {
    /// Returns the recognized block kind, or `None` for [`Block::Unknown`].
    #[must_use]
    pub const fn block_type(&self) -> Option<BlockType> {
        match self {
            Self::DisplayValue(_) => Some(BlockType::DisplayValue),
            Self::AdjustChannel(_) => Some(BlockType::AdjustChannel),
            Self::AdjustValue(_) => Some(BlockType::AdjustValue),
            Self::Unknown { .. } => None,
        }
    }

    /// Returns the wire tag for this block.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::DisplayValue(_) => BlockType::DisplayValue.as_str(),
            Self::AdjustChannel(_) => BlockType::AdjustChannel.as_str(),
            Self::AdjustValue(_) => BlockType::AdjustValue.as_str(),
            Self::Unknown { tag, .. } => tag,
        }
    }

    /// Validates a raw interchange block into its typed form.
    ///
    /// `index` is the block's position within its widget; it is carried into
    /// any error so callers can locate the offending entry. Unrecognized tags
    /// are not an error here: they become [`Block::Unknown`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaMismatch`] when the payload is missing a field,
    /// carries an extra field, mistypes a field, or violates the
    /// positive-channel rule.
    pub fn from_raw(raw: RawBlock, index: usize) -> Result<Self> {
        let Some(block_type) = BlockType::parse(&raw.block_type) else {
            return Ok(Self::Unknown {
                tag: raw.block_type,
                data: raw.data,
            });
        };

        match block_type {
            BlockType::DisplayValue => {
                let payload: DisplayValue = serde_json::from_value(raw.data)
                    .map_err(|e| Error::schema_mismatch(index, block_type, e.to_string()))?;
                Ok(Self::DisplayValue(payload))
            }
            BlockType::AdjustChannel => {
                let payload: AdjustChannel = serde_json::from_value(raw.data)
                    .map_err(|e| Error::schema_mismatch(index, block_type, e.to_string()))?;
                if payload.channel == 0 {
                    return Err(Error::schema_mismatch(
                        index,
                        block_type,
                        "channel must be a positive integer",
                    ));
                }
                Ok(Self::AdjustChannel(payload))
            }
            BlockType::AdjustValue => {
                let payload: AdjustValue = serde_json::from_value(raw.data)
                    .map_err(|e| Error::schema_mismatch(index, block_type, e.to_string()))?;
                Ok(Self::AdjustValue(payload))
            }
        }
    }

    /// Converts back to the interchange form. Infallible and, for blocks
    /// built from well-formed raw data, the exact inverse of
    /// [`Block::from_raw`].
    #[must_use]
    pub fn to_raw(&self) -> RawBlock {
        let (block_type, data) = match self {
            Self::DisplayValue(p) => (
                BlockType::DisplayValue.as_str().to_string(),
                json!({ "leftValue": p.left_value, "rightValue": p.right_value }),
            ),
            Self::AdjustChannel(p) => (
                BlockType::AdjustChannel.as_str().to_string(),
                json!({ "channel": p.channel }),
            ),
            Self::AdjustValue(p) => (
                BlockType::AdjustValue.as_str().to_string(),
                json!({ "value": p.value, "unit": p.unit, "showPerDiv": p.show_per_div }),
            ),
            Self::Unknown { tag, data } => (tag.clone(), data.clone()),
        };
        RawBlock { block_type, data }
    }
}

impl From<DisplayValue> for Block {
    fn from(payload: DisplayValue) -> Self {
        Self::DisplayValue(payload)
    }
}

impl From<AdjustChannel> for Block {
    fn from(payload: AdjustChannel) -> Self {
        Self::AdjustChannel(payload)
    }
}

impl From<AdjustValue> for Block {
    fn from(payload: AdjustValue) -> Self {
        Self::AdjustValue(payload)
    }
}
