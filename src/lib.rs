//! # Waveside
//!
//! Declarative sidebar widget schema and renderer dispatch for instrument
//! UIs (oscilloscope/waveform-viewer side panels).
//!
//! A panel ("widget") is a named, ordered collection of interchangeable
//! "blocks": each block carries a type tag and a payload whose shape is
//! fixed by that tag. New panel content is added as pure data; the host's
//! paint layer supplies a [`RendererRegistry`] mapping each block kind to a
//! renderer, and [`dispatch`] resolves every block in declared order.
//!
//! The actual paint/layout engine and the acquisition backend that supplies
//! live values are external collaborators; this crate is only the schema and
//! the dispatch contract.
//!
//! ## Quick Start
//!
//! ```rust
//! use waveside::prelude::*;
//!
//! let registry = RendererRegistry::new()
//!     .display_value(|p| format!("{}  {}", p.left_value, p.right_value))
//!     .adjust_channel(|p| format!("CH{}", p.channel))
//!     .adjust_value(|p| format!("{} {}", p.value, p.unit));
//!
//! let outcome = dispatch(&presets::measurements(), &registry);
//! assert!(outcome.is_complete());
//! ```
//!
//! ## Interchange format
//!
//! Widgets cross the crate boundary as the verbatim literal
//! `{ "title": string, "blocks": [{ "blockType": string, "data": object }] }`
//! ([`RawWidget`]); [`Widget::from_raw`] validates payload shapes eagerly at
//! construction, so a malformed block fails before it ever reaches a
//! renderer.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Block types and payloads.
pub mod block;

/// Widget schema and interchange form.
pub mod widget;

// ============================================================================
// Dispatch Modules
// ============================================================================

/// Renderer registry (the `BlockType` → renderer mapping).
pub mod registry;

/// Rendering dispatch.
pub mod dispatch;

/// Stock sidebar widgets.
pub mod presets;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for waveside operations.
pub mod error;

pub use block::{AdjustChannel, AdjustValue, Block, BlockType, DisplayValue, RawBlock};
pub use dispatch::{dispatch, DispatchOutcome};
pub use error::{Error, Result};
pub use registry::RendererRegistry;
pub use widget::{RawWidget, Widget};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use waveside::prelude::*;
/// ```
pub mod prelude {
    pub use crate::block::{AdjustChannel, AdjustValue, Block, BlockType, DisplayValue, RawBlock};
    pub use crate::dispatch::{dispatch, DispatchOutcome};
    pub use crate::error::{Error, Result};
    pub use crate::presets;
    pub use crate::registry::RendererRegistry;
    pub use crate::widget::{RawWidget, Widget};
}
