//! Renderer registry: the `BlockType` → renderer mapping consumed by dispatch.
//!
//! The registry is an explicit value passed into [`crate::dispatch`] rather
//! than ambient global state, keeping dispatch pure and independently
//! testable. One slot per recognized block kind; a slot left empty makes
//! every block of that kind fail dispatch with
//! [`crate::Error::UnknownBlockType`].

use std::fmt;

use crate::block::{AdjustChannel, AdjustValue, Block, BlockType, DisplayValue};

type BoxedRenderer<P, R> = Box<dyn Fn(&P) -> R + Send + Sync>;

/// Mapping from each [`BlockType`] to a renderer producing `R`.
///
/// Registration is builder-style; registering a kind twice replaces the
/// previous renderer. Renderers are `Send + Sync`, so a built registry can
/// be shared read-only across panel threads. The registry must be treated as
/// read-only once dispatching begins.
pub struct RendererRegistry<R> {
    display_value: Option<BoxedRenderer<DisplayValue, R>>,
    adjust_channel: Option<BoxedRenderer<AdjustChannel, R>>,
    adjust_value: Option<BoxedRenderer<AdjustValue, R>>,
}

impl<R> RendererRegistry<R> {
    /// Creates an empty registry with no renderers registered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display_value: None,
            adjust_channel: None,
            adjust_value: None,
        }
    }

    /// Registers the renderer for [`BlockType::DisplayValue`] blocks.
    #[must_use]
    pub fn display_value(mut self, f: impl Fn(&DisplayValue) -> R + Send + Sync + 'static) -> Self {
        self.display_value = Some(Box::new(f));
        self
    }

    /// Registers the renderer for [`BlockType::AdjustChannel`] blocks.
    #[must_use]
    pub fn adjust_channel(
        mut self,
        f: impl Fn(&AdjustChannel) -> R + Send + Sync + 'static,
    ) -> Self {
        self.adjust_channel = Some(Box::new(f));
        self
    }

    /// Registers the renderer for [`BlockType::AdjustValue`] blocks.
    #[must_use]
    pub fn adjust_value(mut self, f: impl Fn(&AdjustValue) -> R + Send + Sync + 'static) -> Self {
        self.adjust_value = Some(Box::new(f));
        self
    }

    /// Returns `true` if a renderer is registered for the given kind.
    #[must_use]
    pub fn is_registered(&self, block_type: BlockType) -> bool {
        match block_type {
            BlockType::DisplayValue => self.display_value.is_some(),
            BlockType::AdjustChannel => self.adjust_channel.is_some(),
            BlockType::AdjustValue => self.adjust_value.is_some(),
        }
    }

    /// Returns every kind with a registered renderer.
    #[must_use]
    pub fn registered_types(&self) -> Vec<BlockType> {
        BlockType::ALL
            .into_iter()
            .filter(|t| self.is_registered(*t))
            .collect()
    }

    /// Renders one block, or `None` when no renderer covers its tag
    /// (an unregistered kind, or a tag outside the enumeration).
    pub(crate) fn render(&self, block: &Block) -> Option<R> {
        match block {
            Block::DisplayValue(p) => self.display_value.as_ref().map(|f| f(p)),
            Block::AdjustChannel(p) => self.adjust_channel.as_ref().map(|f| f(p)),
            Block::AdjustValue(p) => self.adjust_value.as_ref().map(|f| f(p)),
            Block::Unknown { .. } => None,
        }
    }
}

impl<R> Default for RendererRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for RendererRegistry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("registered", &self.registered_types())
            .finish()
    }
}
