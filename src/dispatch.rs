//! Rendering dispatch: resolve each block of a widget to its renderer.
//!
//! Dispatch is a pure, synchronous, stateless mapping per call: no caching,
//! no shared mutable state. Errors are isolated per block — one bad block
//! never prevents the rest of the widget from rendering.

use crate::error::{Error, Result};
use crate::registry::RendererRegistry;
use crate::widget::Widget;

/// The per-block results of dispatching one widget.
///
/// There is exactly one slot per input block, in declared order, always:
/// a failed block keeps its slot as an error placeholder rather than being
/// omitted, so positions never shift under partial failure.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome<R> {
    slots: Vec<Result<R>>,
}

impl<R> DispatchOutcome<R> {
    /// Returns the per-block slots in declared block order.
    #[must_use]
    pub fn slots(&self) -> &[Result<R>] {
        &self.slots
    }

    /// Consumes the outcome, yielding the per-block slots.
    #[must_use]
    pub fn into_slots(self) -> Vec<Result<R>> {
        self.slots
    }

    /// Successfully rendered elements, in declared order.
    pub fn rendered(&self) -> impl Iterator<Item = &R> + '_ {
        self.slots.iter().filter_map(|slot| slot.as_ref().ok())
    }

    /// Per-block errors, in declared order.
    pub fn errors(&self) -> impl Iterator<Item = &Error> + '_ {
        self.slots.iter().filter_map(|slot| slot.as_ref().err())
    }

    /// Number of slots; always equal to the input widget's block count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the dispatched widget had no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if every block rendered successfully.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Result::is_ok)
    }
}

/// Dispatches a widget: for each block in declared order, looks up the
/// renderer for its tag in `registry` and invokes it with the block's
/// payload.
///
/// A block whose tag has no registered renderer — a recognized kind with an
/// empty slot, or a tag outside the enumeration entirely — yields
/// [`Error::UnknownBlockType`] carrying the tag and the block's position.
/// The dispatcher never guesses a default rendering, and never drops or
/// reorders slots: `dispatch(w, r).len() == w.len()` unconditionally.
pub fn dispatch<R>(widget: &Widget, registry: &RendererRegistry<R>) -> DispatchOutcome<R> {
    let slots = widget
        .blocks()
        .iter()
        .enumerate()
        .map(|(index, block)| {
            registry.render(block).ok_or_else(|| Error::UnknownBlockType {
                tag: block.tag().to_string(),
                index,
            })
        })
        .collect();

    DispatchOutcome { slots }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{AdjustChannel, AdjustValue, Block, DisplayValue};
    use serde_json::json;

    fn tagging_registry() -> RendererRegistry<String> {
        RendererRegistry::new()
            .display_value(|p| format!("display:{}={}", p.left_value, p.right_value))
            .adjust_channel(|p| format!("channel:{}", p.channel))
            .adjust_value(|p| format!("value:{}{}", p.value, p.unit))
    }

    #[test]
    fn test_one_slot_per_block_in_order() {
        let widget = Widget::new(
            "Vertical",
            vec![
                AdjustChannel::new(1).into(),
                AdjustValue::new(1.0, "V", true).into(),
                AdjustValue::new(0.0, "mV", false).into(),
            ],
        );

        let outcome = dispatch(&widget, &tagging_registry());

        assert_eq!(outcome.len(), widget.len());
        assert!(outcome.is_complete());
        let rendered: Vec<_> = outcome.rendered().cloned().collect();
        assert_eq!(rendered, vec!["channel:1", "value:1V", "value:0mV"]);
    }

    #[test]
    fn test_unregistered_kind_fails_at_its_position() {
        let registry: RendererRegistry<String> =
            RendererRegistry::new().display_value(|p| p.left_value.clone());
        let widget = Widget::new(
            "Mixed",
            vec![
                DisplayValue::new("a", "b").into(),
                AdjustChannel::new(1).into(),
            ],
        );

        let outcome = dispatch(&widget, &registry);

        assert_eq!(outcome.len(), 2);
        assert!(outcome.slots()[0].is_ok());
        assert_eq!(
            outcome.slots()[1],
            Err(Error::UnknownBlockType {
                tag: "AdjustChannel".to_string(),
                index: 1,
            })
        );
    }

    #[test]
    fn test_unknown_tag_is_isolated() {
        let widget = Widget::new(
            "Mixed",
            vec![
                DisplayValue::new("a", "b").into(),
                Block::Unknown {
                    tag: "Nonexistent".to_string(),
                    data: json!({}),
                },
                AdjustChannel::new(3).into(),
            ],
        );

        let outcome = dispatch(&widget, &tagging_registry());

        assert!(!outcome.is_complete());
        assert_eq!(outcome.rendered().count(), 2);
        let errors: Vec<_> = outcome.errors().collect();
        assert_eq!(
            errors,
            vec![&Error::UnknownBlockType {
                tag: "Nonexistent".to_string(),
                index: 1,
            }]
        );
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        let widget = Widget::new(
            "Measurements",
            vec![
                DisplayValue::new("X1->X2", "500ns").into(),
                DisplayValue::new("Y1->Y2", "300mV").into(),
            ],
        );
        let registry = tagging_registry();

        assert_eq!(dispatch(&widget, &registry), dispatch(&widget, &registry));
    }

    #[test]
    fn test_empty_widget_dispatches_to_empty_outcome() {
        let widget = Widget::new("Empty", vec![]);
        let outcome = dispatch(&widget, &tagging_registry());

        assert!(outcome.is_empty());
        assert!(outcome.is_complete());
    }

    #[test]
    fn test_into_slots_preserves_order() {
        let widget = Widget::new(
            "Mixed",
            vec![
                AdjustValue::new(2.0, "V", false).into(),
                DisplayValue::new("l", "r").into(),
            ],
        );

        let slots = dispatch(&widget, &tagging_registry()).into_slots();
        assert_eq!(
            slots,
            vec![
                Ok("value:2V".to_string()),
                Ok("display:l=r".to_string()),
            ]
        );
    }
}
