//! Stock sidebar widgets.
//!
//! The panels shipped with the waveform viewer, declared as data. Hosts that
//! build their own panels construct [`Widget`] values directly; these are
//! the defaults shown before any user configuration exists.

use crate::block::{AdjustChannel, AdjustValue, DisplayValue};
use crate::widget::Widget;

/// Creates the "Measurements" panel: cursor delta readouts.
///
/// Blocks:
/// 1. `DisplayValue` — `X1->X2` / `500ns`
/// 2. `DisplayValue` — `Y1->Y2` / `300mV`
#[must_use]
pub fn measurements() -> Widget {
    Widget::new(
        "Measurements",
        vec![
            DisplayValue::new("X1->X2", "500ns").into(),
            DisplayValue::new("Y1->Y2", "300mV").into(),
        ],
    )
}

/// Creates the "Vertical" panel: channel selection and vertical scale.
///
/// Blocks:
/// 1. `AdjustChannel` — channel 1
/// 2. `AdjustValue` — 1 V, per division
/// 3. `AdjustValue` — 0 mV (offset, not per division)
#[must_use]
pub fn vertical() -> Widget {
    Widget::new(
        "Vertical",
        vec![
            AdjustChannel::new(1).into(),
            AdjustValue::new(1.0, "V", true).into(),
            AdjustValue::new(0.0, "mV", false).into(),
        ],
    )
}

/// Returns every stock widget, in sidebar order.
#[must_use]
pub fn all() -> Vec<Widget> {
    vec![measurements(), vertical()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Block, BlockType};

    #[test]
    fn test_measurements() {
        let widget = measurements();

        assert_eq!(widget.title(), "Measurements");
        assert_eq!(widget.len(), 2);
        assert_eq!(
            widget.blocks()[0],
            Block::DisplayValue(DisplayValue::new("X1->X2", "500ns"))
        );
        assert_eq!(
            widget.blocks()[1],
            Block::DisplayValue(DisplayValue::new("Y1->Y2", "300mV"))
        );
    }

    #[test]
    fn test_vertical() {
        let widget = vertical();

        assert_eq!(widget.title(), "Vertical");
        let types: Vec<_> = widget.blocks().iter().map(Block::block_type).collect();
        assert_eq!(
            types,
            vec![
                Some(BlockType::AdjustChannel),
                Some(BlockType::AdjustValue),
                Some(BlockType::AdjustValue),
            ]
        );
        assert_eq!(
            widget.blocks()[1],
            Block::AdjustValue(AdjustValue::new(1.0, "V", true))
        );
        assert_eq!(
            widget.blocks()[2],
            Block::AdjustValue(AdjustValue::new(0.0, "mV", false))
        );
    }

    #[test]
    fn test_all() {
        let widgets = all();

        assert_eq!(widgets.len(), 2);
        assert_eq!(widgets[0].title(), "Measurements");
        assert_eq!(widgets[1].title(), "Vertical");
    }

    #[test]
    fn test_presets_survive_interchange_round_trip() {
        for widget in all() {
            assert_eq!(Widget::from_raw(widget.to_raw()).unwrap(), widget);
        }
    }
}
