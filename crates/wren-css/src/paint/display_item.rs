use serde::Serialize;

use crate::layout::{LayoutPoint, LayoutSize};
use crate::style::ComputedStyle;

/// A single paint instruction.
///
/// Items are produced in paint order, back to front, and never change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum DisplayItem {
    /// Fill a rectangle with the style's background color.
    Rect {
        /// Style of the block that produced the rectangle.
        style: ComputedStyle,
        /// Top-left corner.
        layout_point: LayoutPoint,
        /// Width and height.
        layout_size: LayoutSize,
    },
    /// Draw one line of text with the style's color, size and decoration.
    Text {
        /// The line's characters.
        text: String,
        /// Style of the text box.
        style: ComputedStyle,
        /// Top-left corner of the line.
        layout_point: LayoutPoint,
    },
}
