use super::DisplayItem;
use crate::layout::constants::CHAR_HEIGHT_WITH_PADDING;
use crate::layout::{LayoutObject, LayoutObjectKind, LayoutPoint};
use crate::style::DisplayType;

impl LayoutObject {
    /// Display items for this box alone, not its descendants.
    ///
    /// Blocks paint their background rectangle, inline boxes paint nothing
    /// themselves, and text paints one item per wrapped line. Wrapped lines
    /// are one unscaled line height apart whatever the font size.
    #[must_use]
    pub fn paint(&self) -> Vec<DisplayItem> {
        if self.style().display() == DisplayType::DisplayNone {
            return Vec::new();
        }

        match self.kind() {
            // Only elements produce blocks.
            LayoutObjectKind::Block => vec![DisplayItem::Rect {
                style: self.style().clone(),
                layout_point: self.point(),
                layout_size: self.size(),
            }],
            LayoutObjectKind::Inline => Vec::new(),
            LayoutObjectKind::Text => {
                let point = self.point();
                self.lines()
                    .into_iter()
                    .enumerate()
                    .map(|(index, line)| DisplayItem::Text {
                        text: line,
                        style: self.style().clone(),
                        layout_point: LayoutPoint::new(
                            point.x,
                            point.y + CHAR_HEIGHT_WITH_PADDING * index as i64,
                        ),
                    })
                    .collect()
            }
        }
    }
}
