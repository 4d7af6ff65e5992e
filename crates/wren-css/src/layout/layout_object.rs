use serde::Serialize;
use strum_macros::Display;
use wren_dom::{DomTree, NodeId, NodeKind};

use super::constants::{CHAR_HEIGHT_WITH_PADDING, CHAR_WIDTH, CONTENT_AREA_WIDTH};
use super::text::{collapse_whitespace, split_text};
use crate::error::LayoutError;
use crate::style::{ComputedStyle, DisplayType};

/// A type-safe index into the [`LayoutView`](super::LayoutView) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LayoutId(pub usize);

/// The box kind, which picks the sizing, positioning and paint rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum LayoutObjectKind {
    /// Stacks vertically and fills the available width.
    Block,
    /// Flows horizontally after another inline box.
    Inline,
    /// A run of text, wrapped to the content area.
    Text,
}

/// Absolute position in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LayoutPoint {
    /// Horizontal offset from the content area origin.
    pub x: i64,
    /// Vertical offset from the content area origin.
    pub y: i64,
}

impl LayoutPoint {
    /// Create a point.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Box size in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LayoutSize {
    /// Width in pixels.
    pub width: i64,
    /// Height in pixels.
    pub height: i64,
}

impl LayoutSize {
    /// Create a size.
    #[must_use]
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }
}

/// One box of the layout tree, mirroring a visible DOM node.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutObject {
    kind: LayoutObjectKind,
    node: NodeId,
    /// Whitespace-collapsed content of a text box.
    text: Option<String>,
    style: ComputedStyle,
    point: LayoutPoint,
    size: LayoutSize,
    pub(crate) parent: Option<LayoutId>,
    pub(crate) first_child: Option<LayoutId>,
    pub(crate) next_sibling: Option<LayoutId>,
}

impl LayoutObject {
    /// Create a box for `node` with its resolved style.
    ///
    /// The kind follows from the node and style: elements are blocks or
    /// inlines per `display`, text nodes are text.
    ///
    /// # Errors
    ///
    /// [`LayoutError::DocumentNode`] for the Document node and
    /// [`LayoutError::DisplayNone`] for an element whose display is `none`.
    pub fn new(tree: &DomTree, node: NodeId, style: ComputedStyle) -> Result<Self, LayoutError> {
        let (kind, text) = match tree.get(node).map(|n| &n.kind) {
            Some(NodeKind::Element(_)) => match style.display() {
                DisplayType::Block => (LayoutObjectKind::Block, None),
                DisplayType::Inline => (LayoutObjectKind::Inline, None),
                DisplayType::DisplayNone => return Err(LayoutError::DisplayNone),
            },
            Some(NodeKind::Text(text)) => (LayoutObjectKind::Text, Some(collapse_whitespace(text))),
            Some(NodeKind::Document) | None => return Err(LayoutError::DocumentNode),
        };

        Ok(Self {
            kind,
            node,
            text,
            style,
            point: LayoutPoint::default(),
            size: LayoutSize::default(),
            parent: None,
            first_child: None,
            next_sibling: None,
        })
    }

    /// The box kind.
    #[must_use]
    pub const fn kind(&self) -> LayoutObjectKind {
        self.kind
    }

    /// The DOM node this box was created for.
    #[must_use]
    pub const fn node(&self) -> NodeId {
        self.node
    }

    /// The whitespace-collapsed text of a text box.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The computed style.
    #[must_use]
    pub const fn style(&self) -> &ComputedStyle {
        &self.style
    }

    /// Absolute position, valid after layout.
    #[must_use]
    pub const fn point(&self) -> LayoutPoint {
        self.point
    }

    /// Size, valid after layout.
    #[must_use]
    pub const fn size(&self) -> LayoutSize {
        self.size
    }

    /// The parent box, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<LayoutId> {
        self.parent
    }

    /// The first child box, if any.
    #[must_use]
    pub const fn first_child(&self) -> Option<LayoutId> {
        self.first_child
    }

    /// The next sibling box, if any.
    #[must_use]
    pub const fn next_sibling(&self) -> Option<LayoutId> {
        self.next_sibling
    }

    /// The text of a text box broken into painted lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let char_width = CHAR_WIDTH * self.style.font_size().ratio();
        self.text
            .as_deref()
            .map(|text| split_text(text, char_width, CONTENT_AREA_WIDTH))
            .unwrap_or_default()
    }

    /// Compute this box's size from the available size and its children's
    /// kinds and sizes, in order.
    ///
    /// - Block: full `parent_size` width; height sums the children, but two
    ///   adjacent inline children count once since they share a line.
    /// - Inline: sum of the children's widths and heights.
    /// - Text: wrapped text, at most the content area wide.
    pub fn compute_size(
        &mut self,
        parent_size: LayoutSize,
        children: impl IntoIterator<Item = (LayoutObjectKind, LayoutSize)>,
    ) {
        let mut size = LayoutSize::default();

        match self.kind {
            LayoutObjectKind::Block => {
                size.width = parent_size.width;

                let mut previous_child_kind = LayoutObjectKind::Block;
                for (kind, child_size) in children {
                    if previous_child_kind == LayoutObjectKind::Block
                        || kind == LayoutObjectKind::Block
                    {
                        size.height += child_size.height;
                    }
                    previous_child_kind = kind;
                }
            }
            LayoutObjectKind::Inline => {
                for (_, child_size) in children {
                    size.width += child_size.width;
                    size.height += child_size.height;
                }
            }
            LayoutObjectKind::Text => {
                let ratio = self.style.font_size().ratio();
                let length = self.text.as_deref().map_or(0, |text| text.chars().count()) as i64;
                let lines = self.lines().len() as i64;
                size.width = (CHAR_WIDTH * ratio * length).min(CONTENT_AREA_WIDTH);
                size.height = CHAR_HEIGHT_WITH_PADDING * ratio * lines;
            }
        }

        self.size = size;
    }

    /// Compute this box's position from its parent's origin and the
    /// previous sibling, if there is one.
    ///
    /// A block, or any box after a block, goes below the previous sibling
    /// at the parent's x. An inline after an inline goes to the right of
    /// it. Anything else starts at the parent's origin.
    pub fn compute_position(
        &mut self,
        parent_point: LayoutPoint,
        previous_sibling_kind: LayoutObjectKind,
        previous_sibling_point: Option<LayoutPoint>,
        previous_sibling_size: Option<LayoutSize>,
    ) {
        let previous = previous_sibling_point.zip(previous_sibling_size);

        self.point = match (self.kind, previous_sibling_kind) {
            (LayoutObjectKind::Block, _) | (_, LayoutObjectKind::Block) => match previous {
                Some((point, size)) => LayoutPoint::new(parent_point.x, point.y + size.height),
                None => LayoutPoint::new(parent_point.x, parent_point.y),
            },
            (LayoutObjectKind::Inline, LayoutObjectKind::Inline) => match previous {
                Some((point, size)) => LayoutPoint::new(point.x + size.width, point.y),
                None => parent_point,
            },
            _ => parent_point,
        };
    }
}
