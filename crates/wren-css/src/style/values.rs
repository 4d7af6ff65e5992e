//! Keyword-valued properties and their per-element defaults.

use serde::Serialize;
use strum_macros::{Display, EnumString};
use wren_dom::{DomTree, ElementKind, NodeId, NodeKind};

/// [§ 2.2 'font-size'](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
///
/// Only the absolute-size keywords the default element styles use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    /// "medium"
    Medium,
    /// "x-large", the size of `h2`.
    XLarge,
    /// "xx-large", the size of `h1`.
    XXLarge,
}

impl FontSize {
    /// Default size for a node before inheritance: `h1` and `h2` are
    /// enlarged, everything else is medium.
    #[must_use]
    pub fn default_for(tree: &DomTree, node: NodeId) -> Self {
        match tree.element_kind(node) {
            Some(ElementKind::H1) => Self::XXLarge,
            Some(ElementKind::H2) => Self::XLarge,
            _ => Self::Medium,
        }
    }

    /// Multiplier applied to character width and line height.
    #[must_use]
    pub const fn ratio(self) -> i64 {
        match self {
            Self::Medium => 1,
            Self::XLarge => 2,
            Self::XXLarge => 3,
        }
    }
}

/// [§ 2 The display property](https://www.w3.org/TR/css-display-3/#the-display-properties)
///
/// ```
/// use std::str::FromStr;
/// use wren_css::DisplayType;
///
/// assert_eq!(DisplayType::from_str("none"), Ok(DisplayType::DisplayNone));
/// assert!(DisplayType::from_str("flex").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayType {
    /// "The element generates a block-level box when placed in flow layout."
    #[strum(serialize = "block")]
    Block,
    /// "The element generates an inline-level box when placed in flow layout."
    #[strum(serialize = "inline")]
    Inline,
    /// "The element and its descendants generate no boxes or text runs."
    #[strum(serialize = "none")]
    #[serde(rename = "none")]
    DisplayNone,
}

impl DisplayType {
    /// Default display of a node: the document and block-level elements are
    /// blocks, other elements and text are inline.
    #[must_use]
    pub fn default_for(tree: &DomTree, node: NodeId) -> Self {
        match tree.get(node).map(|n| &n.kind) {
            Some(NodeKind::Document) => Self::Block,
            Some(NodeKind::Element(element)) if element.is_block_element() => Self::Block,
            _ => Self::Inline,
        }
    }
}

/// [§ 2.1 'text-decoration-line'](https://www.w3.org/TR/css-text-decor-3/#text-decoration-line-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TextDecoration {
    /// "Neither produces nor inhibits text decoration."
    None,
    /// "Each line of text is underlined."
    Underline,
}

impl TextDecoration {
    /// Links are underlined by default.
    #[must_use]
    pub fn default_for(tree: &DomTree, node: NodeId) -> Self {
        if tree.element_kind(node) == Some(ElementKind::A) {
            Self::Underline
        } else {
            Self::None
        }
    }
}
