//! [CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/)
//!
//! Every rule whose selector matches contributes its declarations in
//! stylesheet order, so of two matching rules the later one wins.

use wren_dom::{DomTree, NodeId};

use crate::parser::StyleSheet;
use crate::style::{ComputedStyle, DeclaredStyle};

/// Compute the style of `node` against `sheet` and its parent's style.
#[must_use]
pub fn compute_style(
    tree: &DomTree,
    node: NodeId,
    sheet: &StyleSheet,
    parent: Option<&ComputedStyle>,
) -> ComputedStyle {
    let mut declared = DeclaredStyle::default();
    for rule in &sheet.rules {
        if rule.selector.matches(tree, node) {
            declared.cascading_style(&rule.declarations);
        }
    }
    declared.defaulting(tree, node, parent)
}
