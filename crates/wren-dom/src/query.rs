use crate::{DomTree, ElementKind, NodeId};

/// Depth-first search for the first element of `kind`, starting at `start`.
///
/// Visits a node, then its first child's subtree, then its next sibling's,
/// so siblings of `start` are searched too.
#[must_use]
pub fn get_target_element_node(
    tree: &DomTree,
    start: Option<NodeId>,
    kind: ElementKind,
) -> Option<NodeId> {
    let mut current = start;
    while let Some(id) = current {
        if tree.element_kind(id) == Some(kind) {
            return Some(id);
        }
        if let Some(found) = get_target_element_node(tree, tree.first_child(id), kind) {
            return Some(found);
        }
        current = tree.next_sibling(id);
    }
    None
}

/// Source text of the first `<style>` element, or an empty string.
///
/// Only the style element's first child is read, and only if it is text.
#[must_use]
pub fn get_style_content(tree: &DomTree) -> String {
    get_target_element_node(tree, Some(tree.root()), ElementKind::Style)
        .and_then(|style| tree.first_child(style))
        .and_then(|child| tree.as_text(child))
        .map(ToString::to_string)
        .unwrap_or_default()
}
