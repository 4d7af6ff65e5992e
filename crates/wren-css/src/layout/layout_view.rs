use wren_dom::{DomTree, ElementKind, NodeId, Window, get_target_element_node};

use super::constants::CONTENT_AREA_WIDTH;
use super::layout_object::{LayoutId, LayoutObject, LayoutObjectKind, LayoutPoint, LayoutSize};
use crate::cascade::compute_style;
use crate::error::LayoutError;
use crate::paint::DisplayItem;
use crate::parser::StyleSheet;
use crate::style::DisplayType;

/// The layout tree of one document, rooted at its `body` element.
///
/// Boxes live in an arena addressed by [`LayoutId`]. Nodes with
/// `display: none`, and everything below them, get no box.
///
/// ```
/// use wren_css::{LayoutObjectKind, LayoutView, StyleSheet};
/// use wren_html::{HtmlParser, HtmlTokenizer};
///
/// let window = HtmlParser::new(HtmlTokenizer::new("<p>hi</p>")).construct_tree().unwrap();
/// let view = LayoutView::new(&window, &StyleSheet::default()).unwrap();
/// let body = view.root().unwrap();
/// assert_eq!(view.object(body).unwrap().kind(), LayoutObjectKind::Block);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutView {
    objects: Vec<LayoutObject>,
    root: Option<LayoutId>,
}

impl LayoutView {
    /// Build and lay out the tree for `window`'s document under `sheet`.
    ///
    /// A document without a visible `body` has an empty layout tree.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if a box cannot be created for a node.
    pub fn new(window: &Window, sheet: &StyleSheet) -> Result<Self, LayoutError> {
        let tree = window.document();
        let body = get_target_element_node(tree, Some(tree.root()), ElementKind::Body);

        let mut view = Self::default();
        view.root = view.build_layout_tree(tree, body, None, sheet)?;
        view.update_layout();
        Ok(view)
    }

    /// The root box, normally the `body` element's.
    #[must_use]
    pub const fn root(&self) -> Option<LayoutId> {
        self.root
    }

    /// Look up a box.
    #[must_use]
    pub fn object(&self, id: LayoutId) -> Option<&LayoutObject> {
        self.objects.get(id.0)
    }

    /// Number of boxes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the tree has no boxes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The first child box of `id`.
    #[must_use]
    pub fn first_child(&self, id: LayoutId) -> Option<LayoutId> {
        self.object(id).and_then(LayoutObject::first_child)
    }

    /// The next sibling box of `id`.
    #[must_use]
    pub fn next_sibling(&self, id: LayoutId) -> Option<LayoutId> {
        self.object(id).and_then(LayoutObject::next_sibling)
    }

    /// The children of `id`, in order.
    pub fn children(&self, id: LayoutId) -> impl Iterator<Item = LayoutId> + '_ {
        core::iter::successors(self.first_child(id), |&child| self.next_sibling(child))
    }

    /// Flatten the tree into display items, in pre-order.
    #[must_use]
    pub fn paint(&self) -> Vec<DisplayItem> {
        let mut items = Vec::new();
        self.paint_node(self.root, &mut items);
        items
    }

    // ===== Tree construction =====

    /// Create the box for `node`, or `None` if its display is `none`.
    fn create_layout_object(
        &mut self,
        tree: &DomTree,
        node: NodeId,
        parent: Option<LayoutId>,
        sheet: &StyleSheet,
    ) -> Result<Option<LayoutId>, LayoutError> {
        let parent_style = parent.and_then(|id| self.object(id)).map(LayoutObject::style);
        let style = compute_style(tree, node, sheet, parent_style);
        if style.display() == DisplayType::DisplayNone {
            return Ok(None);
        }

        let mut object = LayoutObject::new(tree, node, style)?;
        object.parent = parent;
        let id = LayoutId(self.objects.len());
        self.objects.push(object);
        Ok(Some(id))
    }

    /// Build boxes for `node` and its following siblings under `parent`.
    ///
    /// Hidden nodes are skipped along with their subtrees; the next visible
    /// sibling takes their place. Returns the first box built. Only nesting
    /// recurses; siblings are a loop.
    fn build_layout_tree(
        &mut self,
        tree: &DomTree,
        node: Option<NodeId>,
        parent: Option<LayoutId>,
        sheet: &StyleSheet,
    ) -> Result<Option<LayoutId>, LayoutError> {
        let mut first = None;
        let mut previous: Option<LayoutId> = None;
        let mut target = node;

        while let Some(candidate) = target {
            target = tree.next_sibling(candidate);

            // STEP 1: Skip the node and its subtree if it is hidden.
            let Some(id) = self.create_layout_object(tree, candidate, parent, sheet)? else {
                continue;
            };

            // STEP 2: Children inherit from this box, siblings from the parent.
            let first_child =
                self.build_layout_tree(tree, tree.first_child(candidate), Some(id), sheet)?;
            if let Some(object) = self.objects.get_mut(id.0) {
                object.first_child = first_child;
            }

            // STEP 3: Link the box after the previous visible sibling.
            match previous.and_then(|previous| self.objects.get_mut(previous.0)) {
                Some(previous) => previous.next_sibling = Some(id),
                None => first = Some(id),
            }
            previous = Some(id);
        }
        Ok(first)
    }

    // ===== Geometry =====

    fn update_layout(&mut self) {
        self.calculate_node_size(self.root, LayoutSize::new(CONTENT_AREA_WIDTH, 0));
        self.calculate_node_position(
            self.root,
            LayoutPoint::default(),
            LayoutObjectKind::Block,
            None,
            None,
        );
    }

    /// Size pass over `id` and its following siblings: children before
    /// their parent, except that a block takes its width first so its
    /// children can fill it.
    fn calculate_node_size(&mut self, id: Option<LayoutId>, parent_size: LayoutSize) {
        let mut current = id;
        while let Some(id) = current {
            let Some(object) = self.object(id) else {
                return;
            };
            let (kind, first_child) = (object.kind(), object.first_child());
            current = object.next_sibling();

            if kind == LayoutObjectKind::Block {
                self.compute_size(id, parent_size);
            }

            let own_size = self.object(id).map(LayoutObject::size).unwrap_or_default();
            self.calculate_node_size(first_child, own_size);

            self.compute_size(id, parent_size);
        }
    }

    fn compute_size(&mut self, id: LayoutId, parent_size: LayoutSize) {
        let children: Vec<(LayoutObjectKind, LayoutSize)> = self
            .children(id)
            .filter_map(|child| self.object(child))
            .map(|child| (child.kind(), child.size()))
            .collect();
        if let Some(object) = self.objects.get_mut(id.0) {
            object.compute_size(parent_size, children);
        }
    }

    /// Position pass over `id` and its following siblings: a box, then its
    /// children from its own origin, then its next sibling relative to it.
    fn calculate_node_position(
        &mut self,
        id: Option<LayoutId>,
        parent_point: LayoutPoint,
        previous_sibling_kind: LayoutObjectKind,
        previous_sibling_point: Option<LayoutPoint>,
        previous_sibling_size: Option<LayoutSize>,
    ) {
        let mut current = id;
        let mut previous = (previous_sibling_kind, previous_sibling_point, previous_sibling_size);

        while let Some(id) = current {
            let Some(object) = self.objects.get_mut(id.0) else {
                return;
            };
            object.compute_position(parent_point, previous.0, previous.1, previous.2);
            let (kind, point, size) = (object.kind(), object.point(), object.size());
            let first_child = object.first_child();
            current = object.next_sibling();

            self.calculate_node_position(first_child, point, LayoutObjectKind::Block, None, None);
            previous = (kind, Some(point), Some(size));
        }
    }

    // ===== Paint =====

    fn paint_node(&self, id: Option<LayoutId>, items: &mut Vec<DisplayItem>) {
        let mut current = id;
        while let Some(object) = current.and_then(|id| self.object(id)) {
            items.extend(object.paint());
            self.paint_node(object.first_child(), items);
            current = object.next_sibling();
        }
    }
}
