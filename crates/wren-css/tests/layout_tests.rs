//! Integration tests for layout tree construction and geometry.

use wren_css::layout::constants::CONTENT_AREA_WIDTH;
use wren_css::{
    LayoutError, LayoutId, LayoutObject, LayoutObjectKind, LayoutPoint, LayoutSize, LayoutView,
    StyleSheet, compute_style, parse_stylesheet,
};
use wren_dom::{ElementKind, NodeId, Window, get_target_element_node};
use wren_html::{HtmlParser, HtmlTokenizer};

fn parse_html(html: &str) -> Window {
    HtmlParser::new(HtmlTokenizer::new(html))
        .construct_tree()
        .unwrap()
}

/// Helper to lay out HTML under a stylesheet source.
fn layout(html: &str, css: &str) -> (Window, LayoutView) {
    let window = parse_html(html);
    let sheet = parse_stylesheet(css).unwrap();
    let view = LayoutView::new(&window, &sheet).unwrap();
    (window, view)
}

fn object(view: &LayoutView, id: LayoutId) -> &LayoutObject {
    view.object(id).unwrap()
}

fn element_kind(window: &Window, object: &LayoutObject) -> Option<ElementKind> {
    window.document().element_kind(object.node())
}

#[test]
fn test_empty_document_has_no_layout() {
    let (_, view) = layout("", "");
    assert_eq!(view.root(), None);
    assert!(view.is_empty());
    assert!(view.paint().is_empty());
}

#[test]
fn test_root_is_body() {
    let (window, view) = layout("<html><head></head><body></body></html>", "");
    let root = object(&view, view.root().unwrap());

    assert_eq!(root.kind(), LayoutObjectKind::Block);
    assert_eq!(element_kind(&window, root), Some(ElementKind::Body));
    assert_eq!(root.first_child(), None);
    assert_eq!(root.next_sibling(), None);
    assert_eq!(root.parent(), None);
    assert_eq!(root.point(), LayoutPoint::new(0, 0));
    assert_eq!(root.size(), LayoutSize::new(CONTENT_AREA_WIDTH, 0));
}

#[test]
fn test_text_child() {
    let (window, view) = layout("<p>hoge</p>", "");
    let body = view.root().unwrap();
    let p = view.first_child(body).unwrap();
    let text = view.first_child(p).unwrap();

    assert_eq!(element_kind(&window, object(&view, p)), Some(ElementKind::P));
    assert_eq!(object(&view, p).parent(), Some(body));

    let text = object(&view, text);
    assert_eq!(text.kind(), LayoutObjectKind::Text);
    assert_eq!(text.text(), Some("hoge"));
    assert_eq!(text.point(), LayoutPoint::new(0, 0));
    assert_eq!(text.size(), LayoutSize::new(32, 20));

    assert_eq!(object(&view, p).size(), LayoutSize::new(CONTENT_AREA_WIDTH, 20));
    assert_eq!(object(&view, body).size(), LayoutSize::new(CONTENT_AREA_WIDTH, 20));
}

#[test]
fn test_hidden_body_has_no_layout() {
    let (_, view) = layout("<p>x</p>", "body { display: none; }");
    assert_eq!(view.root(), None);
}

#[test]
fn test_hidden_subtree_is_skipped() {
    let (window, view) = layout(
        r#"<a class="hidden">x</a><p></p>"#,
        ".hidden { display: none; }",
    );
    let body = view.root().unwrap();
    let p = view.first_child(body).unwrap();

    assert_eq!(element_kind(&window, object(&view, p)), Some(ElementKind::P));
    assert_eq!(view.next_sibling(p), None);
    assert_eq!(view.first_child(p), None);
    // body and p only: nothing for the hidden link or its text.
    assert_eq!(view.len(), 2);
}

#[test]
fn test_hidden_middle_sibling_is_skipped() {
    let (window, view) = layout(
        "<p>a</p><div>b</div><p>c</p>",
        "div { display: none; }",
    );
    let body = view.root().unwrap();
    let kinds: Vec<_> = view
        .children(body)
        .map(|id| element_kind(&window, object(&view, id)))
        .collect();
    assert_eq!(kinds, vec![Some(ElementKind::P), Some(ElementKind::P)]);

    let second = view.next_sibling(view.first_child(body).unwrap()).unwrap();
    assert_eq!(object(&view, second).point(), LayoutPoint::new(0, 20));
}

#[test]
fn test_blocks_stack_vertically() {
    let (_, view) = layout("<p>a</p><h1>Big</h1><p>c</p>", "");
    let body = view.root().unwrap();
    let children: Vec<_> = view.children(body).collect();

    let points: Vec<_> = children.iter().map(|&id| object(&view, id).point()).collect();
    assert_eq!(
        points,
        vec![LayoutPoint::new(0, 0), LayoutPoint::new(0, 20), LayoutPoint::new(0, 80)]
    );
    assert_eq!(object(&view, body).size().height, 100);
}

#[test]
fn test_inline_boxes_flow_horizontally() {
    let (_, view) = layout("<a>x</a><span>yy</span>", "");
    let body = view.root().unwrap();
    let a = view.first_child(body).unwrap();
    let span = view.next_sibling(a).unwrap();

    assert_eq!(object(&view, a).kind(), LayoutObjectKind::Inline);
    assert_eq!(object(&view, a).point(), LayoutPoint::new(0, 0));
    assert_eq!(object(&view, a).size(), LayoutSize::new(8, 20));

    assert_eq!(object(&view, span).point(), LayoutPoint::new(8, 0));
    assert_eq!(object(&view, span).size(), LayoutSize::new(16, 20));

    let span_text = view.first_child(span).unwrap();
    assert_eq!(object(&view, span_text).point(), LayoutPoint::new(8, 0));

    // Adjacent inline boxes share one line.
    assert_eq!(object(&view, body).size().height, 20);
}

#[test]
fn test_block_after_inline_goes_below() {
    let (_, view) = layout("<span>a</span><p>b</p>", "");
    let body = view.root().unwrap();
    let span = view.first_child(body).unwrap();
    let p = view.next_sibling(span).unwrap();

    assert_eq!(object(&view, p).point(), LayoutPoint::new(0, 20));
    assert_eq!(object(&view, body).size().height, 40);
}

#[test]
fn test_long_text_wraps() {
    let text = "a".repeat(100);
    let (_, view) = layout(&format!("<p>{text}</p>"), "");
    let body = view.root().unwrap();
    let p = view.first_child(body).unwrap();
    let text_box = object(&view, view.first_child(p).unwrap());

    assert_eq!(text_box.lines().len(), 2);
    assert_eq!(text_box.size(), LayoutSize::new(CONTENT_AREA_WIDTH, 40));
    assert_eq!(object(&view, p).size().height, 40);
}

#[test]
fn test_text_is_measured_collapsed() {
    let (_, view) = layout("<p>a \n   b</p>", "");
    let body = view.root().unwrap();
    let p = view.first_child(body).unwrap();
    let text_box = object(&view, view.first_child(p).unwrap());

    assert_eq!(text_box.text(), Some("a b"));
    assert_eq!(text_box.size(), LayoutSize::new(24, 20));
}

#[test]
fn test_heading_text_scales() {
    let (_, view) = layout("<h1>Test</h1>", "");
    let body = view.root().unwrap();
    let h1 = view.first_child(body).unwrap();
    let text_box = object(&view, view.first_child(h1).unwrap());
    assert_eq!(text_box.size(), LayoutSize::new(96, 60));
}

#[test]
fn test_siblings_inherit_from_real_parent() {
    let (_, view) = layout(
        r#"<div class="c"><p>a</p><p>b</p></div>"#,
        ".c { color: red; }",
    );
    let body = view.root().unwrap();
    let div = view.first_child(body).unwrap();
    for p in view.children(div) {
        assert_eq!(object(&view, p).style().color().name(), Some("red"));
    }
}

#[test]
fn test_document_node_has_no_layout_object() {
    let window = parse_html("<p>a</p>");
    let tree = window.document();
    let style = compute_style(tree, NodeId::ROOT, &StyleSheet::default(), None);
    assert_eq!(
        LayoutObject::new(tree, NodeId::ROOT, style),
        Err(LayoutError::DocumentNode)
    );
}

#[test]
fn test_hidden_element_has_no_kind() {
    let window = parse_html("<p>a</p>");
    let tree = window.document();
    let p = get_target_element_node(tree, Some(tree.root()), ElementKind::P).unwrap();
    let sheet = parse_stylesheet("p { display: none; }").unwrap();
    let style = compute_style(tree, p, &sheet, None);
    assert_eq!(
        LayoutObject::new(tree, p, style),
        Err(LayoutError::DisplayNone)
    );
}

#[test]
fn test_compute_position_below_previous_block() {
    let window = parse_html("<p>a</p>");
    let tree = window.document();
    let p = get_target_element_node(tree, Some(tree.root()), ElementKind::P).unwrap();
    let style = compute_style(tree, p, &StyleSheet::default(), None);
    let mut object = LayoutObject::new(tree, p, style).unwrap();

    object.compute_position(
        LayoutPoint::new(10, 0),
        LayoutObjectKind::Block,
        Some(LayoutPoint::new(0, 30)),
        Some(LayoutSize::new(590, 50)),
    );
    assert_eq!(object.point(), LayoutPoint::new(10, 80));

    object.compute_position(LayoutPoint::new(5, 7), LayoutObjectKind::Block, None, None);
    assert_eq!(object.point(), LayoutPoint::new(5, 7));
}

#[test]
fn test_compute_size_of_block() {
    let window = parse_html("<p>a</p>");
    let tree = window.document();
    let p = get_target_element_node(tree, Some(tree.root()), ElementKind::P).unwrap();
    let style = compute_style(tree, p, &StyleSheet::default(), None);
    let mut object = LayoutObject::new(tree, p, style).unwrap();

    object.compute_size(
        LayoutSize::new(300, 0),
        [
            (LayoutObjectKind::Inline, LayoutSize::new(10, 20)),
            (LayoutObjectKind::Text, LayoutSize::new(10, 20)),
            (LayoutObjectKind::Block, LayoutSize::new(300, 40)),
            (LayoutObjectKind::Inline, LayoutSize::new(10, 20)),
        ],
    );
    // The Text after an Inline shares its line.
    assert_eq!(object.size(), LayoutSize::new(300, 80));
}

#[test]
fn test_long_sibling_list() {
    let count = 5000;
    let (_, view) = layout(&"<span>a</span>".repeat(count), "");
    let body = view.root().unwrap();

    assert_eq!(view.len(), 1 + 2 * count);
    let spans: Vec<LayoutId> = view.children(body).collect();
    assert_eq!(spans.len(), count);
    let last = object(&view, spans[count - 1]);
    assert_eq!(last.point(), LayoutPoint::new(8 * (count as i64 - 1), 0));

    let items = view.paint();
    assert_eq!(items.len(), 1 + count);
}

#[test]
fn test_div_is_laid_out_as_block() {
    let (_, view) = layout("<div>a</div><div>b</div>", "");
    let body = view.root().unwrap();
    let divs: Vec<&LayoutObject> = view.children(body).map(|id| object(&view, id)).collect();

    assert_eq!(divs.len(), 2);
    assert!(divs.iter().all(|div| div.kind() == LayoutObjectKind::Block));
    assert_eq!(divs[0].point(), LayoutPoint::new(0, 0));
    assert_eq!(divs[1].point(), LayoutPoint::new(0, 20));
    assert_eq!(divs[1].size(), LayoutSize::new(CONTENT_AREA_WIDTH, 20));
}
