//! Integration tests for the cascade and style defaulting.

use wren_css::{
    Color, ComputedStyle, DeclaredStyle, DisplayType, FontSize, StyleSheet, TextDecoration,
    compute_style, parse_stylesheet,
};
use wren_dom::{DomTree, ElementKind, NodeId, NodeKind, Window, get_target_element_node};
use wren_html::{HtmlParser, HtmlTokenizer};

fn parse_html(html: &str) -> Window {
    HtmlParser::new(HtmlTokenizer::new(html))
        .construct_tree()
        .unwrap()
}

fn find(tree: &DomTree, kind: ElementKind) -> NodeId {
    get_target_element_node(tree, Some(tree.root()), kind).unwrap()
}

/// Style of `node`, cascading down from the outermost element.
fn style_of(tree: &DomTree, sheet: &StyleSheet, node: NodeId) -> ComputedStyle {
    let parent_style = tree
        .parent(node)
        .filter(|&parent| !matches!(tree.get(parent).unwrap().kind, NodeKind::Document))
        .map(|parent| style_of(tree, sheet, parent));
    compute_style(tree, node, sheet, parent_style.as_ref())
}

#[test]
fn test_h1_defaults_without_rules() {
    let window = parse_html("<h1>Test</h1>");
    let tree = window.document();
    let style = style_of(tree, &StyleSheet::default(), find(tree, ElementKind::H1));

    assert_eq!(style.font_size(), FontSize::XXLarge);
    assert_eq!(style.display(), DisplayType::Block);
    assert_eq!(*style.background_color(), Color::white());
    assert_eq!(*style.color(), Color::black());
    assert_eq!(style.text_decoration(), TextDecoration::None);
}

#[test]
fn test_type_and_class_rules_both_apply() {
    let window = parse_html(r#"<h1 class="red">X</h1>"#);
    let tree = window.document();
    let sheet = parse_stylesheet("h1 { color: blue; } .red { background-color: red; }").unwrap();
    let style = style_of(tree, &sheet, find(tree, ElementKind::H1));

    assert_eq!(*style.color(), Color::from_name("blue").unwrap());
    assert_eq!(*style.background_color(), Color::from_name("red").unwrap());
}

#[test]
fn test_later_rule_wins() {
    let window = parse_html(r#"<p id="x" class="y">t</p>"#);
    let tree = window.document();
    let p = find(tree, ElementKind::P);

    let sheet = parse_stylesheet("#x { color: green; } .y { color: navy; }").unwrap();
    assert_eq!(style_of(tree, &sheet, p).color().name(), Some("navy"));

    let sheet = parse_stylesheet(".y { color: navy; } #x { color: green; }").unwrap();
    assert_eq!(style_of(tree, &sheet, p).color().name(), Some("green"));
}

#[test]
fn test_later_declaration_in_rule_wins() {
    let window = parse_html("<p>t</p>");
    let tree = window.document();
    let sheet = parse_stylesheet("p { color: red; color: #008080; }").unwrap();
    let style = style_of(tree, &sheet, find(tree, ElementKind::P));
    assert_eq!(style.color().name(), Some("teal"));
}

#[test]
fn test_class_must_match_whole_attribute() {
    let window = parse_html(r#"<p class="a b">t</p>"#);
    let tree = window.document();
    let sheet = parse_stylesheet(".a { color: red; }").unwrap();
    let style = style_of(tree, &sheet, find(tree, ElementKind::P));
    assert_eq!(*style.color(), Color::black());
}

#[test]
fn test_hex_colors() {
    let window = parse_html("<p>t</p>");
    let tree = window.document();
    let sheet = parse_stylesheet("p { color: #123456; background-color: #ffa500; }").unwrap();
    let style = style_of(tree, &sheet, find(tree, ElementKind::P));

    assert_eq!(style.color().code(), "#123456");
    assert_eq!(style.color().name(), None);
    assert_eq!(style.background_color().name(), Some("orange"));
}

#[test]
fn test_unknown_colors_fall_back() {
    let window = parse_html("<p>t</p>");
    let tree = window.document();
    let sheet =
        parse_stylesheet("body { color: red; } p { color: chartreuse; background-color: #12; }")
            .unwrap();
    let style = style_of(tree, &sheet, find(tree, ElementKind::P));

    // The fallback is a declared value, so the parent's red is not inherited.
    assert_eq!(*style.color(), Color::black());
    assert_eq!(*style.background_color(), Color::white());
}

#[test]
fn test_non_keyword_color_values_fall_back() {
    let window = parse_html(r#"<div class="a"><p>x</p></div>"#);
    let tree = window.document();
    let sheet = parse_stylesheet(
        ".a { color: blue; background-color: red; } p { color: 5; background-color: 7; }",
    )
    .unwrap();
    let style = style_of(tree, &sheet, find(tree, ElementKind::P));

    assert_eq!(*style.color(), Color::black());
    assert_eq!(*style.background_color(), Color::white());
}

#[test]
fn test_string_color_values() {
    let window = parse_html("<p>t</p>");
    let tree = window.document();
    let sheet = parse_stylesheet(r#"p { color: "navy"; background-color: '#ffff00'; }"#).unwrap();
    let style = style_of(tree, &sheet, find(tree, ElementKind::P));

    assert_eq!(style.color().name(), Some("navy"));
    assert_eq!(style.background_color().name(), Some("yellow"));
}

#[test]
fn test_non_keyword_display_hides_element() {
    let window = parse_html("<p>a</p><h1>b</h1>");
    let tree = window.document();
    let sheet = parse_stylesheet(r#"p { display: 3; } h1 { display: "inline"; }"#).unwrap();

    assert_eq!(
        style_of(tree, &sheet, find(tree, ElementKind::P)).display(),
        DisplayType::DisplayNone
    );
    assert_eq!(
        style_of(tree, &sheet, find(tree, ElementKind::H1)).display(),
        DisplayType::Inline
    );
}

#[test]
fn test_display_values() {
    let window = parse_html("<div>a</div><span>b</span><p>c</p>");
    let tree = window.document();
    let sheet =
        parse_stylesheet("div { display: inline; } span { display: block; } p { display: grid; }")
            .unwrap();

    assert_eq!(
        style_of(tree, &sheet, find(tree, ElementKind::Div)).display(),
        DisplayType::Inline
    );
    assert_eq!(
        style_of(tree, &sheet, find(tree, ElementKind::Span)).display(),
        DisplayType::Block
    );
    // Unsupported display keywords hide the element.
    assert_eq!(
        style_of(tree, &sheet, find(tree, ElementKind::P)).display(),
        DisplayType::DisplayNone
    );
}

#[test]
fn test_default_display() {
    let window = parse_html("<div><span>a</span></div>");
    let tree = window.document();
    let sheet = StyleSheet::default();
    let span = find(tree, ElementKind::Span);
    let text = tree.first_child(span).unwrap();

    assert_eq!(style_of(tree, &sheet, find(tree, ElementKind::Div)).display(), DisplayType::Block);
    assert_eq!(style_of(tree, &sheet, span).display(), DisplayType::Inline);
    assert_eq!(style_of(tree, &sheet, text).display(), DisplayType::Inline);
}

#[test]
fn test_inherited_properties() {
    let window = parse_html(r#"<div class="c"><p>a</p></div>"#);
    let tree = window.document();
    let sheet = parse_stylesheet(".c { color: red; background-color: yellow; }").unwrap();
    let p = find(tree, ElementKind::P);
    let style = style_of(tree, &sheet, tree.first_child(p).unwrap());

    assert_eq!(style.color().name(), Some("red"));
    assert_eq!(style.background_color().name(), Some("yellow"));
}

#[test]
fn test_display_is_not_inherited() {
    let window = parse_html("<span><p>a</p></span>");
    let tree = window.document();
    let sheet = parse_stylesheet("span { display: block; }").unwrap();
    let p = find(tree, ElementKind::P);
    let text = tree.first_child(p).unwrap();

    assert_eq!(style_of(tree, &sheet, p).display(), DisplayType::Block);
    assert_eq!(style_of(tree, &sheet, text).display(), DisplayType::Inline);
}

#[test]
fn test_font_size_and_decoration_inherit() {
    let window = parse_html("<h2><a>link</a></h2>");
    let tree = window.document();
    let a = find(tree, ElementKind::A);
    let text = tree.first_child(a).unwrap();
    let style = style_of(tree, &StyleSheet::default(), text);

    assert_eq!(style.font_size(), FontSize::XLarge);
    assert_eq!(style.text_decoration(), TextDecoration::Underline);
}

#[test]
fn test_text_decoration_property() {
    let window = parse_html("<a>link</a>");
    let tree = window.document();
    let sheet = parse_stylesheet("a { text-decoration: none; }").unwrap();
    let style = style_of(tree, &sheet, find(tree, ElementKind::A));
    assert_eq!(style.text_decoration(), TextDecoration::None);
}

#[test]
fn test_width_and_height_default_to_zero() {
    let window = parse_html("<p>t</p>");
    let tree = window.document();
    let style = style_of(tree, &StyleSheet::default(), find(tree, ElementKind::P));
    assert!(style.width().abs() < f64::EPSILON);
    assert!(style.height().abs() < f64::EPSILON);
}

#[test]
fn test_defaulting_is_idempotent() {
    let window = parse_html(r#"<div class="c"><h1>a</h1></div>"#);
    let tree = window.document();
    let sheet = parse_stylesheet(".c { color: purple; }").unwrap();
    let div = find(tree, ElementKind::Div);
    let h1 = find(tree, ElementKind::H1);

    let parent = style_of(tree, &sheet, div);
    let once = compute_style(tree, h1, &sheet, Some(&parent));
    let twice = DeclaredStyle::from(&once).defaulting(tree, h1, Some(&parent));
    assert_eq!(once, twice);
}

#[test]
fn test_selectors_ignore_text_nodes() {
    let window = parse_html("<p>p</p>");
    let tree = window.document();
    let sheet = parse_stylesheet("p { display: none; }").unwrap();
    let text = tree.first_child(find(tree, ElementKind::P)).unwrap();

    let style = compute_style(tree, text, &sheet, None);
    assert_eq!(style.display(), DisplayType::Inline);
}
