//! Integration tests for the page pipeline.

use wren_browser::Page;
use wren_css::{CssError, DisplayItem, Selector};
use wren_dom::DomError;

const PAGE: &str = r#"<html>
<head>
<style>
  .hidden { display: none; }
  h1 { color: navy; }
  #note { background-color: lightgray; }
</style>
</head>
<body>
<h1>Title</h1>
<p class="hidden">secret</p>
<p id="note">visible text</p>
</body>
</html>"#;

fn texts(items: &[DisplayItem]) -> Vec<&str> {
    items
        .iter()
        .filter_map(|item| match item {
            DisplayItem::Text { text, .. } => Some(text.as_str()),
            DisplayItem::Rect { .. } => None,
        })
        .collect()
}

#[test]
fn test_full_pipeline() {
    let mut page = Page::new();
    let items = page.receive_response(PAGE).unwrap().to_vec();

    assert_eq!(texts(&items), vec!["Title", "visible text"]);

    let sheet = page.style().unwrap();
    assert_eq!(sheet.rules.len(), 3);
    assert_eq!(sheet.rules[0].selector, Selector::ClassSelector("hidden".to_string()));

    let view = page.layout_view().unwrap();
    let body = view.root().unwrap();
    // h1 and the visible p.
    assert_eq!(view.children(body).count(), 2);

    assert_eq!(page.display_items(), items.as_slice());
}

#[test]
fn test_styles_applied_to_items() {
    let mut page = Page::new();
    let items = page.receive_response(PAGE).unwrap();

    let title_color = items.iter().find_map(|item| match item {
        DisplayItem::Text { text, style, .. } if text == "Title" => {
            style.color().name().map(str::to_string)
        }
        _ => None,
    });
    assert_eq!(title_color.as_deref(), Some("navy"));

    let note_background = items.iter().find_map(|item| match item {
        DisplayItem::Rect {
            style,
            layout_point,
            ..
        } if layout_point.y == 60 => style.background_color().name().map(str::to_string),
        _ => None,
    });
    assert_eq!(note_background.as_deref(), Some("lightgray"));
}

#[test]
fn test_page_without_style_uses_defaults() {
    let mut page = Page::new();
    let items = page.receive_response("<p>plain</p>").unwrap();
    assert_eq!(texts(items), vec!["plain"]);
    assert!(page.style().unwrap().rules.is_empty());
}

#[test]
fn test_empty_body() {
    let mut page = Page::new();
    assert!(page.receive_response("").unwrap().is_empty());
    assert!(page.window().is_some());
    assert_eq!(page.layout_view().unwrap().root(), None);
}

#[test]
fn test_reload_replaces_content() {
    let mut page = Page::new();
    let _ = page.receive_response("<p>first</p>").unwrap();
    let items = page.receive_response("<p>second</p>").unwrap();
    assert_eq!(texts(items), vec!["second"]);
}

#[test]
fn test_unknown_element_error() {
    let mut page = Page::new();
    let error = page.receive_response("<marquee>x</marquee>").unwrap_err();
    assert_eq!(error, DomError::UnknownElement("marquee".to_string()).into());
    assert!(page.window().is_none());
}

#[test]
fn test_css_error_keeps_dom() {
    let mut page = Page::new();
    let error = page
        .receive_response("<style>p > a { color: red; }</style><p>x</p>")
        .unwrap_err();
    assert_eq!(
        error,
        CssError::UnsupportedCharacter {
            ch: '>',
            position: 2
        }
        .into()
    );
    assert!(page.window().is_some());
    assert!(page.style().is_none());
    assert!(page.display_items().is_empty());
}
