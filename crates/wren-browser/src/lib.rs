//! High-level page API for the Wren engine.
//!
//! # Scope
//!
//! This crate provides:
//! - **Document Loading** - parse an already-fetched HTML body into a DOM
//! - **Style** - extract and parse the document's `<style>` sheet
//! - **Layout Tree** - boxes with computed sizes and positions
//! - **Paint** - the display list handed to a rasterizer
//!
//! # Not Yet Implemented
//!
//! - Networking and URL handling (the body is passed in)
//! - External stylesheets and more than one `<style>` element

pub use wren_css as css;
pub use wren_dom as dom;
pub use wren_html as html;

use thiserror::Error;
use wren_css::{CssError, DisplayItem, LayoutError, LayoutView, StyleSheet, parse_stylesheet};
use wren_dom::{DomError, Window, get_style_content};
use wren_html::{HtmlParser, HtmlTokenizer};

/// Error type for loading a page. Each stage's fatal error is wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// The HTML could not be turned into a DOM tree.
    #[error("HTML parse error: {0}")]
    Dom(#[from] DomError),
    /// The `<style>` content could not be tokenized or parsed.
    #[error("CSS error: {0}")]
    Css(#[from] CssError),
    /// The layout tree could not be built.
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// One document and every stage derived from it.
///
/// ```
/// use wren_browser::Page;
///
/// let mut page = Page::new();
/// let items = page.receive_response("<p>hello</p>").unwrap();
/// assert_eq!(items.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct Page {
    window: Option<Window>,
    style: Option<StyleSheet>,
    layout_view: Option<LayoutView>,
    display_items: Vec<DisplayItem>,
}

impl Page {
    /// Create an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the pipeline on a response body and return its display items.
    ///
    /// HTML is parsed into a DOM, the first `<style>` element's text into a
    /// stylesheet, then layout and paint run. Earlier content is replaced.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error of any stage. The page keeps the
    /// stages that completed before it.
    pub fn receive_response(&mut self, body: &str) -> Result<&[DisplayItem], PageError> {
        *self = Self::default();

        // STEP 1: HTML → DOM
        let window = HtmlParser::new(HtmlTokenizer::new(body)).construct_tree()?;

        // STEP 2: <style> → StyleSheet
        let style = parse_stylesheet(&get_style_content(window.document()));
        let window = self.window.insert(window);
        let style = self.style.insert(style?);

        // STEP 3: DOM + StyleSheet → layout tree → display items
        let layout_view = self.layout_view.insert(LayoutView::new(window, style)?);
        self.display_items = layout_view.paint();

        Ok(&self.display_items)
    }

    /// The document, once parsed.
    #[must_use]
    pub const fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    /// The document's stylesheet, once parsed.
    #[must_use]
    pub const fn style(&self) -> Option<&StyleSheet> {
        self.style.as_ref()
    }

    /// The layout tree, once built.
    #[must_use]
    pub const fn layout_view(&self) -> Option<&LayoutView> {
        self.layout_view.as_ref()
    }

    /// The display items of the last successful load.
    #[must_use]
    pub fn display_items(&self) -> &[DisplayItem] {
        &self.display_items
    }
}
