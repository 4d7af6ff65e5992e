//! CSS tokenizer, parser, selector matching, cascade, layout and paint for the Wren engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Tokenizer** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!   - A reduced token set: ident, at-keyword, hash, string, delim, number and punctuation
//!
//! - **CSS Parser** ([§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing))
//!   - Qualified rules with one simple selector and a declaration list
//!   - At-rules are parsed and discarded
//!
//! - **Selectors** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, class and ID selectors, no combinators
//!
//! - **Cascade** ([CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/))
//!   - Source-order application of matching rules
//!   - Inheritance and initial values for `background-color`, `color`,
//!     `font-size`, `text-decoration`
//!
//! - **Layout** ([CSS Display Level 3](https://www.w3.org/TR/css-display-3/))
//!   - Block, inline and text boxes in an arena, `display: none` filtering
//!   - Size and position passes with greedy text wrapping
//!
//! - **Paint**
//!   - Flattening the layout tree into [`DisplayItem`]s
//!
//! # Not Yet Implemented
//!
//! - Combinators, pseudo-classes (`a:hover` degrades to `a`) and specificity
//! - Comments, escapes, negative numbers and dimensions in the tokenizer
//! - Margins, padding, borders and real line boxes

/// Selector matching and rule application.
pub mod cascade;
/// Error types for the CSS pipeline and layout.
pub mod error;
/// Layout tree construction and geometry.
pub mod layout;
/// Display list produced from the layout tree.
pub mod paint;
/// CSS parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod parser;
/// Selectors and selector matching per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;
/// Declared and computed style.
pub mod style;
/// CSS tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;

pub use cascade::compute_style;
pub use error::{CssError, LayoutError};
pub use layout::{LayoutId, LayoutObject, LayoutObjectKind, LayoutPoint, LayoutSize, LayoutView};
pub use paint::DisplayItem;
pub use parser::{CssParser, Declaration, QualifiedRule, StyleSheet};
pub use selector::Selector;
pub use style::{Color, ComputedStyle, DeclaredStyle, DisplayType, FontSize, TextDecoration};
pub use tokenizer::{CssToken, CssTokenizer};

/// Tokenize and parse a stylesheet in one step.
///
/// # Errors
///
/// Returns the first [`CssError`] raised by the tokenizer or the parser.
pub fn parse_stylesheet(source: &str) -> Result<StyleSheet, CssError> {
    let mut tokenizer = CssTokenizer::new(source);
    tokenizer.run()?;
    CssParser::new(tokenizer.into_tokens()).parse_stylesheet()
}
