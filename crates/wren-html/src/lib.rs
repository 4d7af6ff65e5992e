//! HTML tokenizer and parser for the Wren engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **HTML Tokenizer** ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization))
//!   - Data, tag, attribute and script data states
//!   - A pull interface: [`HtmlTokenizer`] is an [`Iterator`] of [`HtmlToken`]s
//!
//! - **HTML Parser / Tree Builder** ([WHATWG § 13.2.6](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction))
//!   - Insertion modes: Initial, BeforeHtml, BeforeHead, InHead, AfterHead, InBody, Text, AfterBody, AfterAfterBody
//!   - Implicit html/head/body and the stack of open elements
//!
//! # Not Yet Implemented
//!
//! - Character references (`&amp;` stays literal)
//! - Comment and DOCTYPE tokens (markup declarations are skipped)
//! - Table, form and foreign content modes

/// HTML parser and tree construction.
pub mod parser;
/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use parser::{HtmlParser, InsertionMode, format_tree, print_tree};
pub use tokenizer::{HtmlToken, HtmlTokenizer, TokenizerState};
