//! HTML parser module for tree construction.

/// HTML parser implementation.
pub mod html_parser;

pub use html_parser::{HtmlParser, InsertionMode, format_tree, print_tree};
