//! CSS parser module.

mod css_parser;

pub use css_parser::{CssParser, Declaration, QualifiedRule, StyleSheet};
