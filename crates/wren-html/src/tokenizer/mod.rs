//! HTML tokenizer module.
//!
//! Implements the subset of [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! the tree builder needs.

/// Helper methods for tokenizer state transitions.
pub mod helpers;
/// HTML tokenizer state machine implementation.
pub mod html_tokenizer;
/// Token types produced by the tokenizer.
pub mod token;

pub use html_tokenizer::{HtmlTokenizer, TokenizerState};
pub use token::HtmlToken;
