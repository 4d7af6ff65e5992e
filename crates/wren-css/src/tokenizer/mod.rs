//! CSS tokenizer module.

mod css_tokenizer;
mod token;

pub use css_tokenizer::CssTokenizer;
pub use token::CssToken;
