//! CSS token types.
//!
//! A reduced form of the token set in
//! [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization):
//! no whitespace, comment, function, url, percentage or dimension tokens.

use core::fmt;

use serde::Serialize;

/// One lexical unit of a stylesheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum CssToken {
    /// "`<hash-token>`", value includes the leading `#`.
    HashToken(String),
    /// "`<delim-token>`" "has a value composed of a single code point"
    Delim(char),
    /// "`<number-token>`"
    Number(f64),
    /// "`<colon-token>`"
    Colon,
    /// "`<semicolon-token>`"
    SemiColon,
    /// "`<(-token>`"
    OpenParenthesis,
    /// "`<)-token>`"
    CloseParenthesis,
    /// "`<{-token>`"
    OpenCurly,
    /// "`<}-token>`"
    CloseCurly,
    /// "`<ident-token>`"
    Ident(String),
    /// "`<string-token>`", without its quotes.
    StringToken(String),
    /// "`<at-keyword-token>`", without the `@`.
    AtKeyword(String),
}

impl fmt::Display for CssToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HashToken(value) => write!(f, "Hash({value})"),
            Self::Delim(c) => write!(f, "Delim({c})"),
            Self::Number(n) => write!(f, "Number({n})"),
            Self::Colon => write!(f, "Colon"),
            Self::SemiColon => write!(f, "SemiColon"),
            Self::OpenParenthesis => write!(f, "OpenParenthesis"),
            Self::CloseParenthesis => write!(f, "CloseParenthesis"),
            Self::OpenCurly => write!(f, "OpenCurly"),
            Self::CloseCurly => write!(f, "CloseCurly"),
            Self::Ident(value) => write!(f, "Ident({value})"),
            Self::StringToken(value) => write!(f, "String({value:?})"),
            Self::AtKeyword(value) => write!(f, "AtKeyword({value})"),
        }
    }
}
