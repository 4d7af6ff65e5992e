use thiserror::Error;

/// Fatal errors from the CSS tokenizer and parser.
///
/// Malformed declarations are not errors: they are dropped with a warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CssError {
    /// The tokenizer met a code point it has no rule for.
    #[error("unsupported character {ch:?} at position {position}")]
    UnsupportedCharacter {
        /// The offending character.
        ch: char,
        /// Character offset into the source.
        position: usize,
    },
    /// Input ended where a token was required.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// What the parser was looking for.
        expected: &'static str,
    },
    /// A token of the wrong type was found.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        /// What the parser was looking for.
        expected: &'static str,
        /// The token that was found instead.
        found: String,
    },
}

/// Fatal errors while building the layout tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Layout objects are never created for the Document node.
    #[error("cannot create a layout object for the document node")]
    DocumentNode,
    /// A box kind was requested for a node whose display is `none`.
    #[error("node with display: none has no box kind")]
    DisplayNone,
}
