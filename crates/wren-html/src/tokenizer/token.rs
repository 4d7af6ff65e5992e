use core::fmt;

use wren_dom::Attribute;

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// The tokens handed to the tree construction stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlToken {
    /// "Start and end tag tokens have a tag name, a self-closing flag, and a
    /// list of attributes"
    StartTag {
        /// Lower-cased tag name.
        tag: String,
        /// Set by a trailing `/>`.
        self_closing: bool,
        /// Attributes in source order.
        attributes: Vec<Attribute>,
    },
    /// End tag token. Attributes written on end tags are dropped.
    EndTag {
        /// Lower-cased tag name.
        tag: String,
    },
    /// A single character of text.
    Char(char),
    /// End of input.
    Eof,
}

impl HtmlToken {
    /// "When a start or end tag token is created, its self-closing flag must be
    /// unset ... and its attributes list must be empty."
    #[must_use]
    pub const fn new_start_tag() -> Self {
        Self::StartTag {
            tag: String::new(),
            self_closing: false,
            attributes: Vec::new(),
        }
    }

    /// An end tag token with an empty name.
    #[must_use]
    pub const fn new_end_tag() -> Self {
        Self::EndTag { tag: String::new() }
    }

    /// Returns true if this is an end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /// Whether this is a character token holding tab, LF, FF, CR or space.
    #[must_use]
    pub const fn is_whitespace_char(&self) -> bool {
        matches!(self, Self::Char('\t' | '\n' | '\x0C' | '\r' | ' '))
    }

    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    ///
    /// "Append the current input character to the current tag token's tag name."
    pub fn append_to_tag_name(&mut self, c: char) {
        if let Self::StartTag { tag, .. } | Self::EndTag { tag } = self {
            tag.push(c);
        }
    }

    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    ///
    /// "Set the self-closing flag of the current tag token." End tags ignore it.
    pub const fn set_self_closing(&mut self) {
        if let Self::StartTag { self_closing, .. } = self {
            *self_closing = true;
        }
    }

    /// "Start a new attribute in the current tag token."
    pub fn start_new_attribute(&mut self) {
        if let Self::StartTag { attributes, .. } = self {
            attributes.push(Attribute::new());
        }
    }

    /// "Append the current input character to the current attribute's name."
    pub fn append_to_current_attribute_name(&mut self, c: char) {
        self.append_to_current_attribute(c, true);
    }

    /// "Append the current input character to the current attribute's value."
    pub fn append_to_current_attribute_value(&mut self, c: char) {
        self.append_to_current_attribute(c, false);
    }

    fn append_to_current_attribute(&mut self, c: char, is_name: bool) {
        if let Self::StartTag { attributes, .. } = self
            && let Some(attribute) = attributes.last_mut()
        {
            attribute.add_char(c, is_name);
        }
    }
}

impl fmt::Display for HtmlToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartTag {
                tag,
                self_closing,
                attributes,
            } => {
                write!(f, "StartTag <{tag}")?;
                for attribute in attributes {
                    write!(f, " {}=\"{}\"", attribute.name, attribute.value)?;
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { tag } => write!(f, "EndTag </{tag}>"),
            Self::Char(c) => write!(f, "Char {c:?}"),
            Self::Eof => write!(f, "EOF"),
        }
    }
}
