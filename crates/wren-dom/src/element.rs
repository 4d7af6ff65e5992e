use std::str::FromStr;

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};

use crate::DomError;

/// A single `name="value"` pair on an element or start tag.
///
/// The tokenizer fills both halves one character at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Lower-cased attribute name.
    pub name: String,
    /// Attribute value with quotes removed.
    pub value: String,
}

impl Attribute {
    /// An attribute with an empty name and value.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: String::new(),
            value: String::new(),
        }
    }

    /// Append one character to the name (`is_name`) or to the value.
    pub fn add_char(&mut self, c: char, is_name: bool) {
        if is_name {
            self.name.push(c);
        } else {
            self.value.push(c);
        }
    }
}

/// The closed set of elements the engine understands.
///
/// Parsing a tag name outside this set is an error, not a fallback.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// `<html>`
    Html,
    /// `<head>`
    Head,
    /// `<title>`
    Title,
    /// `<meta>`
    Meta,
    /// `<link>`
    Link,
    /// `<base>`
    Base,
    /// `<style>`
    Style,
    /// `<script>`
    Script,
    /// `<body>`
    Body,
    /// `<div>`
    Div,
    /// `<span>`
    Span,
    /// `<p>`
    P,
    /// `<h1>`
    H1,
    /// `<h2>`
    H2,
    /// `<h3>`
    H3,
    /// `<h4>`
    H4,
    /// `<h5>`
    H5,
    /// `<h6>`
    H6,
    /// `<a>`
    A,
    /// `<b>`
    B,
    /// `<i>`
    I,
    /// `<em>`
    Em,
    /// `<strong>`
    Strong,
    /// `<ul>`
    Ul,
    /// `<ol>`
    Ol,
    /// `<li>`
    Li,
    /// `<img>`
    Img,
    /// `<br>`
    Br,
    /// `<hr>`
    Hr,
    /// `<input>`
    Input,
    /// `<area>`
    Area,
    /// `<col>`
    Col,
    /// `<embed>`
    Embed,
    /// `<param>`
    Param,
    /// `<source>`
    Source,
    /// `<track>`
    Track,
    /// `<wbr>`
    Wbr,
}

impl ElementKind {
    /// Look up a lower-case tag name.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnknownElement`] for names outside the vocabulary.
    pub fn from_tag(tag: &str) -> Result<Self, DomError> {
        Self::from_str(tag).map_err(|_| DomError::UnknownElement(tag.to_string()))
    }

    /// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
    ///
    /// "Void elements: area, base, br, col, embed, hr, img, input, link, meta,
    /// source, track, wbr"
    #[must_use]
    pub const fn is_void(self) -> bool {
        matches!(
            self,
            Self::Area
                | Self::Base
                | Self::Br
                | Self::Col
                | Self::Embed
                | Self::Hr
                | Self::Img
                | Self::Input
                | Self::Link
                | Self::Meta
                | Self::Param
                | Self::Source
                | Self::Track
                | Self::Wbr
        )
    }
}

/// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
///
/// "Elements have an associated ... local name" and "an attribute list".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Which element this is.
    pub kind: ElementKind,
    /// Attributes in source order.
    pub attributes: Vec<Attribute>,
}

impl Element {
    /// Create an element from a tag name.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnknownElement`] for names outside the vocabulary.
    pub fn new(tag: &str, attributes: Vec<Attribute>) -> Result<Self, DomError> {
        Ok(Self {
            kind: ElementKind::from_tag(tag)?,
            attributes,
        })
    }

    /// Value of the first attribute called `name`.
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Elements whose default `display` is `block`.
    #[must_use]
    pub const fn is_block_element(&self) -> bool {
        matches!(
            self.kind,
            ElementKind::Html
                | ElementKind::Body
                | ElementKind::Div
                | ElementKind::P
                | ElementKind::H1
                | ElementKind::H2
                | ElementKind::H3
                | ElementKind::H4
                | ElementKind::H5
                | ElementKind::H6
                | ElementKind::Ul
                | ElementKind::Ol
                | ElementKind::Li
                | ElementKind::Hr
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names_round_trip_through_strum() {
        assert_eq!(ElementKind::from_tag("h1"), Ok(ElementKind::H1));
        assert_eq!(ElementKind::Strong.as_ref(), "strong");
        assert_eq!(ElementKind::Wbr.to_string(), "wbr");
    }

    #[test]
    fn test_unknown_tag_is_an_error() {
        assert_eq!(
            ElementKind::from_tag("marquee"),
            Err(DomError::UnknownElement("marquee".to_string()))
        );
    }

    #[test]
    fn test_void_elements() {
        assert!(ElementKind::Br.is_void());
        assert!(ElementKind::Meta.is_void());
        assert!(!ElementKind::P.is_void());
    }
}
