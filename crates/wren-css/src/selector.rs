//! Simple selectors and matching.
//!
//! Only one simple selector per rule: no compound selectors, no
//! combinators, no specificity.

use serde::Serialize;
use wren_dom::{DomTree, NodeId};

/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
/// and [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum Selector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// "A type selector is the name of a document language element type"
    TypeSelector(String),
    /// [§ 6.6 Class selectors](https://www.w3.org/TR/selectors-4/#class-html)
    ClassSelector(String),
    /// [§ 6.7 ID selectors](https://www.w3.org/TR/selectors-4/#id-selectors)
    IdSelector(String),
    /// Anything the parser could not read. Matches nothing.
    #[default]
    UnknownSelector,
}

impl Selector {
    /// Whether `node` is selected.
    ///
    /// Type selectors compare the tag name, class and ID selectors compare
    /// the whole `class`/`id` attribute value. Non-element nodes never match.
    #[must_use]
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        let Some(element) = tree.as_element(node) else {
            return false;
        };
        match self {
            Self::TypeSelector(name) => element.kind.as_ref() == name,
            Self::ClassSelector(name) => element.get_attribute("class") == Some(name.as_str()),
            Self::IdSelector(name) => element.get_attribute("id") == Some(name.as_str()),
            Self::UnknownSelector => false,
        }
    }
}
