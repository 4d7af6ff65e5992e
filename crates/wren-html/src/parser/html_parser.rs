use std::fmt::Write;

use strum_macros::Display;

use wren_common::warning::warn_once;
use wren_dom::{Attribute, DomError, DomTree, Element, NodeId, NodeKind, Window};

use crate::tokenizer::{HtmlToken, HtmlTokenizer};

/// [§ 13.2.4.1 The insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-insertion-mode)
///
/// "The insertion mode is a state variable that controls the primary operation
/// of the tree construction stage."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InsertionMode {
    /// [§ 13.2.6.4.1 The "initial" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-initial-insertion-mode)
    Initial,
    /// [§ 13.2.6.4.2 The "before html" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-before-html-insertion-mode)
    BeforeHtml,
    /// [§ 13.2.6.4.3 The "before head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-before-head-insertion-mode)
    BeforeHead,
    /// [§ 13.2.6.4.4 The "in head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inhead)
    InHead,
    /// [§ 13.2.6.4.6 The "after head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-after-head-insertion-mode)
    AfterHead,
    /// [§ 13.2.6.4.7 The "in body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody)
    InBody,
    /// [§ 13.2.6.4.8 The "text" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-incdata)
    Text,
    /// [§ 13.2.6.4.19 The "after body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-afterbody)
    AfterBody,
    /// [§ 13.2.6.4.22 The "after after body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-after-after-body-insertion-mode)
    AfterAfterBody,
}

/// Tree builder driving an [`HtmlTokenizer`].
///
/// ```
/// use wren_dom::ElementKind;
/// use wren_html::{HtmlParser, HtmlTokenizer};
///
/// let window = HtmlParser::new(HtmlTokenizer::new("<p>hi</p>")).construct_tree().unwrap();
/// let tree = window.document();
/// let html = tree.document_element().unwrap();
/// assert_eq!(tree.element_kind(html), Some(ElementKind::Html));
/// ```
pub struct HtmlParser {
    tokenizer: HtmlTokenizer,
    window: Window,
    insertion_mode: InsertionMode,
    /// [§ 13.2.4.1](https://html.spec.whatwg.org/multipage/parsing.html#original-insertion-mode)
    ///
    /// "the original insertion mode" to return to when leaving "text".
    original_insertion_mode: Option<InsertionMode>,
    /// [§ 13.2.4.3 The stack of open elements](https://html.spec.whatwg.org/multipage/parsing.html#the-stack-of-open-elements)
    stack_of_open_elements: Vec<NodeId>,
}

impl HtmlParser {
    /// Create a parser that pulls tokens from `tokenizer`.
    #[must_use]
    pub fn new(tokenizer: HtmlTokenizer) -> Self {
        Self {
            tokenizer,
            window: Window::new(),
            insertion_mode: InsertionMode::Initial,
            original_insertion_mode: None,
            stack_of_open_elements: Vec::new(),
        }
    }

    /// Run tree construction to the end of input.
    ///
    /// Stops after the end-of-file token has been dispatched, or when the
    /// tokenizer has nothing more to give.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnknownElement`] for a start tag outside the
    /// element vocabulary. All other malformed input is recovered from.
    pub fn construct_tree(mut self) -> Result<Window, DomError> {
        while let Some(token) = self.tokenizer.next() {
            self.process_token(&token)?;
            if token.is_eof() {
                break;
            }
        }
        Ok(self.window)
    }

    /// The current insertion mode.
    #[must_use]
    pub const fn insertion_mode(&self) -> InsertionMode {
        self.insertion_mode
    }

    /// [§ 13.2.6 Tree construction](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction-dispatcher)
    fn process_token(&mut self, token: &HtmlToken) -> Result<(), DomError> {
        match self.insertion_mode {
            InsertionMode::Initial => self.handle_initial_mode(token),
            InsertionMode::BeforeHtml => self.handle_before_html_mode(token),
            InsertionMode::BeforeHead => self.handle_before_head_mode(token),
            InsertionMode::InHead => self.handle_in_head_mode(token),
            InsertionMode::AfterHead => self.handle_after_head_mode(token),
            InsertionMode::InBody => self.handle_in_body_mode(token),
            InsertionMode::Text => self.handle_text_mode(token),
            InsertionMode::AfterBody => self.handle_after_body_mode(token),
            InsertionMode::AfterAfterBody => {
                self.handle_after_after_body_mode(token);
                Ok(())
            }
        }
    }

    /// "Reprocess the token" in the (new) current insertion mode.
    fn reprocess_token(&mut self, token: &HtmlToken) -> Result<(), DomError> {
        self.process_token(token)
    }

    fn parse_error(&self, token: &HtmlToken) {
        warn_once(
            "HTML Parser",
            &format!("ignored {token} in {} mode", self.insertion_mode),
        );
    }

    // ===== Tree mutation helpers =====

    fn tree(&mut self) -> &mut DomTree {
        self.window.document_mut()
    }

    /// "The current node is the bottommost node in this stack of open elements."
    ///
    /// Falls back to the Document while the stack is empty.
    fn current_node(&self) -> NodeId {
        self.stack_of_open_elements
            .last()
            .copied()
            .unwrap_or(NodeId::ROOT)
    }

    /// [§ 13.2.6.1 Insert an HTML element](https://html.spec.whatwg.org/multipage/parsing.html#insert-an-html-element)
    ///
    /// Creates the element, appends it to the current node and pushes it onto
    /// the stack of open elements.
    fn insert_element(&mut self, tag: &str, attributes: &[Attribute]) -> Result<NodeId, DomError> {
        let element = Element::new(tag, attributes.to_vec())?;
        let parent = self.current_node();
        let id = self.tree().alloc(NodeKind::Element(element));
        self.tree().append_child(parent, id)?;
        self.stack_of_open_elements.push(id);
        Ok(id)
    }

    /// [§ 13.2.6.1 Insert a character](https://html.spec.whatwg.org/multipage/parsing.html#insert-a-character)
    ///
    /// "If there is a Text node immediately before the adjusted insertion
    /// location, then append data to that Text node's data."
    ///
    /// A lone space or newline never starts a new Text node.
    fn insert_character(&mut self, c: char) -> Result<(), DomError> {
        let parent = self.current_node();

        if let Some(last) = self.window.document().last_child(parent)
            && let Some(node) = self.tree().get_mut(last)
            && let NodeKind::Text(text) = &mut node.kind
        {
            text.push(c);
            return Ok(());
        }

        if c == '\n' || c == ' ' {
            return Ok(());
        }

        let id = self.tree().alloc(NodeKind::Text(c.to_string()));
        self.tree().append_child(parent, id)
    }

    fn tag_name_of(&self, id: NodeId) -> Option<&str> {
        self.window
            .document()
            .as_element(id)
            .map(|element| element.kind.as_ref())
    }

    fn has_open_element(&self, tag: &str) -> bool {
        self.stack_of_open_elements
            .iter()
            .any(|&id| self.tag_name_of(id) == Some(tag))
    }

    /// Pop elements until one named `tag` has been popped.
    fn pop_until_tag(&mut self, tag: &str) {
        while let Some(id) = self.stack_of_open_elements.pop() {
            if self.tag_name_of(id) == Some(tag) {
                break;
            }
        }
    }

    /// Insert a `script`, `style` or `title` element and switch to "text".
    ///
    /// [§ 13.2.6.3](https://html.spec.whatwg.org/multipage/parsing.html#generic-raw-text-element-parsing-algorithm)
    /// "Let the original insertion mode be the current insertion mode.
    /// Then, switch the insertion mode to "text"."
    fn insert_text_container(&mut self, tag: &str, attributes: &[Attribute]) -> Result<(), DomError> {
        let _ = self.insert_element(tag, attributes)?;
        if tag != "title" {
            // "Switch the tokenizer to the script data state."
            self.tokenizer.switch_to_script_data();
        }
        self.original_insertion_mode = Some(self.insertion_mode);
        self.insertion_mode = InsertionMode::Text;
        Ok(())
    }

    // ===== Insertion modes =====

    /// [§ 13.2.6.4.1 The "initial" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-initial-insertion-mode)
    fn handle_initial_mode(&mut self, token: &HtmlToken) -> Result<(), DomError> {
        if token.is_whitespace_char() {
            // "Ignore the token."
            return Ok(());
        }
        // "switch the insertion mode to "before html", then reprocess the token."
        self.insertion_mode = InsertionMode::BeforeHtml;
        self.reprocess_token(token)
    }

    /// [§ 13.2.6.4.2 The "before html" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-before-html-insertion-mode)
    fn handle_before_html_mode(&mut self, token: &HtmlToken) -> Result<(), DomError> {
        match token {
            HtmlToken::Char(_) if token.is_whitespace_char() => Ok(()),
            // "A start tag whose tag name is "html""
            HtmlToken::StartTag {
                tag, attributes, ..
            } if tag == "html" => {
                let _ = self.insert_element(tag, attributes)?;
                self.insertion_mode = InsertionMode::BeforeHead;
                Ok(())
            }
            // "An end tag whose tag name is one of: "head", "body", "html", "br""
            // "Act as described in the "anything else" entry below."
            HtmlToken::EndTag { tag } if matches!(tag.as_str(), "head" | "body" | "html" | "br") => {
                self.handle_before_html_anything_else(token)
            }
            // "Any other end tag" - "Parse error. Ignore the token."
            HtmlToken::EndTag { .. } => {
                self.parse_error(token);
                Ok(())
            }
            HtmlToken::Eof => Ok(()),
            _ => self.handle_before_html_anything_else(token),
        }
    }

    /// "Create an html element ... Put this element in the stack of open
    /// elements. Switch the insertion mode to "before head", then reprocess
    /// the token."
    fn handle_before_html_anything_else(&mut self, token: &HtmlToken) -> Result<(), DomError> {
        let _ = self.insert_element("html", &[])?;
        self.insertion_mode = InsertionMode::BeforeHead;
        self.reprocess_token(token)
    }

    /// [§ 13.2.6.4.3 The "before head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-before-head-insertion-mode)
    fn handle_before_head_mode(&mut self, token: &HtmlToken) -> Result<(), DomError> {
        match token {
            HtmlToken::Char(_) if token.is_whitespace_char() => Ok(()),
            // "A start tag whose tag name is "head""
            HtmlToken::StartTag {
                tag, attributes, ..
            } if tag == "head" => {
                let _ = self.insert_element(tag, attributes)?;
                self.insertion_mode = InsertionMode::InHead;
                Ok(())
            }
            HtmlToken::EndTag { tag } if matches!(tag.as_str(), "head" | "body" | "html" | "br") => {
                self.handle_before_head_anything_else(token)
            }
            HtmlToken::EndTag { .. } => {
                self.parse_error(token);
                Ok(())
            }
            HtmlToken::Eof => Ok(()),
            _ => self.handle_before_head_anything_else(token),
        }
    }

    /// "Insert an HTML element for a "head" start tag token with no attributes.
    /// ... Switch the insertion mode to "in head". Reprocess the current token."
    fn handle_before_head_anything_else(&mut self, token: &HtmlToken) -> Result<(), DomError> {
        let _ = self.insert_element("head", &[])?;
        self.insertion_mode = InsertionMode::InHead;
        self.reprocess_token(token)
    }

    /// [§ 13.2.6.4.4 The "in head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inhead)
    fn handle_in_head_mode(&mut self, token: &HtmlToken) -> Result<(), DomError> {
        match token {
            // "A character token that is one of U+0009 CHARACTER TABULATION, U+000A LINE FEED (LF),
            // U+000C FORM FEED (FF), U+000D CARRIAGE RETURN (CR), or U+0020 SPACE"
            // "Insert the character."
            HtmlToken::Char(c) if token.is_whitespace_char() => self.insert_character(*c),
            HtmlToken::StartTag {
                tag, attributes, ..
            } => match tag.as_str() {
                // "A start tag whose tag name is one of: "base", "basefont", "bgsound", "link""
                // "Insert an HTML element for the token. Immediately pop the current node
                // off the stack of open elements."
                "meta" | "link" | "base" => {
                    let _ = self.insert_element(tag, attributes)?;
                    let _ = self.stack_of_open_elements.pop();
                    Ok(())
                }
                "title" | "style" | "script" => self.insert_text_container(tag, attributes),
                // "A start tag whose tag name is "head"" - "Parse error. Ignore the token."
                "head" => {
                    self.parse_error(token);
                    Ok(())
                }
                _ => self.handle_in_head_anything_else(token),
            },
            // "An end tag whose tag name is "head""
            // "Pop the current node (which will be the head element) off the stack of open
            // elements. Switch the insertion mode to "after head"."
            HtmlToken::EndTag { tag } if tag == "head" => {
                let _ = self.stack_of_open_elements.pop();
                self.insertion_mode = InsertionMode::AfterHead;
                Ok(())
            }
            HtmlToken::EndTag { tag } if matches!(tag.as_str(), "body" | "html" | "br") => {
                self.handle_in_head_anything_else(token)
            }
            HtmlToken::EndTag { .. } => {
                self.parse_error(token);
                Ok(())
            }
            HtmlToken::Eof => Ok(()),
            HtmlToken::Char(_) => self.handle_in_head_anything_else(token),
        }
    }

    /// "Pop the current node (which will be the head element) off the stack of
    /// open elements. Switch the insertion mode to "after head". Reprocess the
    /// token."
    fn handle_in_head_anything_else(&mut self, token: &HtmlToken) -> Result<(), DomError> {
        let _ = self.stack_of_open_elements.pop();
        self.insertion_mode = InsertionMode::AfterHead;
        self.reprocess_token(token)
    }

    /// [§ 13.2.6.4.6 The "after head" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-after-head-insertion-mode)
    fn handle_after_head_mode(&mut self, token: &HtmlToken) -> Result<(), DomError> {
        match token {
            HtmlToken::Char(c) if token.is_whitespace_char() => self.insert_character(*c),
            // "A start tag whose tag name is "body""
            // "Insert an HTML element for the token. ... Switch the insertion mode to "in body"."
            HtmlToken::StartTag {
                tag, attributes, ..
            } if tag == "body" => {
                let _ = self.insert_element(tag, attributes)?;
                self.insertion_mode = InsertionMode::InBody;
                Ok(())
            }
            HtmlToken::EndTag { tag } if matches!(tag.as_str(), "body" | "html" | "br") => {
                self.handle_after_head_anything_else(token)
            }
            HtmlToken::EndTag { .. } => {
                self.parse_error(token);
                Ok(())
            }
            HtmlToken::Eof => Ok(()),
            _ => self.handle_after_head_anything_else(token),
        }
    }

    /// "Insert an HTML element for a "body" start tag token with no attributes.
    /// Switch the insertion mode to "in body". Reprocess the current token."
    fn handle_after_head_anything_else(&mut self, token: &HtmlToken) -> Result<(), DomError> {
        let _ = self.insert_element("body", &[])?;
        self.insertion_mode = InsertionMode::InBody;
        self.reprocess_token(token)
    }

    /// [§ 13.2.6.4.7 The "in body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-inbody)
    fn handle_in_body_mode(&mut self, token: &HtmlToken) -> Result<(), DomError> {
        match token {
            HtmlToken::Char(c) => self.insert_character(*c),
            HtmlToken::StartTag {
                tag,
                self_closing,
                attributes,
            } => match tag.as_str() {
                // "A start tag whose tag name is "html"" / "body" - "Parse error."
                "html" | "head" | "body" => {
                    self.parse_error(token);
                    Ok(())
                }
                // "A start tag whose tag name is one of: ... "script", "style", "title""
                // "Process the token using the rules for the "in head" insertion mode."
                "script" | "style" | "title" => self.insert_text_container(tag, attributes),
                _ => {
                    let id = self.insert_element(tag, attributes)?;
                    let is_void = self
                        .window
                        .document()
                        .element_kind(id)
                        .is_some_and(|kind| kind.is_void());
                    // "Immediately pop the current node off the stack of open elements."
                    if is_void || *self_closing {
                        let _ = self.stack_of_open_elements.pop();
                    }
                    Ok(())
                }
            },
            // "An end tag whose tag name is "body""
            // "If the stack of open elements does not have a body element in scope, this is
            // a parse error; ignore the token." "Switch the insertion mode to "after body"."
            HtmlToken::EndTag { tag } if tag == "body" => {
                if self.has_open_element("body") {
                    self.insertion_mode = InsertionMode::AfterBody;
                } else {
                    self.parse_error(token);
                }
                Ok(())
            }
            // "An end tag whose tag name is "html"" - "Switch the insertion mode to
            // "after body". Reprocess the token."
            HtmlToken::EndTag { tag } if tag == "html" => {
                if self.has_open_element("body") {
                    self.insertion_mode = InsertionMode::AfterBody;
                    self.reprocess_token(token)
                } else {
                    self.parse_error(token);
                    Ok(())
                }
            }
            // "Any other end tag" - pop up to and including the matching element.
            HtmlToken::EndTag { tag } => {
                if self.has_open_element(tag) {
                    self.pop_until_tag(tag);
                } else {
                    self.parse_error(token);
                }
                Ok(())
            }
            // "An end-of-file token" - "Stop parsing."
            HtmlToken::Eof => Ok(()),
        }
    }

    /// [§ 13.2.6.4.8 The "text" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-incdata)
    fn handle_text_mode(&mut self, token: &HtmlToken) -> Result<(), DomError> {
        match token {
            // "A character token" - "Insert the token's character."
            HtmlToken::Char(c) => self.insert_character(*c),
            // An end tag that does not close the raw text element is dropped.
            // Only `title` gets here; script data never emits one.
            HtmlToken::EndTag { tag }
                if self.tag_name_of(self.current_node()) != Some(tag.as_str()) =>
            {
                self.parse_error(token);
                Ok(())
            }
            // "An end-of-file token" - "Parse error. ... Pop the current node off the stack
            // of open elements. Switch the insertion mode to the original insertion mode."
            // "Any other end tag" - "Pop the current node off the stack of open elements.
            // Switch the insertion mode to the original insertion mode."
            HtmlToken::EndTag { .. } | HtmlToken::Eof => {
                let _ = self.stack_of_open_elements.pop();
                self.insertion_mode = self
                    .original_insertion_mode
                    .take()
                    .unwrap_or(InsertionMode::InBody);
                Ok(())
            }
            HtmlToken::StartTag { .. } => {
                self.parse_error(token);
                Ok(())
            }
        }
    }

    /// [§ 13.2.6.4.19 The "after body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#parsing-main-afterbody)
    fn handle_after_body_mode(&mut self, token: &HtmlToken) -> Result<(), DomError> {
        match token {
            // "Process the token using the rules for the "in body" insertion mode."
            HtmlToken::Char(c) if token.is_whitespace_char() => self.insert_character(*c),
            // "An end tag whose tag name is "html"" - "Switch the insertion mode to
            // "after after body"."
            HtmlToken::EndTag { tag } if tag == "html" => {
                self.pop_until_tag("html");
                self.insertion_mode = InsertionMode::AfterAfterBody;
                Ok(())
            }
            HtmlToken::Eof => Ok(()),
            // "Anything else" - "Parse error. Switch the insertion mode to "in body" and
            // reprocess the token."
            _ => {
                self.insertion_mode = InsertionMode::InBody;
                self.reprocess_token(token)
            }
        }
    }

    /// [§ 13.2.6.4.22 The "after after body" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-after-after-body-insertion-mode)
    ///
    /// The html element has already been popped, so content here has nowhere
    /// to go and is dropped.
    fn handle_after_after_body_mode(&self, token: &HtmlToken) {
        if !token.is_whitespace_char() && !token.is_eof() {
            self.parse_error(token);
        }
    }
}

/// Render a subtree as an indented outline, one node per line.
#[must_use]
pub fn format_tree(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    write_tree(&mut out, tree, id, 0);
    out
}

/// Print a subtree as an indented outline.
pub fn print_tree(tree: &DomTree, id: NodeId, indent: usize) {
    let mut out = String::new();
    write_tree(&mut out, tree, id, indent);
    print!("{out}");
}

fn write_tree(out: &mut String, tree: &DomTree, id: NodeId, indent: usize) {
    let prefix = "  ".repeat(indent);
    let Some(node) = tree.get(id) else {
        return;
    };
    let _ = match &node.kind {
        NodeKind::Document => writeln!(out, "{prefix}Document"),
        NodeKind::Element(element) => {
            let mut line = format!("{prefix}<{}", element.kind);
            for attribute in &element.attributes {
                if attribute.value.is_empty() {
                    let _ = write!(line, " {}", attribute.name);
                } else {
                    let _ = write!(line, " {}=\"{}\"", attribute.name, attribute.value);
                }
            }
            writeln!(out, "{line}>")
        }
        NodeKind::Text(data) => {
            let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
            writeln!(out, "{prefix}\"{display}\"")
        }
    };
    for child in tree.children(id) {
        write_tree(out, tree, child, indent + 1);
    }
}
