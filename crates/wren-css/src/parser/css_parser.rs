//! CSS Parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
//!
//! "The input to the parsing stage is a stream of tokens from the tokenization stage."
//! Only qualified rules with a single simple selector are kept.

use serde::Serialize;
use wren_common::warning::warn_once;

use crate::error::CssError;
use crate::selector::Selector;
use crate::tokenizer::CssToken;

/// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
///
/// A CSS declaration (e.g., `color: red`). The value is a single token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    /// The property name.
    pub property: String,
    /// The property value.
    pub value: CssToken,
}

/// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-a-qualified-rule)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QualifiedRule {
    /// The rule's selector; the last one read before `{` wins.
    pub selector: Selector,
    /// Declarations in source order.
    pub declarations: Vec<Declaration>,
}

/// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
///
/// Rules are kept in source order so later rules win during the cascade.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleSheet {
    /// The list of rules in the stylesheet.
    pub rules: Vec<QualifiedRule>,
}

/// CSS parser over a materialized token list.
///
/// ```
/// use wren_css::{CssParser, CssTokenizer, Selector};
///
/// let mut tokenizer = CssTokenizer::new("#top { display: none; }");
/// tokenizer.run().unwrap();
/// let sheet = CssParser::new(tokenizer.into_tokens()).parse_stylesheet().unwrap();
/// assert_eq!(sheet.rules[0].selector, Selector::IdSelector("top".to_string()));
/// ```
pub struct CssParser {
    tokens: Vec<CssToken>,
    position: usize,
}

impl CssParser {
    /// Create a new parser from a list of tokens.
    #[must_use]
    pub const fn new(tokens: Vec<CssToken>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
    ///
    /// # Errors
    ///
    /// Returns [`CssError::UnexpectedEof`] when input ends where a
    /// declaration value or class name is required, and
    /// [`CssError::UnexpectedToken`] when a class name is not an identifier.
    pub fn parse_stylesheet(&mut self) -> Result<StyleSheet, CssError> {
        let rules = self.consume_list_of_rules()?;
        Ok(StyleSheet { rules })
    }

    /// [§ 5.4.1 Consume a list of rules](https://www.w3.org/TR/css-syntax-3/#consume-list-of-rules)
    fn consume_list_of_rules(&mut self) -> Result<Vec<QualifiedRule>, CssError> {
        // "Create an initially empty list of rules."
        let mut rules = Vec::new();

        loop {
            match self.peek() {
                // "<EOF-token>" - "Return the list of rules."
                None => return Ok(rules),
                // "<at-keyword-token>": at-rules are not supported, the rule
                // that follows is read and dropped.
                Some(CssToken::AtKeyword(keyword)) => {
                    warn_once("CSS Parser", &format!("ignored @{keyword} rule"));
                    let _ = self.consume_qualified_rule()?;
                }
                // "anything else" - "Consume a qualified rule. If anything is
                // returned, append it to the list of rules."
                Some(_) => match self.consume_qualified_rule()? {
                    Some(rule) => rules.push(rule),
                    None => return Ok(rules),
                },
            }
        }
    }

    /// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-qualified-rule)
    ///
    /// Returns `None` if input ends before the rule's `{`.
    fn consume_qualified_rule(&mut self) -> Result<Option<QualifiedRule>, CssError> {
        let mut rule = QualifiedRule::default();

        loop {
            match self.peek() {
                // "<EOF-token>" - "This is a parse error. Return nothing."
                None => return Ok(None),
                // "<{-token>" - "Consume a block and assign it to the
                // qualified rule's block. Return the qualified rule."
                Some(CssToken::OpenCurly) => {
                    let _ = self.consume();
                    rule.declarations = self.consume_list_of_declarations()?;
                    return Ok(Some(rule));
                }
                // "anything else" - the prelude; here a single selector.
                Some(_) => rule.selector = self.consume_selector()?,
            }
        }
    }

    /// Read one simple selector from the rule prelude.
    fn consume_selector(&mut self) -> Result<Selector, CssError> {
        let token = self.consume_component_value("selector")?;

        match token {
            // "#id" - the hash value without its '#'.
            CssToken::HashToken(value) => {
                let name = value.strip_prefix('#').unwrap_or(&value).to_string();
                Ok(Selector::IdSelector(name))
            }
            CssToken::Delim('.') => Ok(Selector::ClassSelector(self.consume_ident()?)),
            CssToken::Delim(_) => Ok(Selector::UnknownSelector),
            CssToken::Ident(ident) => {
                // Pseudo-classes are not supported: "a:hover" is read as "a".
                if self.peek() == Some(&CssToken::Colon) {
                    self.skip_to_open_curly();
                }
                Ok(Selector::TypeSelector(ident))
            }
            CssToken::AtKeyword(_) => {
                self.skip_to_open_curly();
                Ok(Selector::UnknownSelector)
            }
            _ => Ok(Selector::UnknownSelector),
        }
    }

    /// [§ 5.4.5 Consume a list of declarations](https://www.w3.org/TR/css-syntax-3/#consume-list-of-declarations)
    ///
    /// Reads up to and including the closing `}`.
    fn consume_list_of_declarations(&mut self) -> Result<Vec<Declaration>, CssError> {
        let mut declarations = Vec::new();

        loop {
            match self.peek() {
                None => return Ok(declarations),
                Some(CssToken::CloseCurly) => {
                    let _ = self.consume();
                    return Ok(declarations);
                }
                // "<semicolon-token>" - "Do nothing."
                Some(CssToken::SemiColon) => {
                    let _ = self.consume();
                }
                // "<ident-token>" - "Consume a declaration. If anything was
                // returned, append it to the list of declarations."
                Some(CssToken::Ident(_)) => {
                    if let Some(declaration) = self.consume_declaration()? {
                        declarations.push(declaration);
                    }
                }
                // "anything else" - "This is a parse error."
                Some(_) => {
                    let _ = self.consume();
                }
            }
        }
    }

    /// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
    ///
    /// Returns `None` at end of input or when no colon follows the name.
    fn consume_declaration(&mut self) -> Result<Option<Declaration>, CssError> {
        if self.peek().is_none() {
            return Ok(None);
        }

        let property = self.consume_ident()?;

        // "If the next input token is anything other than a <colon-token>,
        // this is a parse error. Return nothing."
        match self.consume() {
            Some(CssToken::Colon) => {}
            _ => {
                warn_once(
                    "CSS Parser",
                    &format!("dropped declaration '{property}' without a colon"),
                );
                return Ok(None);
            }
        }

        let value = self.consume_component_value("declaration value")?;
        Ok(Some(Declaration { property, value }))
    }

    /// [§ 5.4.7 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
    ///
    /// A component value is always a single token here.
    fn consume_component_value(&mut self, expected: &'static str) -> Result<CssToken, CssError> {
        self.consume()
            .cloned()
            .ok_or(CssError::UnexpectedEof { expected })
    }

    fn consume_ident(&mut self) -> Result<String, CssError> {
        match self.consume() {
            Some(CssToken::Ident(ident)) => Ok(ident.clone()),
            Some(other) => Err(CssError::UnexpectedToken {
                expected: "identifier",
                found: other.to_string(),
            }),
            None => Err(CssError::UnexpectedEof {
                expected: "identifier",
            }),
        }
    }

    /// Skip tokens up to, not including, the next `{`.
    fn skip_to_open_curly(&mut self) {
        while let Some(token) = self.peek() {
            if *token == CssToken::OpenCurly {
                break;
            }
            let _ = self.consume();
        }
    }

    fn consume(&mut self) -> Option<&CssToken> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    fn peek(&self) -> Option<&CssToken> {
        self.tokens.get(self.position)
    }
}
