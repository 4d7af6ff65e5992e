//! Declared and computed style.
//!
//! [§ 4 Value Processing](https://www.w3.org/TR/css-cascade-4/#value-stages)
//!
//! The cascade writes into a [`DeclaredStyle`], where every property may be
//! unset. [`DeclaredStyle::defaulting`] resolves it into a [`ComputedStyle`],
//! where every property has a value.

use core::str::FromStr;

use serde::Serialize;
use wren_common::warning::warn_once;
use wren_dom::{DomTree, NodeId};

use super::color::Color;
use super::values::{DisplayType, FontSize, TextDecoration};
use crate::parser::Declaration;
use crate::tokenizer::CssToken;

/// [§ 4.2 Declared Values](https://www.w3.org/TR/css-cascade-4/#declared)
///
/// Style being assembled from matching declarations. `None` means the
/// property has not been declared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclaredStyle {
    /// `background-color`
    pub background_color: Option<Color>,
    /// `color`
    pub color: Option<Color>,
    /// `display`
    pub display: Option<DisplayType>,
    /// `font-size`
    pub font_size: Option<FontSize>,
    /// `text-decoration`
    pub text_decoration: Option<TextDecoration>,
    /// `width` in pixels
    pub width: Option<f64>,
    /// `height` in pixels
    pub height: Option<f64>,
}

impl DeclaredStyle {
    /// [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)
    ///
    /// Apply declarations in order; a later declaration of the same
    /// property overwrites an earlier one. Unparsable values fall back to
    /// a safe default with a warning; unknown properties are ignored.
    pub fn cascading_style(&mut self, declarations: &[Declaration]) {
        for declaration in declarations {
            match declaration.property.as_str() {
                "background-color" => {
                    self.background_color = Some(parse_color(&declaration.value, Color::white));
                }
                "color" => {
                    self.color = Some(parse_color(&declaration.value, Color::black));
                }
                "display" => {
                    let display = keyword_text(&declaration.value)
                        .and_then(|value| DisplayType::from_str(value).ok())
                        .unwrap_or_else(|| {
                            warn_once(
                                "CSS Cascade",
                                &format!("unsupported display {}", declaration.value),
                            );
                            DisplayType::DisplayNone
                        });
                    self.display = Some(display);
                }
                "text-decoration" => {
                    if let CssToken::Ident(value) = &declaration.value {
                        match TextDecoration::from_str(value) {
                            Ok(decoration) => self.text_decoration = Some(decoration),
                            Err(_) => warn_once(
                                "CSS Cascade",
                                &format!("unsupported text-decoration '{value}'"),
                            ),
                        }
                    }
                }
                other => {
                    warn_once("CSS Cascade", &format!("unsupported property '{other}'"));
                }
            }
        }
    }

    /// [§ 7 Defaulting](https://www.w3.org/TR/css-cascade-4/#defaulting)
    ///
    /// Fill every undeclared property. Inherited properties take the
    /// parent's value when it differs from the initial value; `display` is
    /// never inherited. Whatever is still unset gets the node's default.
    #[must_use]
    pub fn defaulting(
        mut self,
        tree: &DomTree,
        node: NodeId,
        parent: Option<&ComputedStyle>,
    ) -> ComputedStyle {
        if let Some(parent) = parent {
            if self.background_color.is_none() && parent.background_color != Color::white() {
                self.background_color = Some(parent.background_color.clone());
            }
            if self.color.is_none() && parent.color != Color::black() {
                self.color = Some(parent.color.clone());
            }
            if self.font_size.is_none() && parent.font_size != FontSize::Medium {
                self.font_size = Some(parent.font_size);
            }
            if self.text_decoration.is_none() && parent.text_decoration != TextDecoration::None {
                self.text_decoration = Some(parent.text_decoration);
            }
        }

        ComputedStyle {
            background_color: self.background_color.unwrap_or_else(Color::white),
            color: self.color.unwrap_or_else(Color::black),
            display: self
                .display
                .unwrap_or_else(|| DisplayType::default_for(tree, node)),
            font_size: self
                .font_size
                .unwrap_or_else(|| FontSize::default_for(tree, node)),
            text_decoration: self
                .text_decoration
                .unwrap_or_else(|| TextDecoration::default_for(tree, node)),
            width: self.width.unwrap_or(0.0),
            height: self.height.unwrap_or(0.0),
        }
    }
}

impl From<&ComputedStyle> for DeclaredStyle {
    fn from(style: &ComputedStyle) -> Self {
        Self {
            background_color: Some(style.background_color.clone()),
            color: Some(style.color.clone()),
            display: Some(style.display),
            font_size: Some(style.font_size),
            text_decoration: Some(style.text_decoration),
            width: Some(style.width),
            height: Some(style.height),
        }
    }
}

/// [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
///
/// Fully resolved style. Only [`DeclaredStyle::defaulting`] creates one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedStyle {
    background_color: Color,
    color: Color,
    display: DisplayType,
    font_size: FontSize,
    text_decoration: TextDecoration,
    width: f64,
    height: f64,
}

impl ComputedStyle {
    /// `background-color`
    #[must_use]
    pub const fn background_color(&self) -> &Color {
        &self.background_color
    }

    /// `color`
    #[must_use]
    pub const fn color(&self) -> &Color {
        &self.color
    }

    /// `display`
    #[must_use]
    pub const fn display(&self) -> DisplayType {
        self.display
    }

    /// `font-size`
    #[must_use]
    pub const fn font_size(&self) -> FontSize {
        self.font_size
    }

    /// `text-decoration`
    #[must_use]
    pub const fn text_decoration(&self) -> TextDecoration {
        self.text_decoration
    }

    /// `width`
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// `height`
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
}

/// The text of a keyword-like value token.
fn keyword_text(value: &CssToken) -> Option<&str> {
    match value {
        CssToken::Ident(text) | CssToken::HashToken(text) | CssToken::StringToken(text) => {
            Some(text.as_str())
        }
        _ => None,
    }
}

/// Read a color from a name or `#rrggbb` code.
///
/// Anything else, including non-text tokens, yields `fallback()`.
fn parse_color(value: &CssToken, fallback: fn() -> Color) -> Color {
    let color = keyword_text(value).and_then(|text| {
        if text.starts_with('#') {
            Color::from_code(text)
        } else {
            Color::from_name(text)
        }
    });
    color.unwrap_or_else(|| {
        warn_once("CSS Cascade", &format!("unsupported color {value}"));
        fallback()
    })
}
