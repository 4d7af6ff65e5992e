//! CSS colors: a small named-color table and `#rrggbb` codes.

use serde::Serialize;

/// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
///
/// The supported subset, with their six-digit hex codes.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("silver", "#c0c0c0"),
    ("gray", "#808080"),
    ("white", "#ffffff"),
    ("maroon", "#800000"),
    ("red", "#ff0000"),
    ("purple", "#800080"),
    ("fuchsia", "#ff00ff"),
    ("green", "#008000"),
    ("lime", "#00ff00"),
    ("olive", "#808000"),
    ("yellow", "#ffff00"),
    ("navy", "#000080"),
    ("blue", "#0000ff"),
    ("teal", "#008080"),
    ("aqua", "#00ffff"),
    ("orange", "#ffa500"),
    ("lightgray", "#d3d3d3"),
];

/// A color with its lowercase `#rrggbb` code and, when it has one, its name.
///
/// Two colors are equal when their codes are equal.
#[derive(Debug, Clone, Eq, Serialize)]
pub struct Color {
    name: Option<String>,
    code: String,
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Color {
    /// Look up a named color. Names are matched case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(name, code)| Self {
                name: Some((*name).to_string()),
                code: (*code).to_string(),
            })
    }

    /// [§ 5.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// Only the six-digit form `#rrggbb` is accepted.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let digits = code.strip_prefix('#')?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let code = code.to_ascii_lowercase();
        let name = NAMED_COLORS
            .iter()
            .find(|(_, candidate)| *candidate == code)
            .map(|(name, _)| (*name).to_string());
        Some(Self { name, code })
    }

    /// Initial value of `background-color` in this engine.
    #[must_use]
    pub fn white() -> Self {
        Self {
            name: Some("white".to_string()),
            code: "#ffffff".to_string(),
        }
    }

    /// Initial value of `color`.
    #[must_use]
    pub fn black() -> Self {
        Self {
            name: Some("black".to_string()),
            code: "#000000".to_string(),
        }
    }

    /// The color's name, if it is in the named-color table.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The `#rrggbb` code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The code as a `0xRRGGBB` integer, the form rasterizers take.
    #[must_use]
    pub fn code_u32(&self) -> u32 {
        u32::from_str_radix(self.code.trim_start_matches('#'), 16).unwrap_or(0)
    }
}
