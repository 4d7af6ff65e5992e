//! Style values and the declared-to-computed style pipeline.
//!
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//! - [CSS Display Module Level 3](https://www.w3.org/TR/css-display-3/)
//! - [CSS Cascading Level 4 § 7 Defaulting](https://www.w3.org/TR/css-cascade-4/#defaulting)

mod color;
pub mod computed;
mod values;

pub use color::Color;
pub use computed::{ComputedStyle, DeclaredStyle};
pub use values::{DisplayType, FontSize, TextDecoration};
