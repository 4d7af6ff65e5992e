//! Layout tree construction and geometry.

/// Window and text metrics.
pub mod constants;
mod layout_object;
mod layout_view;
mod text;

pub use layout_object::{LayoutId, LayoutObject, LayoutObjectKind, LayoutPoint, LayoutSize};
pub use layout_view::LayoutView;
pub use text::{collapse_whitespace, split_text};
