//! Display list: the flat paint output handed to a rasterizer.

mod display_item;
mod painter;

pub use display_item::DisplayItem;
