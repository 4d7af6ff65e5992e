//! Fixed geometry of the browser window, in pixels.

/// Outer window width.
pub const WINDOW_WIDTH: i64 = 600;
/// Outer window height.
pub const WINDOW_HEIGHT: i64 = 400;
/// Padding around the content area.
pub const WINDOW_PADDING: i64 = 5;

/// Height of the window title bar.
pub const TITLE_BAR_HEIGHT: i64 = 24;
/// Height of the address toolbar.
pub const TOOLBAR_HEIGHT: i64 = 26;

/// Width available to page content.
pub const CONTENT_AREA_WIDTH: i64 = WINDOW_WIDTH - WINDOW_PADDING * 2;
/// Height available to page content.
pub const CONTENT_AREA_HEIGHT: i64 =
    WINDOW_HEIGHT - TITLE_BAR_HEIGHT - TOOLBAR_HEIGHT - WINDOW_PADDING * 2;

/// Advance of one character at medium size.
pub const CHAR_WIDTH: i64 = 8;
/// Glyph height at medium size.
pub const CHAR_HEIGHT: i64 = 16;
/// Line height at medium size.
pub const CHAR_HEIGHT_WITH_PADDING: i64 = CHAR_HEIGHT + 4;
