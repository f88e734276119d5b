//! Shared color constants for the UI.

use egui::Color32;

/// Red used for the error banner text and border.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Faint red fill behind the error banner.
pub const COLOR_RED_BG: Color32 = Color32::from_rgba_premultiplied(220, 53, 69, 24);

/// Amber for the "search pending" hint.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Subtle gray for table borders.
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);
