//! GUI-specific constants for layout, colors and timing

use egui;

/// Per-user window dimensions (fixed)
pub const WINDOW_WIDTH: f32 = 350.0;
pub const WINDOW_HEIGHT: f32 = 250.0;

/// Overlay window dimensions
pub const OVERLAY_WIDTH: f32 = 300.0;
pub const OVERLAY_HEIGHT: f32 = 340.0;

/// Height of the custom title bar; the collapsed window keeps only this
pub const TITLE_BAR_HEIGHT: f32 = 25.0;

/// Selector strip
pub const SELECTOR_WIDTH: f32 = 100.0;
pub const SELECTOR_ROWS: usize = 6;
pub const SELECTOR_BUTTON_WIDTH: f32 = 80.0;

/// Layout spacing
pub const PADDING: f32 = 10.0;
pub const ITEM_SPACING: f32 = 4.0;
pub const SECTION_SPACING: f32 = 8.0;
pub const CAPTION_HEIGHT: f32 = 18.0;
pub const SMALL_TEXT_SIZE: f32 = 11.0;

/// Palette
pub const TITLE_BAR_BG: egui::Color32 = egui::Color32::from_rgb(0x2c, 0x3e, 0x50);
pub const CONTENT_BG: egui::Color32 = egui::Color32::from_rgb(0xf0, 0xf0, 0xf1);
pub const CONTROL_BG: egui::Color32 = egui::Color32::from_rgb(0xec, 0xf0, 0xf1);
pub const DISPLAY_BG: egui::Color32 = egui::Color32::WHITE;
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x34, 0x98, 0xdb);
pub const INACTIVE: egui::Color32 = egui::Color32::from_rgb(0x95, 0xa5, 0xa6);
pub const ADD_GREEN: egui::Color32 = egui::Color32::from_rgb(0x2e, 0xcc, 0x71);
pub const DELETE_RED: egui::Color32 = egui::Color32::from_rgb(0xe7, 0x4c, 0x3c);
pub const NAV_PURPLE: egui::Color32 = egui::Color32::from_rgb(0x9b, 0x59, 0xb6);
pub const TEXT_DARK: egui::Color32 = egui::Color32::from_rgb(0x2c, 0x3e, 0x50);

/// Alpha applied to overlay panels (semi-transparent window)
pub const OVERLAY_ALPHA: u8 = 0xD9;

/// Delay of the one-shot repaint after the window is realized
pub const INITIAL_REFRESH_DELAY_MS: u64 = 100;

pub const EMPTY_PLACEHOLDER: &str = "No codes yet\nUse Add to register one";
