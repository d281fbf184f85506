use eframe::egui::Color32;

/// Dashboard accent colors, shared across the panels.
pub const BLUE: Color32 = Color32::from_rgb(15, 140, 198);
pub const NAVY: Color32 = Color32::from_rgb(11, 60, 93);
pub const AMBER: Color32 = Color32::from_rgb(246, 185, 59);
pub const SLATE: Color32 = Color32::from_rgb(52, 73, 94);
