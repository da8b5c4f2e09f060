//! # GUI Theme
//!
//! Dark SuperCarz palette for egui: near-black backdrop, white text, blue
//! accent, with semantic colors for status and the exploit highlight.

use egui::Color32;

/// Fixed color palette for the widget
pub struct Theme {
    /// Page backdrop behind the widget
    pub background: Color32,
    /// Widget panel fill
    pub panel: Color32,
    /// Primary text
    pub text: Color32,
    /// Brand accent (bubble, send button)
    pub accent: Color32,
    /// User message tint
    pub user: Color32,
    /// Assistant message tint
    pub assistant: Color32,
    /// Success green
    pub success: Color32,
    /// Warning amber (exploit highlight)
    pub warning: Color32,
    /// Error red
    pub error: Color32,
    /// Dim gray for secondary text and inactive badges
    pub dim: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(12, 12, 16),
            panel: Color32::from_rgb(24, 24, 32),
            text: Color32::from_rgb(235, 235, 240),
            accent: Color32::from_rgb(70, 130, 255),
            user: Color32::from_rgb(120, 170, 255),
            assistant: Color32::from_rgb(200, 200, 210),
            success: Color32::from_rgb(0, 200, 90),
            warning: Color32::from_rgb(255, 170, 0),
            error: Color32::from_rgb(255, 80, 80),
            dim: Color32::from_rgb(130, 130, 140),
        }
    }
}
