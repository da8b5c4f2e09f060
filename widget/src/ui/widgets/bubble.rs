//! # Chat Bubble
//!
//! Floating launcher shown while the widget is minimized, with the attention
//! notification dot.

use crate::ui::theme::Theme;
use egui;

/// Render the floating bubble. Returns true when clicked.
pub fn render_bubble(ui: &mut egui::Ui, notification: bool, theme: &Theme) -> bool {
    let button = egui::Button::new(egui::RichText::new("💬").size(24.0)).fill(theme.accent);
    let response = ui.add_sized([56.0, 56.0], button);

    if notification {
        // Attention dot pinned to the bubble's corner
        let center = response.rect.right_top() + egui::vec2(-6.0, 6.0);
        ui.painter().circle_filled(center, 5.0, theme.error);
    }

    response.clicked()
}
