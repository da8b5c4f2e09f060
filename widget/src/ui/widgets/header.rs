//! # Widget Header
//!
//! Title row with the expand/collapse and minimize controls.

use crate::ui::theme::Theme;
use egui;

/// Clicks collected from the header controls
#[derive(Default)]
pub struct HeaderResponse {
    pub minimize_clicked: bool,
    pub expand_clicked: bool,
}

/// Render the header row.
pub fn render_header(
    ui: &mut egui::Ui,
    title: &str,
    expanded: bool,
    theme: &Theme,
) -> HeaderResponse {
    let mut response = HeaderResponse::default();

    ui.horizontal(|ui| {
        ui.colored_label(theme.accent, egui::RichText::new(title).strong());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button("—")
                .on_hover_text("Minimize")
                .clicked()
            {
                response.minimize_clicked = true;
            }

            // The glyph and tooltip swap with the expanded state
            let (glyph, hover) = if expanded { ("⤡", "Collapse") } else { ("⤢", "Expand") };
            if ui.button(glyph).on_hover_text(hover).clicked() {
                response.expand_clicked = true;
            }
        });
    });

    response
}
