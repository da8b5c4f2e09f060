//! # System Prompt Panel
//!
//! Reveal panel for the backend's system prompt, shown once `/get_context`
//! has been fetched and until the conversation is reset.

use crate::ui::theme::Theme;
use egui;

/// Render the revealed system prompt.
pub fn render_prompt_panel(ui: &mut egui::Ui, prompt: &str, theme: &Theme) {
    ui.group(|ui| {
        ui.colored_label(theme.warning, "Leaked System Prompt");
        ui.add(
            egui::Label::new(
                egui::RichText::new(prompt)
                    .family(egui::FontFamily::Monospace)
                    .size(11.0)
                    .color(theme.dim),
            )
            .wrap(),
        );
    });
}
