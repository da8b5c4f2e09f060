//! # Suggestion Chips
//!
//! Quick-suggestion chip row under the input. A chip click submits its full
//! stored phrase, not the elided label.

use crate::app::SuggestionChip;
use crate::ui::theme::Theme;
use egui;

/// Render the chip row. Returns the full phrase of a clicked chip.
pub fn render_suggestions(
    ui: &mut egui::Ui,
    chips: &[SuggestionChip],
    enabled: bool,
    theme: &Theme,
) -> Option<String> {
    let mut clicked = None;

    ui.horizontal_wrapped(|ui| {
        for chip in chips {
            let button = egui::Button::new(
                egui::RichText::new(&chip.label).size(11.0).color(theme.text),
            );
            if ui
                .add_enabled(enabled, button)
                .on_hover_text(&chip.phrase)
                .clicked()
            {
                clicked = Some(chip.phrase.clone());
            }
        }
    });

    clicked
}
