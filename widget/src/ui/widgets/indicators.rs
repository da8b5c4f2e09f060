//! # Exploit Indicator Badges
//!
//! Badge row visualizing the security-demo heuristics. An active badge burns
//! red until the conversation is reset.

use crate::app::indicators::{IndicatorKind, IndicatorSet};
use crate::ui::theme::Theme;
use egui;

/// Render the indicator badge row.
pub fn render_indicator_row(ui: &mut egui::Ui, set: &IndicatorSet, theme: &Theme) {
    ui.horizontal(|ui| {
        for kind in IndicatorKind::all() {
            if set.is_active(*kind) {
                ui.colored_label(theme.error, format!("● {}", kind.label()));
            } else {
                ui.colored_label(theme.dim, format!("○ {}", kind.label()));
            }
        }
    });
}
