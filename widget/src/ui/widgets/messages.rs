//! # Message List
//!
//! Scrollable conversation transcript with the animated typing row.

use crate::app::{ChatMessage, MessageSender};
use crate::ui::theme::Theme;
use egui;

/// Render the transcript. While `typing` is set a trailing animated dots row
/// stands in for the pending assistant reply.
pub fn render_messages(
    ui: &mut egui::Ui,
    messages: &[ChatMessage],
    typing: bool,
    max_height: f32,
    theme: &Theme,
) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .max_height(max_height)
        .show(ui, |ui| {
            for message in messages {
                render_message(ui, message, theme);
            }

            if typing {
                render_typing_row(ui, theme);
            }
        });
}

fn render_message(ui: &mut egui::Ui, message: &ChatMessage, theme: &Theme) {
    ui.horizontal_top(|ui| {
        ui.label(message.sender.avatar());
        ui.vertical(|ui| {
            let color = match message.sender {
                MessageSender::User => theme.user,
                MessageSender::Assistant => theme.assistant,
            };
            ui.add(egui::Label::new(egui::RichText::new(&message.text).color(color)).wrap());

            if message.exploited {
                ui.colored_label(theme.warning, "⚠ exploited");
            }
        });
    });
    ui.add_space(6.0);
}

fn render_typing_row(ui: &mut egui::Ui, theme: &Theme) {
    // Animate typing dots: ".", "..", "...", pause (cycles every 2 seconds)
    let current_time = ui.ctx().input(|i| i.time);
    let animation_phase = ((current_time * 2.0) as usize) % 4;
    let typing_dots = match animation_phase {
        0 => ".",
        1 => "..",
        2 => "...",
        _ => "   ",
    };

    ui.horizontal(|ui| {
        ui.label(MessageSender::Assistant.avatar());
        ui.colored_label(theme.dim, typing_dots);
    });
}
