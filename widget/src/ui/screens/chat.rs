//! # Chat Screen
//!
//! Per-frame composition: the page backdrop, then either the floating bubble
//! (minimized) or the full chat panel. UI actions are collected while the
//! state lock is held and dispatched to the [`App`] after it is released.

use crate::app::{App, WidgetVariant};
use crate::ui::theme::Theme;
use crate::ui::widgets::{bubble, header, indicators, messages, prompt_panel, suggestions};
use egui;

/// Showroom backdrop vehicles; a click pre-fills an interest message
const VEHICLES: &[&str] = &["Silverado", "Equinox", "Malibu"];

/// Regular and expanded panel sizes
const PANEL_SIZE: [f32; 2] = [320.0, 460.0];
const PANEL_SIZE_EXPANDED: [f32; 2] = [440.0, 620.0];

/// UI actions collected during a frame, dispatched after the lock drops
#[derive(Default)]
struct UiActions {
    toggle: bool,
    expand: bool,
    send: bool,
    reset: bool,
    toggle_security: bool,
    show_prompt: bool,
    suggestion: Option<String>,
    vehicle: Option<&'static str>,
}

/// Render one frame of the widget.
pub fn render(ctx: &egui::Context, app: &mut App) {
    let theme = Theme::default();
    let mut actions = UiActions::default();

    {
        let mut guard = app.state.write();
        let state = &mut *guard;

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(theme.background))
            .show(ctx, |ui| {
                render_backdrop(ui, state.variant, &mut actions, &theme);
            });

        egui::Area::new(egui::Id::new("chat-widget"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .show(ctx, |ui| {
                if state.visual.minimized {
                    if bubble::render_bubble(ui, state.visual.notification, &theme) {
                        actions.toggle = true;
                    }
                } else {
                    render_panel(ui, state, &mut actions, &theme);
                }
            });
    }

    dispatch(app, actions);
}

fn render_backdrop(
    ui: &mut egui::Ui,
    variant: WidgetVariant,
    actions: &mut UiActions,
    theme: &Theme,
) {
    match variant {
        WidgetVariant::Showroom => {
            ui.heading("SuperCarz Showroom");
            ui.colored_label(theme.dim, "Find your next vehicle - the assistant can help.");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                for vehicle in VEHICLES.iter().copied() {
                    if ui.button(format!("View {}", vehicle)).clicked() {
                        actions.vehicle = Some(vehicle);
                    }
                }
            });
        }
        WidgetVariant::SecurityDemo => {
            ui.heading("LLM Security Demo");
            ui.colored_label(
                theme.dim,
                "An intentionally vulnerable chatbot. Try prompt injections and watch the badges.",
            );
        }
    }
}

fn render_panel(
    ui: &mut egui::Ui,
    state: &mut crate::app::AppState,
    actions: &mut UiActions,
    theme: &Theme,
) {
    let [width, height] = if state.visual.expanded {
        PANEL_SIZE_EXPANDED
    } else {
        PANEL_SIZE
    };

    ui.group(|ui| {
        ui.set_width(width);
        ui.set_height(height);

        let header_response =
            header::render_header(ui, state.variant.title(), state.visual.expanded, theme);
        actions.toggle |= header_response.minimize_clicked;
        actions.expand |= header_response.expand_clicked;
        ui.separator();

        if state.variant == WidgetVariant::SecurityDemo {
            indicators::render_indicator_row(ui, &state.indicators, theme);
            ui.separator();
        }

        // Reserve room below the transcript for the input, chips, and footer
        let reserved = match state.variant {
            WidgetVariant::Showroom => 90.0,
            WidgetVariant::SecurityDemo => 120.0,
        };
        let list_height = (ui.available_height() - reserved).max(120.0);
        messages::render_messages(
            ui,
            &state.messages,
            state.visual.typing,
            list_height,
            theme,
        );

        if let Some(prompt) = state.system_prompt.clone() {
            prompt_panel::render_prompt_panel(ui, &prompt, theme);
        }

        if let Some(phrase) =
            suggestions::render_suggestions(ui, &state.suggestions, !state.visual.typing, theme)
        {
            actions.suggestion = Some(phrase);
        }

        ui.horizontal(|ui| {
            let input_width = ui.available_width() - 64.0;
            let text_edit = egui::TextEdit::singleline(&mut state.input)
                .desired_width(input_width)
                .hint_text("Type your message...");
            let response = ui.add_enabled(!state.visual.typing, text_edit);

            if state.visual.focus_input && !state.visual.typing {
                response.request_focus();
                state.visual.focus_input = false;
            }

            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let send_clicked = ui
                .add_enabled(!state.visual.typing, egui::Button::new("Send").fill(theme.accent))
                .clicked();
            actions.send |= enter_pressed || send_clicked;
        });

        if state.variant == WidgetVariant::SecurityDemo {
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    actions.reset = true;
                }

                // The label follows the local toggle value, not the backend
                let security_label = if state.security_enabled {
                    "Security: ON"
                } else {
                    "Security: OFF"
                };
                if ui.button(security_label).clicked() {
                    actions.toggle_security = true;
                }

                if ui.button("Show System Prompt").clicked() {
                    actions.show_prompt = true;
                }
            });
        }
    });
}

fn dispatch(app: &mut App, actions: UiActions) {
    if actions.toggle {
        app.handle_toggle_click();
    }
    if actions.expand {
        app.handle_expand_click();
    }
    if let Some(vehicle) = actions.vehicle {
        app.handle_vehicle_interest(vehicle);
    }
    if let Some(phrase) = actions.suggestion {
        app.handle_suggestion_click(phrase);
    }
    if actions.send {
        app.handle_send_click();
    }
    if actions.reset {
        app.handle_reset_click();
    }
    if actions.toggle_security {
        app.handle_security_toggle_click();
    }
    if actions.show_prompt {
        app.handle_show_prompt_click();
    }
}
