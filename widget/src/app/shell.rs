//! # Widget Shell
//!
//! eframe wrapper around [`App`]: starts the one-shot timers, drains the
//! event channel each frame, renders the chat screen, and shows queued toast
//! notifications.

use crate::app::{App, WidgetVariant};
use crate::ui;
use crate::ui::widgets::notifications::NotificationManager;

/// The eframe application driving one widget variant.
pub struct Shell {
    app: App,
    toasts: NotificationManager,
    started: bool,
}

impl Shell {
    pub fn new(variant: WidgetVariant) -> Self {
        Self {
            app: App::new(variant),
            toasts: NotificationManager::new(),
            started: false,
        }
    }
}

impl eframe::App for Shell {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Timers must start after the frame loop owns the process
        if !self.started {
            self.app.start();
            self.started = true;
        }

        self.app.on_tick();

        // Hand queued notifications to the toast system
        let pending = {
            let mut state = self.app.state.write();
            std::mem::take(&mut state.pending_notifications)
        };
        for (level, message) in pending {
            match level.as_str() {
                "success" => self.toasts.success(message),
                "error" => self.toasts.error(message),
                "warning" => self.toasts.warning(message),
                _ => self.toasts.info(message),
            }
        }

        ui::screens::chat::render(ctx, &mut self.app);
        self.toasts.show(ctx);

        // Keep the typing animation moving; otherwise poll the event channel
        // at a relaxed cadence
        let typing = self.app.state.read().visual.typing;
        if typing {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
