//! SuperCarz security demo widget - the intentionally vulnerable variant
//! with exploit indicator badges.

use widget::app::shell::Shell;
use widget::app::WidgetVariant;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 760.0])
            .with_min_inner_size([460.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SuperCarz Security Demo",
        options,
        Box::new(|_cc| Ok(Box::new(Shell::new(WidgetVariant::SecurityDemo)))),
    )
}
