//! SuperCarz showroom widget - the marketing-page variant.

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
            .with_inner_size([520.0, 720.0])
            .with_min_inner_size([420.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SuperCarz Showroom",
        options,
        Box::new(|_cc| Ok(Box::new(Shell::new(WidgetVariant::Showroom)))),
    )
}
