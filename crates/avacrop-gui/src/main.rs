mod app;
mod convert;

use avacrop_core::config::CropConfig;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 380.0])
            .with_min_inner_size([320.0, 320.0])
            .with_title("Avacrop"),
        ..Default::default()
    };

    eframe::run_native(
        "avacrop",
        options,
        Box::new(|_cc| Ok(Box::new(app::CropApp::new(CropConfig::default())))),
    )
}
