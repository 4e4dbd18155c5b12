mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod workers;

use std::path::PathBuf;

use tutor_core::config::ClientConfig;

/// Environment variable naming a TOML config file.
const CONFIG_ENV: &str = "TUTOR_CONFIG";

fn load_config() -> ClientConfig {
    let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) else {
        return ClientConfig::default();
    };
    match ClientConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), "Failed to load config, using defaults: {e}");
            ClientConfig::default()
        }
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("GRE Tutor"),
        ..Default::default()
    };

    eframe::run_native(
        "GreTutor",
        options,
        Box::new(|cc| Ok(Box::new(app::TutorApp::new(&cc.egui_ctx, config)))),
    )
}
