use anyhow::{Context, Result};
use eframe::egui;
use launch_dash::app::LaunchDashApp;
use launch_dash::config::DashConfig;
use launch_dash::data::loader;
use launch_dash::state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashConfig::from_args(std::env::args_os().skip(1))?;

    // The dataset is read exactly once; a bad file stops us before any window opens.
    let dataset = loader::load_file(&config.data_path)
        .with_context(|| format!("loading {}", config.data_path.display()))
        .inspect_err(|e| log::error!("{e:#}"))?;
    log::info!(
        "Loaded {} launches from {} sites ({})",
        dataset.len(),
        dataset.sites.len(),
        config.data_path.display()
    );

    let state = AppState::new(dataset, config.slider);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
