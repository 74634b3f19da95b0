use eframe::egui;

mod app;
mod config;
mod debounce;
mod error;
mod storage;
mod ui;

use app::AutocompleteApp;
use config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Config::load()?;
    let people = storage::load_people(config.data_path.as_deref())?;
    log::info!("Starting with {} people, debounce {:?}", people.len(), config.debounce_delay());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("People Autocomplete")
            .with_resizable(true)
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "People Autocomplete",
        options,
        Box::new(move |cc| Ok(Box::new(AutocompleteApp::new(cc, people, &config)))),
    )?;

    Ok(())
}
