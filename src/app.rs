use eframe::egui;
use std::time::Instant;

use crate::config::Config;
use crate::storage::Person;
use crate::ui::{AutocompleteState, SearchWindowState};

pub struct AutocompleteApp {
    autocomplete: AutocompleteState,
    search_window: SearchWindowState,
}

impl AutocompleteApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, people: Vec<Person>, config: &Config) -> Self {
        Self {
            autocomplete: AutocompleteState::new(people, config.debounce_delay()),
            search_window: SearchWindowState::new(config.placeholder.clone(), config.max_panel_height),
        }
    }
}

impl eframe::App for AutocompleteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.autocomplete.poll(now);
        
        if let Some(person) = self.search_window.show(ctx, &mut self.autocomplete, now) {
            log::info!("Selected {}", person);
        }
        
        // Nothing else would wake the frame loop when the quiet period ends
        if let Some(deadline) = self.autocomplete.pending_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }
}
