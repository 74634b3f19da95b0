use egui;
use egui_extras::{Column, TableBuilder};
use std::time::Instant;

use super::autocomplete::{AutocompleteState, Phase};
use crate::storage::Person;

pub const NO_SUGGESTIONS_TEXT: &str = "No matching suggestions";
const ROW_HEIGHT: f32 = 24.0;

pub fn search_input_id() -> egui::Id {
    egui::Id::new("people-search-input")
}

pub struct SearchWindowState {
    placeholder: String,
    max_panel_height: f32,
    // Where the suggestions panel was drawn last frame
    panel_rect: Option<egui::Rect>,
}

impl SearchWindowState {
    pub fn new(placeholder: impl Into<String>, max_panel_height: f32) -> Self {
        Self {
            placeholder: placeholder.into(),
            max_panel_height,
            panel_rect: None,
        }
    }
    
    /// Draws the title, input and suggestions, feeding what happened into `state`.
    /// Returns the person picked this frame, if any.
    pub fn show(&mut self, ctx: &egui::Context, state: &mut AutocompleteState, now: Instant) -> Option<Person> {
        let mut confirm = false;
        
        // Consumed before the text edit sees them so the cursor stays put
        if state.is_focused() {
            ctx.input_mut(|i| {
                if i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowDown) {
                    state.highlight_next();
                }
                if i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowUp) {
                    state.highlight_previous();
                }
                if state.highlighted().is_some() && i.consume_key(egui::Modifiers::NONE, egui::Key::Enter) {
                    confirm = true;
                }
            });
        }
        
        let mut picked = None;
        
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(state.title());
            ui.add_space(10.0);
            
            let mut text = state.query().to_owned();
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .id(search_input_id())
                    .hint_text(self.placeholder.as_str())
                    .desired_width(f32::INFINITY),
            );
            
            if response.gained_focus() {
                state.focus();
            }
            if response.changed() {
                let change = state.input_changed(&text, now);
                log::debug!("Input {:?}: {:?}", text, change);
            }
            if state.is_focused() && !response.has_focus() && !self.pointer_busy_on_panel(ctx) {
                state.blur();
            }
            
            let mut clicked_row = None;
            if state.phase() != Phase::Unfocused {
                let panel = egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    if state.visible_len() == 0 {
                        ui.colored_label(ui.visuals().error_fg_color, NO_SUGGESTIONS_TEXT);
                    } else {
                        clicked_row = self.suggestion_rows(ui, state);
                    }
                });
                self.panel_rect = Some(panel.response.rect);
            } else {
                self.panel_rect = None;
            }
            
            if confirm {
                picked = state.confirm_highlighted().cloned();
                response.surrender_focus();
            } else if let Some(row) = clicked_row {
                picked = state.select_row(row).cloned();
            }
        });
        
        picked
    }
    
    // A press on a row takes focus from the text edit before the click lands.
    // Only an in-progress pointer interaction over the panel keeps it open;
    // keyboard focus loss or a release off the panel is a blur.
    fn pointer_busy_on_panel(&self, ctx: &egui::Context) -> bool {
        let (busy, hover) = ctx.input(|i| {
            (i.pointer.any_down() || i.pointer.any_released(), i.pointer.hover_pos())
        });
        
        match (self.panel_rect, hover) {
            (Some(rect), Some(pos)) => busy && rect.contains(pos),
            _ => false,
        }
    }
    
    fn suggestion_rows(&self, ui: &mut egui::Ui, state: &AutocompleteState) -> Option<usize> {
        let mut clicked = None;
        let highlighted = state.highlighted();
        
        let mut table = TableBuilder::new(ui)
            .id_salt(("suggestions", state.generation()))
            .striped(true)
            .sense(egui::Sense::click())
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder())
            .max_scroll_height(self.max_panel_height);
        
        if let Some(row) = highlighted {
            table = table.scroll_to_row(row, None);
        }
        
        table.body(|body| {
            body.rows(ROW_HEIGHT, state.visible_len(), |mut row| {
                let row_index = row.index();
                if let Some(person) = state.visible_at(row_index) {
                    row.set_selected(highlighted == Some(row_index));
                    
                    row.col(|ui| {
                        let color = ui.visuals().hyperlink_color;
                        ui.label(egui::RichText::new(&person.name).color(color));
                    });
                    
                    if row.response().clicked() {
                        clicked = Some(row_index);
                    }
                }
            });
        });
        
        clicked
    }
}
