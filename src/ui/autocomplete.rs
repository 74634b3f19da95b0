use std::time::{Duration, Instant};

use crate::debounce::Debouncer;
use crate::storage::{Person, SearchIndex};

pub const NO_SELECTION_TITLE: &str = "No selected person";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unfocused,
    FocusedEmptyQuery,
    FocusedWithResults,
    FocusedNoResults,
}

/// Outcome of feeding new text from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextChange {
    Unchanged,
    Cleared,
    Scheduled,
}

pub struct AutocompleteState {
    people: Vec<Person>,
    index: SearchIndex,
    query: String,
    visible: Vec<usize>,
    selected: Option<usize>,
    focused: bool,
    highlighted: Option<usize>,
    generation: u64,
    debouncer: Debouncer,
}

impl AutocompleteState {
    pub fn new(people: Vec<Person>, debounce_delay: Duration) -> Self {
        let index = SearchIndex::new(&people);
        let visible = index.all();
        
        Self {
            people,
            index,
            query: String::new(),
            visible,
            selected: None,
            focused: false,
            highlighted: None,
            generation: 0,
            debouncer: Debouncer::new(debounce_delay),
        }
    }
    
    pub fn query(&self) -> &str {
        &self.query
    }
    
    pub fn is_focused(&self) -> bool {
        self.focused
    }
    
    pub fn selected(&self) -> Option<&Person> {
        self.selected.map(|idx| &self.people[idx])
    }
    
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }
    
    /// Bumped every time the visible list is replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }
    
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }
    
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }
    
    pub fn visible_at(&self, row: usize) -> Option<&Person> {
        self.visible.get(row).map(|&idx| &self.people[idx])
    }
    
    pub fn title(&self) -> String {
        match self.selected() {
            Some(person) => person.to_string(),
            None => NO_SELECTION_TITLE.to_string(),
        }
    }
    
    pub fn phase(&self) -> Phase {
        if !self.focused {
            Phase::Unfocused
        } else if self.query.is_empty() {
            Phase::FocusedEmptyQuery
        } else if self.visible.is_empty() {
            Phase::FocusedNoResults
        } else {
            Phase::FocusedWithResults
        }
    }
    
    pub fn focus(&mut self) {
        self.focused = true;
    }
    
    pub fn blur(&mut self) {
        self.focused = false;
        self.highlighted = None;
    }
    
    pub fn input_changed(&mut self, text: &str, now: Instant) -> TextChange {
        if text == self.query {
            return TextChange::Unchanged;
        }
        
        self.query.clear();
        self.query.push_str(text);
        self.selected = None;
        
        if self.query.is_empty() {
            // A filter still pending for the old text would hide the full list again
            self.debouncer.cancel();
            self.replace_visible(self.index.all());
            TextChange::Cleared
        } else {
            self.debouncer.schedule(now);
            log::debug!("Filter for {:?} armed ({:?})", self.query, self.debouncer.delay());
            TextChange::Scheduled
        }
    }
    
    /// Runs the filter if the debounce deadline has passed. Returns true when it ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.debouncer.poll(now) {
            return false;
        }
        
        let found = self.index.search(&self.query);
        log::debug!("Filter {:?} matched {} of {}", self.query, found.len(), self.people.len());
        self.replace_visible(found);
        true
    }
    
    /// Selects the record shown at `row` of the visible list.
    pub fn select_row(&mut self, row: usize) -> Option<&Person> {
        let idx = *self.visible.get(row)?;
        
        self.debouncer.cancel();
        self.query.clone_from(&self.people[idx].name);
        self.focused = false;
        self.highlighted = None;
        self.selected = Some(idx);
        self.selected()
    }
    
    pub fn highlight_next(&mut self) {
        if !self.focused || self.visible.is_empty() {
            return;
        }
        let last = self.visible.len() - 1;
        self.highlighted = Some(match self.highlighted {
            Some(row) => (row + 1).min(last),
            None => 0,
        });
    }
    
    pub fn highlight_previous(&mut self) {
        if !self.focused || self.visible.is_empty() {
            return;
        }
        self.highlighted = Some(self.highlighted.map_or(0, |row| row.saturating_sub(1)));
    }
    
    pub fn confirm_highlighted(&mut self) -> Option<&Person> {
        if !self.focused {
            return None;
        }
        let row = self.highlighted?;
        self.select_row(row)
    }
    
    fn replace_visible(&mut self, visible: Vec<usize>) {
        self.visible = visible;
        self.highlighted = None;
        self.generation += 1;
    }
}
