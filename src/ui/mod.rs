pub mod autocomplete;
pub mod search_window;

pub use autocomplete::AutocompleteState;
pub use search_window::SearchWindowState;
