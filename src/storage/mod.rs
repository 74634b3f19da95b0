pub mod indexer;
pub mod people;

pub use indexer::SearchIndex;
pub use people::{load_people, Person};
