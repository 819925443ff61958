pub mod engine;

pub use engine::{autocomplete, search, AutocompleteEntry};
