pub mod pattern;

pub use pattern::{ConfigWarning, PatternIndex};
