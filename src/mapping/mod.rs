pub mod index;
pub mod overlap;

pub use index::MappingIndex;
pub use overlap::{overlap, OverlapResult};
