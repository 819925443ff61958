pub mod collection;
pub mod contributor;
pub mod registry;
pub mod resource;

pub use collection::Collection;
pub use contributor::{Attributable, ContributorRoles};
pub use registry::Registry;
pub use resource::{Provider, Resource};
