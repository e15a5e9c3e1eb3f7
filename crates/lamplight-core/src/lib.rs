pub mod id;
pub mod error;
pub mod source;
pub mod link;
pub mod fuel;
pub mod graph;

// Re-export commonly used types
pub use id::{LinkId, SourceId};
pub use error::CoreError;
pub use source::Source;
pub use link::Link;
pub use fuel::FuelEffect;
pub use graph::FuelGraph;
