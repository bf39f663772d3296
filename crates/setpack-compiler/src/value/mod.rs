//! Value trees: records bound to struct definitions.

mod error;
mod tree;


pub use error::BindError;
pub use tree::{NodeId, StructVal, Value, ValueTree};
