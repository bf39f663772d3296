//! Struct definitions and the schema registry.

mod ids;
mod registry;
mod struct_def;


pub use ids::StructId;
pub use registry::Schema;
pub use struct_def::{Field, StructDef};
