//! Source generation for consumers of emitted blobs.
//!
//! Currently supports C: packed struct declarations, default data arrays,
//! and struct metadata tables.

pub mod c;
