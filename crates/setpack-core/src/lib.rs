#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the setpack crates.
//!
//! - [`Colors`]: ANSI palette used by dumps and generated source listings
//! - [`utils`]: naming and formatting helpers
//! - [`document`]: declarative schema documents (JSON in, postcard binary in/out)

mod colors;
pub mod document;
pub mod utils;


pub use colors::Colors;
pub use document::{DocField, DocRecord, DocStruct, DocValue, Document, DocumentError, FieldType};
