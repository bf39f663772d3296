//! Declarative settings documents.
//!
//! A document lists struct definitions and one or more root value trees.
//! Documents are read from JSON and round-trip through a compact binary form.

mod binary;
mod json;
mod types;

#[cfg(test)]
mod binary_tests;
#[cfg(test)]
mod json_tests;

pub use json::DocumentError;
pub use types::{DocField, DocRecord, DocStruct, DocValue, Document, FieldType};
