//! Binary settings format for setpack.
//!
//! This crate contains:
//! - Field kinds with fixed widths and little-endian packing (`type_system`)
//! - Struct definitions and the schema registry (`schema`)
//! - Packed version numbers (`version`)
//! - A reader that decodes records back out of an emitted blob (`reader`)

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod error;
pub mod reader;
pub mod schema;
pub mod type_system;
pub mod version;

#[cfg(test)]
mod version_tests;

pub use error::{FormatError, ReadError};
pub use reader::{FieldValue, RecordReader};
pub use schema::{Field, Schema, StructDef, StructId};
pub use type_system::FieldKind;
pub use version::{PackedVersion, VERSION_FIELD};

/// Value a null struct reference packs as.
///
/// The root record always sits at offset 0 and can never be referenced,
/// so 0 cannot collide with a real target.
pub const NULL_OFFSET: u64 = 0;

/// Width of every pointer-sized field, independent of the host.
pub const POINTER_SIZE: usize = 8;

pub type Result<T> = std::result::Result<T, FormatError>;
