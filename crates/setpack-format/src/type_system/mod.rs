//! Field kinds shared by schemas, emitters, and readers.

mod kind;

#[cfg(test)]
mod kind_tests;

pub use kind::FieldKind;
